//! CSV serialisation of a [ResultTable].


use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;

use crate::{record::ResultTable, schema};

impl ResultTable {
    /// Writes the header row then one row per record.
    pub fn write_csv<W: Write>(&self, w: W) -> Result<()> {
        let mut output = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(w);

        output
            .write_record(schema::header())
            .context("writing header row")?;

        for (row_index, record) in self.iter().enumerate() {
            output
                .write_record(record.values())
                .with_context(|| format!("writing row index {row_index}"))?;
        }

        output.flush().context("flushing CSV output")?;
        Ok(())
    }

    /// Writes the table to `path`. The file only appears once it has been
    /// written completely.
    pub fn write_csv_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {:?}", parent))?;
        }

        let mut file = AtomicWriteFile::open(path)
            .with_context(|| format!("opening output file {:?}", path))?;
        self.write_csv(&mut file)?;
        file.commit()
            .with_context(|| format!("committing output file {:?}", path))?;
        Ok(())
    }
}
