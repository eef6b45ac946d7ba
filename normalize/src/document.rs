//! Processing of a single PDF document, from page text to CSV file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    assemble::{Assembled, Assembler},
    pagesource::PageSource,
};

/// Extracts, assembles and writes documents.
pub struct DocumentProcessor<'a> {
    source: &'a dyn PageSource,
    assembler: Assembler<'a>,
}

impl<'a> DocumentProcessor<'a> {
    pub fn new(source: &'a dyn PageSource, assembler: Assembler<'a>) -> Self {
        Self { source, assembler }
    }

    /// Reads and assembles the document at `pdf_path`.
    pub fn process(&self, pdf_path: &Path) -> Result<Assembled> {
        let pages = self.source.pages(pdf_path)?;
        let assembled = self
            .assembler
            .assemble(&pages)
            .with_context(|| format!("assembling records from {:?}", pdf_path))?;

        log::info!(
            "{:?}: {} pages, {} records, {} lines rejected",
            pdf_path,
            pages.len(),
            assembled.table.len(),
            assembled.rejected.len(),
        );

        Ok(assembled)
    }

    /// Processes the document at `pdf_path` and writes its CSV to
    /// `output_path`. Nothing is written if any step fails.
    pub fn process_to_file(&self, pdf_path: &Path, output_path: &Path) -> Result<Assembled> {
        let assembled = self.process(pdf_path)?;
        assembled
            .table
            .write_csv_file(output_path)
            .with_context(|| format!("writing CSV for {:?}", pdf_path))?;
        Ok(assembled)
    }
}
