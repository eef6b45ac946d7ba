//! Processes every PDF in a directory into a directory of CSV files.


use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};

use crate::document::DocumentProcessor;

/// Specifies the directories of a batch run.
#[derive(Clone, Copy, Debug)]
pub struct BatchSpec<'a> {
    /// Directory holding the input PDFs. Subdirectories are not searched.
    pub raw_dir: &'a Path,
    /// Directory that the CSV files are written into.
    pub parsed_dir: &'a Path,
    /// Replace the ".pdf" extension of output files with ".csv". Otherwise
    /// the output file has the same name as its input.
    pub csv_extension: bool,
}

/// Batch event emitted to track progress.
#[derive(Debug)]
pub enum BatchEvent {
    /// Processing of `input` is starting.
    Started { input: PathBuf },
    /// `output` was written from `input`.
    Finished {
        input: PathBuf,
        output: PathBuf,
        records: usize,
        rejected: usize,
    },
    /// Processing of `input` failed, and no output was written for it. The
    /// batch continues with the next input.
    Failed { input: PathBuf, err: anyhow::Error },
}

/// Trait to implement to receive notifications about batch events.
pub trait BatchEvents {
    fn on_event(&mut self, event: BatchEvent);
}

/// Document counts of a completed batch.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Runs `processor` over every PDF in `spec.raw_dir`, in file name order.
pub fn run_batch(
    processor: &DocumentProcessor,
    spec: &BatchSpec,
    events: &mut dyn BatchEvents,
) -> Result<BatchSummary> {
    let inputs =
        list_pdfs(spec.raw_dir).with_context(|| format!("listing {:?}", spec.raw_dir))?;
    log::info!("found {} PDF files in {:?}", inputs.len(), spec.raw_dir);

    let mut summary = BatchSummary::default();
    for input in inputs {
        events.on_event(BatchEvent::Started {
            input: input.clone(),
        });

        let result = output_path(spec, &input).and_then(|output| {
            processor
                .process_to_file(&input, &output)
                .map(|assembled| (output, assembled))
        });

        match result {
            Ok((output, assembled)) => {
                summary.succeeded += 1;
                events.on_event(BatchEvent::Finished {
                    input,
                    output,
                    records: assembled.table.len(),
                    rejected: assembled.rejected.len(),
                });
            }
            Err(err) => {
                summary.failed += 1;
                events.on_event(BatchEvent::Failed { input, err });
            }
        }
    }

    Ok(summary)
}

/// Lists the files directly within `dir` that have a "pdf" extension, sorted
/// by name. A directory that does not exist has no files.
pub fn list_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for dir_entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let dir_entry = match dir_entry {
            Ok(dir_entry) => dir_entry,
            Err(e) => match e.io_error() {
                Some(io_err) if io_err.kind() == ErrorKind::NotFound && e.path() == Some(dir) => {
                    return Ok(paths);
                }
                _ => return Err(anyhow!(e)),
            },
        };

        let is_pdf = dir_entry.path().extension().is_some_and(|ext| ext == "pdf");
        if dir_entry.file_type().is_file() && is_pdf {
            paths.push(dir_entry.into_path());
        }
    }
    Ok(paths)
}

/// Path within `spec.parsed_dir` of the output file for `input`.
pub fn output_path(spec: &BatchSpec, input: &Path) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .ok_or_else(|| anyhow!("input path {:?} has no file name", input))?;

    let mut output = spec.parsed_dir.join(file_name);
    if spec.csv_extension {
        output.set_extension("csv");
    }
    Ok(output)
}
