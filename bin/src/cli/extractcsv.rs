use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use normalize::{
    assemble::Assembler, document::DocumentProcessor, linenorm::LineNormalizer,
    pagesource::PdfExtractPageSource,
};

use super::rulesarg::RulesArgs;

/// Extracts the results table from a single PDF as a CSV file.
#[derive(Args, Debug)]
pub struct Command {
    /// Path to input PDF.
    input_pdf: PathBuf,

    /// Path to write the CSV file to. It is only created once the whole
    /// document has been processed.
    output_csv: PathBuf,

    /// Options relating to line splitting.
    #[command(flatten)]
    rules: RulesArgs,
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    let rules = cmd.rules.load_rules()?;
    let assembler = Assembler::new(LineNormalizer::new(&rules), cmd.rules.reject_policy());
    let source = PdfExtractPageSource;
    let processor = DocumentProcessor::new(&source, assembler);

    let assembled = processor.process_to_file(&cmd.input_pdf, &cmd.output_csv)?;

    eprintln!(
        "Wrote {} records to {} ({} lines rejected).",
        assembled.table.len(),
        cmd.output_csv.display(),
        assembled.rejected.len(),
    );

    Ok(())
}
