use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Args;
use normalize::{
    assemble::Assembler,
    batch::{self, BatchEvent, BatchEvents, BatchSpec},
    document::DocumentProcessor,
    linenorm::LineNormalizer,
    pagesource::PdfExtractPageSource,
};

use super::rulesarg::RulesArgs;

/// Extracts results tables from every PDF in a directory.
#[derive(Args, Debug)]
pub struct Command {
    /// Directory containing the input PDFs. Subdirectories are not searched.
    raw_dir: PathBuf,

    /// Directory to write the CSV files into.
    parsed_dir: PathBuf,

    /// Name output files with a ".csv" extension. By default each output
    /// file has the same name as its input PDF.
    #[arg(long)]
    csv_extension: bool,

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

    let spec = BatchSpec {
        raw_dir: &cmd.raw_dir,
        parsed_dir: &cmd.parsed_dir,
        csv_extension: cmd.csv_extension,
    };

    let summary = batch::run_batch(&processor, &spec, &mut EventPrinter)?;

    if summary.failed > 0 {
        return Err(anyhow!(
            "{} of {} documents failed",
            summary.failed,
            summary.failed + summary.succeeded
        ));
    }

    Ok(())
}

struct EventPrinter;

impl BatchEvents for EventPrinter {
    fn on_event(&mut self, event: BatchEvent) {
        match event {
            BatchEvent::Started { input } => {
                println!("Started processing {}", input.display());
            }
            BatchEvent::Finished { output, .. } => {
                println!("Finished processing {}", output.display());
            }
            BatchEvent::Failed { input, err } => {
                eprintln!("Failed processing {}: {:?}", input.display(), err);
            }
        }
    }
}
