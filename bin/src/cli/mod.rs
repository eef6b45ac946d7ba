use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use simplelog::LevelFilter;

mod batch;
mod extractcsv;
mod rulesarg;

/// Converts race results PDFs into CSV files.
#[derive(Debug, Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Logging level.
    #[arg(long, default_value = "Warn")]
    log_level: LevelFilter,
}

#[derive(Debug, Subcommand)]
enum Command {
    ExtractCsv(extractcsv::Command),
    Batch(batch::Command),
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default())
        .with_context(|| "configuring logging")?;

    use Command::*;
    match &args.command {
        ExtractCsv(cmd) => extractcsv::run(cmd),
        Batch(cmd) => batch::run(cmd),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[gtest]
    fn test_parse_batch() -> googletest::Result<()> {
        let args = Args::try_parse_from([
            "raceresults",
            "--log-level",
            "Info",
            "batch",
            "--csv-extension",
            "--max-rejected-ratio",
            "0.2",
            "raw",
            "parsed",
        ])?;

        expect_eq!(args.log_level, LevelFilter::Info);
        expect_true!(matches!(args.command, Command::Batch(_)));
        Ok(())
    }

    #[gtest]
    fn test_parse_extract_csv() -> googletest::Result<()> {
        let args = Args::try_parse_from([
            "raceresults",
            "extract-csv",
            "--extra-rules",
            "rules.yaml",
            "results.pdf",
            "results.csv",
        ])?;

        expect_eq!(args.log_level, LevelFilter::Warn);
        expect_true!(matches!(args.command, Command::ExtractCsv(_)));
        Ok(())
    }

    #[gtest]
    fn test_rejects_ratio_out_of_range() {
        expect_that!(
            Args::try_parse_from([
                "raceresults",
                "batch",
                "--max-rejected-ratio",
                "1.5",
                "raw",
                "parsed",
            ]),
            err(anything())
        );
    }
}
