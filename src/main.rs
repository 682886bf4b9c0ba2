//! CLI for decimal-sum.
//!
//! Reads a text file, checks that every non-blank line is a decimal number,
//! and prints each valid number's exact sum with a fixed addend.
//!
//! # Examples
//!
//! ```bash
//! # Default addend (-123.456), text report
//! decimal-sum numbers.txt
//!
//! # Different addend, JSON-lines report
//! decimal-sum numbers.txt --addend 0.01 --format json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use decimal_sum::logging::init_logging;
use decimal_sum::processing::{
    stdio_handler, LineProcessor, ProcessorConfig, ReportFormat, DEFAULT_ADDEND,
};

#[derive(Parser, Debug)]
#[command(name = "decimal-sum")]
#[command(version, about = "Validate decimal numbers and add them exactly", long_about = None)]
struct CommandLine {
    /// Input file, one number per line
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Decimal number added to every valid line
    #[arg(long, value_name = "DECIMAL", default_value = DEFAULT_ADDEND, allow_hyphen_values = true)]
    addend: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match CommandLine::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version print to stdout and are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        },
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: CommandLine) -> anyhow::Result<()> {
    let config = ProcessorConfig::new()
        .with_addend(cli.addend)
        .with_format(cli.format);

    let handler = stdio_handler(config.format, cli.verbose);
    let processor = LineProcessor::from_config(&config, handler)?;
    let summary = processor.process_file(&cli.input)?;

    tracing::info!(
        opened = summary.opened,
        lines = summary.lines_read,
        blank = summary.blank_lines,
        valid = summary.valid,
        invalid = summary.invalid,
        "processing finished"
    );
    Ok(())
}
