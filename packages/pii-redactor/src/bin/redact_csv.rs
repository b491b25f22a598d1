//! CLI for redacting PII from a CSV/TSV export
//!
//! Reads `record_id` / `data_json` rows, masks PII in each JSON payload and
//! writes `record_id,redacted_data_json,is_pii` rows to the output file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pii_redactor::{exit_code_for, redact_file, Config, RecordProcessor, RunSummary};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "redact_csv")]
#[command(about = "Detect and mask PII in the JSON payloads of a CSV or TSV file")]
struct Cli {
    /// Input CSV or TSV file
    input: PathBuf,

    /// Output CSV path (overrides REDACT_OUTPUT_PATH)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the summary
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pii_redactor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    let processor = RecordProcessor::new();
    let summary = redact_file(&cli.input, &config.output_path, &processor, &config)
        .with_context(|| format!("Failed to redact {}", cli.input.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        print_summary(&summary, &config);
    }

    Ok(())
}

fn print_summary(summary: &RunSummary, config: &Config) {
    println!("Records processed: {}", summary.records_processed);
    println!("PII records detected: {}", summary.pii_detected);
    if summary.repaired > 0 {
        println!("Records repaired: {}", summary.repaired);
    }
    if summary.errors > 0 {
        println!("Records with unparseable payloads: {}", summary.errors);
    }
    println!("Output saved as: {}", config.output_path.display());
}
