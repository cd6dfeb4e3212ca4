//! # Books ETL CLI
//!
//! Command-line entry point for the batch pipeline. Takes one positional
//! cutoff date and exits 0 on success (including the no-new-records case) or
//! 1 after reporting the failure.

use chrono::NaiveDate;
use clap::Parser;
use std::process;
use tracing::{error, info};

use books_etl::config::{parse_cutoff_date, EtlConfig};
use books_etl::etl::{Pipeline, PipelineOutcome};
use books_etl::logging::init_logging;

#[derive(Parser)]
#[command(name = "books-etl")]
#[command(about = "Batch ETL for the books catalog: extract by watermark, transform prices, load processed rows")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Inclusive cutoff date (YYYY-MM-DD); books updated at or after this
    /// date are processed
    #[arg(value_name = "CUTOFF_DATE", value_parser = parse_cutoff_arg)]
    cutoff: NaiveDate,
}

fn parse_cutoff_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_cutoff_date(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = match EtlConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "refusing to start with invalid configuration");
            process::exit(1);
        }
    };

    match Pipeline::new(config).run(cli.cutoff).await {
        Ok(report) => match report.outcome {
            PipelineOutcome::NoNewRecords => {
                info!("no new books found for the given cutoff date, nothing to load");
            }
            PipelineOutcome::Loaded => {
                info!(
                    rows_loaded = report.rows_loaded,
                    chunks_processed = report.chunks_processed,
                    "ETL run finished"
                );
            }
        },
        Err(e) => {
            error!(error = %e, "ETL run failed");
            process::exit(1);
        }
    }
}
