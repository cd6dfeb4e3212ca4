//! # Books ETL
//!
//! Batch ETL pipeline for the books catalog: extract rows from the `books`
//! table filtered by a watermark timestamp, compute a rounded price and a
//! price-tier label, and load the results into `books_processed` with
//! idempotent, chunked, retried writes.
//!
//! ## Architecture
//!
//! One run is a linear sequence over a single PostgreSQL connection:
//! connect (with retry/backoff) → extract → transform (pure) → load
//! (chunked delete+insert, per-chunk retry). No parallelism within an
//! invocation; concurrent invocations over overlapping cutoff windows are a
//! documented limitation, not a supported mode.
//!
//! ## Module Organization
//!
//! - [`config`] - explicit configuration struct built once from the environment
//! - [`database`] - connection management with retry and a probe query
//! - [`models`] - typed records for the source and destination tables
//! - [`etl`] - the extract, transform, load stages and the orchestrator
//! - [`resilience`] - bounded exponential backoff retry
//! - [`error`] - structured error taxonomy
//! - [`logging`] - tracing initialization for the binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use books_etl::config::EtlConfig;
//! use books_etl::etl::Pipeline;
//! use chrono::NaiveDate;
//!
//! # async fn example() -> Result<(), books_etl::error::EtlError> {
//! let config = EtlConfig::from_env()?;
//! let cutoff = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let report = Pipeline::new(config).run(cutoff).await?;
//! println!("loaded {} rows", report.rows_loaded);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod etl;
pub mod logging;
pub mod models;
pub mod resilience;

pub use config::{parse_cutoff_date, DatabaseConfig, EtlConfig};
pub use database::DatabaseConnection;
pub use error::{EtlError, Result};
pub use etl::{LoadSummary, Pipeline, PipelineOutcome, PipelineReport};
pub use models::{NewProcessedBook, PriceCategory, ProcessedBook, SourceBook};
pub use resilience::RetryConfig;
