//! Pipeline orchestration: connect, extract, transform, load.
//!
//! The run is strictly sequential on a single connection. Per-stage counts
//! are reported as the run progresses, and an extraction that matches zero
//! rows short-circuits the run as a success without touching the destination
//! table.

use chrono::{NaiveDate, NaiveTime, Utc};
use std::time::{Duration, Instant};
use tracing::info;

use crate::config::EtlConfig;
use crate::database::DatabaseConnection;
use crate::error::Result;
use crate::etl::{extractor, loader, transformer};

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Extraction matched zero rows; the destination table was not touched.
    NoNewRecords,
    /// Records were transformed and loaded.
    Loaded,
}

/// Per-stage counts of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub outcome: PipelineOutcome,
    pub rows_extracted: usize,
    pub rows_transformed: usize,
    pub rows_loaded: usize,
    pub chunks_processed: usize,
    pub elapsed: Duration,
}

/// Sequences the ETL stages over one database connection.
pub struct Pipeline {
    config: EtlConfig,
}

impl Pipeline {
    pub fn new(config: EtlConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline for the given inclusive cutoff date. The
    /// connection is closed before returning, on success and on failure.
    pub async fn run(&self, cutoff: NaiveDate) -> Result<PipelineReport> {
        let started = Instant::now();
        let cutoff_ts = cutoff.and_time(NaiveTime::MIN).and_utc();

        info!(cutoff = %cutoff, "starting ETL run");
        let connection = DatabaseConnection::connect(&self.config).await?;
        let result = self.run_stages(&connection, cutoff_ts, started).await;
        connection.close().await;
        result
    }

    async fn run_stages(
        &self,
        connection: &DatabaseConnection,
        cutoff_ts: chrono::DateTime<Utc>,
        started: Instant,
    ) -> Result<PipelineReport> {
        let books = extractor::extract(connection.pool(), cutoff_ts).await?;

        if books.is_empty() {
            info!("no new books to process for the given cutoff date, run complete");
            return Ok(PipelineReport {
                outcome: PipelineOutcome::NoNewRecords,
                rows_extracted: 0,
                rows_transformed: 0,
                rows_loaded: 0,
                chunks_processed: 0,
                elapsed: started.elapsed(),
            });
        }

        // One timestamp per run: every loaded row carries the load time
        let processed_at = Utc::now();
        let records = transformer::transform_all(&books, processed_at);
        info!(rows_transformed = records.len(), "transformed extracted records");

        let summary = loader::load(connection.pool(), &records, &self.config).await?;

        let report = PipelineReport {
            outcome: PipelineOutcome::Loaded,
            rows_extracted: books.len(),
            rows_transformed: records.len(),
            rows_loaded: summary.rows_written,
            chunks_processed: summary.chunks_processed,
            elapsed: started.elapsed(),
        };
        info!(
            rows_extracted = report.rows_extracted,
            rows_loaded = report.rows_loaded,
            chunks_processed = report.chunks_processed,
            elapsed_secs = report.elapsed.as_secs_f64(),
            "✅ ETL run completed successfully"
        );
        Ok(report)
    }
}
