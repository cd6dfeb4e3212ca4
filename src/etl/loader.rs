//! Load stage: chunked, idempotent writes into `books_processed`.
//!
//! Each chunk runs delete-then-insert inside one transaction: existing rows
//! for the chunk's `book_id`s are removed before the insert, so repeated runs
//! over overlapping cutoff windows do not accumulate duplicates. Chunks are
//! retried independently; a chunk that exhausts its retry budget aborts the
//! load, and chunks committed before it stay persisted.

use sqlx::PgPool;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::config::EtlConfig;
use crate::error::{EtlError, Result};
use crate::models::{NewProcessedBook, ProcessedBook};
use crate::resilience::retry_with_backoff;

/// Counts reported by a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub rows_written: usize,
    pub chunks_processed: usize,
}

/// Write the batch into `books_processed` in chunks of
/// `config.chunk_size` records, retrying each chunk with the write retry
/// policy. Empty input returns a zero summary without touching the database.
pub async fn load(
    pool: &PgPool,
    records: &[NewProcessedBook],
    config: &EtlConfig,
) -> Result<LoadSummary> {
    if records.is_empty() {
        return Ok(LoadSummary::default());
    }

    // chunk_size 0 means unchunked: the whole batch as one delete+insert unit
    let chunk_size = if config.chunk_size == 0 {
        records.len()
    } else {
        config.chunk_size
    };

    let mut summary = LoadSummary::default();
    for chunk in records.chunks(chunk_size) {
        let written = retry_with_backoff(&config.write_retry, "DB load", || {
            write_chunk(pool, chunk)
        })
        .await
        .map_err(|e| EtlError::Write {
            message: e.to_string(),
            attempts: config.write_retry.max_attempts,
        })?;

        summary.rows_written += written as usize;
        summary.chunks_processed += 1;
        debug!(
            chunk = summary.chunks_processed,
            rows = written,
            total_rows = summary.rows_written,
            "chunk committed"
        );
    }

    info!(
        rows_written = summary.rows_written,
        chunks_processed = summary.chunks_processed,
        "load into books_processed complete"
    );
    Ok(summary)
}

/// One chunk's delete+insert as a single transaction.
async fn write_chunk(pool: &PgPool, chunk: &[NewProcessedBook]) -> std::result::Result<u64, sqlx::Error> {
    let book_ids = distinct_book_ids(chunk);

    let mut tx = pool.begin().await?;
    ProcessedBook::delete_for_books(&mut tx, &book_ids).await?;
    let written = ProcessedBook::insert_batch(&mut tx, chunk).await?;
    tx.commit().await?;

    Ok(written)
}

fn distinct_book_ids(chunk: &[NewProcessedBook]) -> Vec<i32> {
    chunk
        .iter()
        .map(|record| record.book_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
