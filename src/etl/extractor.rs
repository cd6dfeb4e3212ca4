//! Extract stage: the watermark read against the `books` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;

use crate::error::{EtlError, Result};
use crate::models::SourceBook;

/// Run the read query selecting every book with `last_updated >= cutoff`.
///
/// Zero matching rows is a valid, expected outcome and returns an empty
/// vector; only a failing query (or an undecodable row) is an error. Not
/// retried at this layer.
pub async fn extract(pool: &PgPool, cutoff: DateTime<Utc>) -> Result<Vec<SourceBook>> {
    let books = SourceBook::updated_since(pool, cutoff)
        .await
        .map_err(|e| EtlError::Query {
            message: format!("failed to read from books: {e}"),
        })?;

    info!(
        rows_extracted = books.len(),
        cutoff = %cutoff,
        "extracted records from books table"
    );
    Ok(books)
}
