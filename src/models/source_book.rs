use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::{FromRow, PgPool};

/// SourceBook represents one row of the `books` source table. The table is
/// owned by an external writer; the pipeline only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SourceBook {
    pub book_id: i32,
    pub title: String,
    pub price: BigDecimal,
    pub genre: Option<String>,
    pub stock_quantity: i32,
    /// Source-maintained watermark, monotonic per row on update.
    pub last_updated: DateTime<Utc>,
}

impl SourceBook {
    /// Fetch every book whose watermark is at or after the cutoff.
    ///
    /// Ordered by `(last_updated, book_id)` so repeated runs see rows in the
    /// same order. An empty result is a valid outcome, not an error.
    pub async fn updated_since(
        pool: &PgPool,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<SourceBook>, sqlx::Error> {
        sqlx::query_as::<_, SourceBook>(
            r#"
            SELECT book_id, title, price, genre, stock_quantity, last_updated
            FROM books
            WHERE last_updated >= $1
            ORDER BY last_updated ASC, book_id ASC
            "#,
        )
        .bind(cutoff)
        .fetch_all(pool)
        .await
    }
}
