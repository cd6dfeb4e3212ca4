use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder, Type};

/// Price tier derived from the rounded price, matching the destination
/// table's `price_category` text constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "text")]
pub enum PriceCategory {
    #[sqlx(rename = "budget")]
    #[serde(rename = "budget")]
    Budget,
    #[sqlx(rename = "premium")]
    #[serde(rename = "premium")]
    Premium,
}

impl PriceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceCategory::Budget => "budget",
            PriceCategory::Premium => "premium",
        }
    }
}

impl std::fmt::Display for PriceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Insert-side processed record (without the database-generated key).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProcessedBook {
    pub book_id: i32,
    pub title: String,
    pub original_price: BigDecimal,
    pub rounded_price: BigDecimal,
    pub genre: Option<String>,
    pub price_category: PriceCategory,
    pub processed_at: DateTime<Utc>,
}

/// ProcessedBook represents one row of the `books_processed` destination
/// table. Rows are created solely by the loader and never updated in place;
/// a load cycle deletes and reinserts per `book_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProcessedBook {
    pub processed_id: i32,
    pub book_id: i32,
    pub title: String,
    pub original_price: BigDecimal,
    pub rounded_price: BigDecimal,
    pub genre: Option<String>,
    pub price_category: PriceCategory,
    pub processed_at: DateTime<Utc>,
}

impl ProcessedBook {
    /// Delete existing rows for the given book ids. Runs inside the same
    /// transaction as the insert that follows it.
    pub async fn delete_for_books(
        conn: &mut PgConnection,
        book_ids: &[i32],
    ) -> Result<u64, sqlx::Error> {
        if book_ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query("DELETE FROM books_processed WHERE book_id = ANY($1)")
            .bind(book_ids)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Multi-row insert of one chunk.
    pub async fn insert_batch(
        conn: &mut PgConnection,
        rows: &[NewProcessedBook],
    ) -> Result<u64, sqlx::Error> {
        if rows.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO books_processed \
             (book_id, title, original_price, rounded_price, genre, price_category, processed_at) ",
        );
        builder.push_values(rows, |mut values, row| {
            values
                .push_bind(row.book_id)
                .push_bind(&row.title)
                .push_bind(&row.original_price)
                .push_bind(&row.rounded_price)
                .push_bind(&row.genre)
                .push_bind(row.price_category.as_str())
                .push_bind(row.processed_at);
        });

        let result = builder.build().execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    /// Current rows for one book, newest first.
    pub async fn for_book(pool: &PgPool, book_id: i32) -> Result<Vec<ProcessedBook>, sqlx::Error> {
        sqlx::query_as::<_, ProcessedBook>(
            r#"
            SELECT processed_id, book_id, title, original_price, rounded_price,
                   genre, price_category, processed_at
            FROM books_processed
            WHERE book_id = $1
            ORDER BY processed_at DESC, processed_id DESC
            "#,
        )
        .bind(book_id)
        .fetch_all(pool)
        .await
    }

    /// Total row count in the destination table.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books_processed")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_category_maps_to_table_constraint_values() {
        assert_eq!(PriceCategory::Budget.as_str(), "budget");
        assert_eq!(PriceCategory::Premium.as_str(), "premium");
        assert_eq!(PriceCategory::Premium.to_string(), "premium");
    }

    #[test]
    fn price_category_serializes_lowercase() {
        let json = serde_json::to_string(&PriceCategory::Budget).unwrap();
        assert_eq!(json, "\"budget\"");
    }
}
