//! Pure per-record transformation: price rounding and tier classification.
//!
//! No I/O and no shared state; safe to apply record by record in any order.
//!
//! Two rules are pinned here and must stay stable:
//!
//! - `rounded_price` is the price at one fractional digit, rounded
//!   half-to-even (banker's rounding): `450.75 -> 450.8`, `450.65 -> 450.6`.
//! - `price_category` is derived from the **rounded** price: `premium` when
//!   `rounded_price >= 500`, `budget` below. A price of `499.95` rounds to
//!   `500.0` and therefore classifies as premium.

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{DateTime, Utc};

use crate::models::{NewProcessedBook, PriceCategory, SourceBook};

/// Rounded prices at or above this value classify as premium.
pub const PREMIUM_THRESHOLD: i64 = 500;

/// Fractional digits kept in `rounded_price`.
const ROUNDED_PRICE_SCALE: i64 = 1;

/// Round a price to one fractional digit, half-to-even.
pub fn round_price(price: &BigDecimal) -> BigDecimal {
    price.with_scale_round(ROUNDED_PRICE_SCALE, RoundingMode::HalfEven)
}

/// Classify a rounded price into its tier.
pub fn classify_price(rounded_price: &BigDecimal) -> PriceCategory {
    if *rounded_price >= BigDecimal::from(PREMIUM_THRESHOLD) {
        PriceCategory::Premium
    } else {
        PriceCategory::Budget
    }
}

/// Map one source record to its processed form. `processed_at` is stamped by
/// the caller at load time so this function stays time-independent.
pub fn transform(book: &SourceBook, processed_at: DateTime<Utc>) -> NewProcessedBook {
    let rounded_price = round_price(&book.price);
    let price_category = classify_price(&rounded_price);

    NewProcessedBook {
        book_id: book.book_id,
        title: book.title.clone(),
        original_price: book.price.clone(),
        rounded_price,
        genre: book.genre.clone(),
        price_category,
        processed_at,
    }
}

/// Transform a batch, preserving input order.
pub fn transform_all(books: &[SourceBook], processed_at: DateTime<Utc>) -> Vec<NewProcessedBook> {
    books.iter().map(|book| transform(book, processed_at)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn decimal(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    fn book(price: &str, genre: Option<&str>) -> SourceBook {
        SourceBook {
            book_id: 1,
            title: "A Book".to_string(),
            price: decimal(price),
            genre: genre.map(String::from),
            stock_quantity: 10,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn rounds_to_one_fractional_digit() {
        assert_eq!(round_price(&decimal("100.00")), decimal("100.0"));
        assert_eq!(round_price(&decimal("999.99")), decimal("1000.0"));
        assert_eq!(round_price(&decimal("299.99")), decimal("300.0"));
        assert_eq!(round_price(&decimal("750.50")), decimal("750.5"));
        assert_eq!(round_price(&decimal("499.95")), decimal("500.0"));
    }

    #[test]
    fn midpoints_round_half_to_even() {
        assert_eq!(round_price(&decimal("450.75")), decimal("450.8"));
        assert_eq!(round_price(&decimal("450.65")), decimal("450.6"));
        assert_eq!(round_price(&decimal("0.05")), decimal("0.0"));
        assert_eq!(round_price(&decimal("0.15")), decimal("0.2"));
    }

    #[test]
    fn classification_boundary_is_inclusive_on_the_premium_side() {
        assert_eq!(classify_price(&decimal("499.9")), PriceCategory::Budget);
        assert_eq!(classify_price(&decimal("500.0")), PriceCategory::Premium);
        assert_eq!(classify_price(&decimal("500")), PriceCategory::Premium);
        assert_eq!(classify_price(&decimal("0")), PriceCategory::Budget);
    }

    #[test]
    fn budget_book_scenario() {
        let record = transform(&book("299.99", Some("Fiction")), Utc::now());
        assert_eq!(record.rounded_price, decimal("300.0"));
        assert_eq!(record.price_category, PriceCategory::Budget);
        assert_eq!(record.original_price, decimal("299.99"));
    }

    #[test]
    fn premium_book_scenario() {
        let record = transform(&book("750.50", Some("Tech")), Utc::now());
        assert_eq!(record.rounded_price, decimal("750.5"));
        assert_eq!(record.price_category, PriceCategory::Premium);
    }

    #[test]
    fn borderline_price_rounds_into_premium() {
        // 499.95 is below the threshold, but its rounded form is not
        let record = transform(&book("499.95", Some("History")), Utc::now());
        assert_eq!(record.rounded_price, decimal("500.0"));
        assert_eq!(record.price_category, PriceCategory::Premium);
    }

    #[test]
    fn missing_genre_stays_missing() {
        let record = transform(&book("10.00", None), Utc::now());
        assert_eq!(record.genre, None);
    }

    #[test]
    fn copies_fields_and_stamps_the_given_timestamp() {
        let processed_at = Utc::now();
        let source = book("123.45", Some("Fiction"));
        let record = transform(&source, processed_at);

        assert_eq!(record.book_id, source.book_id);
        assert_eq!(record.title, source.title);
        assert_eq!(record.genre, source.genre);
        assert_eq!(record.processed_at, processed_at);
    }

    #[test]
    fn transform_all_preserves_order() {
        let books = vec![book("1.00", None), book("2.00", None), book("3.00", None)];
        let records = transform_all(&books, Utc::now());
        let prices: Vec<_> = records.iter().map(|r| r.original_price.clone()).collect();
        assert_eq!(prices, vec![decimal("1.00"), decimal("2.00"), decimal("3.00")]);
    }
}
