//! Property-based tests for the pure transform rules.

use bigdecimal::BigDecimal;
use books_etl::etl::transformer::{classify_price, round_price, transform};
use books_etl::models::{PriceCategory, SourceBook};
use chrono::Utc;
use proptest::prelude::*;
use std::str::FromStr;

/// Cent-denominated prices cover every two-fractional-digit value the source
/// table can hold.
fn price_from_cents(cents: u64) -> BigDecimal {
    BigDecimal::from_str(&format!("{}.{:02}", cents / 100, cents % 100)).unwrap()
}

proptest! {
    /// Property: rounding to one fractional digit moves the price by at most
    /// half a tenth.
    #[test]
    fn rounding_error_is_at_most_half_a_tenth(cents in 0u64..100_000_000) {
        let price = price_from_cents(cents);
        let rounded = round_price(&price);
        let error = (rounded - &price).abs();
        prop_assert!(error <= BigDecimal::from_str("0.05").unwrap());
    }

    /// Property: the rounded price has at most one fractional digit.
    #[test]
    fn rounded_price_has_at_most_one_fractional_digit(cents in 0u64..100_000_000) {
        let price = price_from_cents(cents);
        let tenths = round_price(&price) * BigDecimal::from(10);
        prop_assert!(tenths.is_integer());
    }

    /// Property: classification depends on the price alone, and the cent
    /// boundary sits exactly where rounding pushes a price to 500.0 - every
    /// price at or above 499.95 is premium, everything below is budget.
    #[test]
    fn classification_boundary_in_cents(cents in 0u64..100_000_000) {
        let price = price_from_cents(cents);
        let category = classify_price(&round_price(&price));
        let expected = if cents >= 49_995 {
            PriceCategory::Premium
        } else {
            PriceCategory::Budget
        };
        prop_assert_eq!(category, expected);
    }

    /// Property: transform is deterministic - the same record maps to the
    /// same output, independent of any other records.
    #[test]
    fn transform_is_deterministic(cents in 0u64..100_000_000, book_id in 1i32..100_000) {
        let processed_at = Utc::now();
        let book = SourceBook {
            book_id,
            title: "Some Book".to_string(),
            price: price_from_cents(cents),
            genre: None,
            stock_quantity: 0,
            last_updated: processed_at,
        };
        prop_assert_eq!(transform(&book, processed_at), transform(&book, processed_at));
    }
}
