//! # Resilience Module
//!
//! Bounded retry with exponential backoff for the two operations the pipeline
//! treats as transient: opening the database connection and committing a load
//! chunk. Read queries are never retried here.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use books_etl::resilience::{retry_with_backoff, RetryConfig};
//!
//! # async fn example() -> Result<(), std::io::Error> {
//! let config = RetryConfig::default();
//! let value = retry_with_backoff(&config, "fetch", || async {
//!     Ok::<u32, std::io::Error>(42)
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod retry;

pub use retry::{retry_with_backoff, RetryConfig};
