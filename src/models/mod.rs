//! # Data Models
//!
//! Typed records for the two tables the pipeline touches: `books` (read-only
//! source) and `books_processed` (destination, written only by the loader).

pub mod processed_book;
pub mod source_book;

pub use processed_book::{NewProcessedBook, PriceCategory, ProcessedBook};
pub use source_book::SourceBook;
