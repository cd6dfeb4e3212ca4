//! # ETL Stages
//!
//! The pipeline's four stages, leaf modules first:
//!
//! - [`extractor`] - watermark read from the `books` table
//! - [`transformer`] - pure per-record price rounding and classification
//! - [`loader`] - chunked, idempotent delete+insert into `books_processed`
//! - [`pipeline`] - sequencing, counts, and the empty-result short-circuit

pub mod extractor;
pub mod loader;
pub mod pipeline;
pub mod transformer;

pub use loader::{load, LoadSummary};
pub use pipeline::{Pipeline, PipelineOutcome, PipelineReport};
pub use transformer::{transform, transform_all};
