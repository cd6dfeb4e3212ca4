//! # ETL Error Types
//!
//! Structured error handling for the pipeline using thiserror. One variant per
//! failure class in the run: configuration, connection, read query, write.
//! Transient connection/write failures are retried before these surface; query
//! failures are never retried.

use thiserror::Error;

/// Errors a pipeline run can terminate with.
#[derive(Error, Debug)]
pub enum EtlError {
    /// Missing or malformed required setting. Fatal before any connection is
    /// attempted.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Database unreachable after the connect retry budget was exhausted.
    #[error("Database connection failed after {attempts} attempts: {message}")]
    Connection { message: String, attempts: u32 },

    /// The read query could not execute or a row could not be decoded.
    #[error("Query error: {message}")]
    Query { message: String },

    /// A chunk write kept failing after the per-chunk retry budget. Chunks
    /// committed before this one stay persisted.
    #[error("Write failed after {attempts} attempts: {message}")]
    Write { message: String, attempts: u32 },
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_attempt_counts() {
        let err = EtlError::Connection {
            message: "connection refused".to_string(),
            attempts: 3,
        };
        assert_eq!(
            err.to_string(),
            "Database connection failed after 3 attempts: connection refused"
        );

        let err = EtlError::Write {
            message: "deadlock detected".to_string(),
            attempts: 5,
        };
        assert!(err.to_string().contains("after 5 attempts"));
    }

    #[test]
    fn configuration_errors_name_the_setting() {
        let err = EtlError::Configuration {
            message: "missing required database settings: DB_USER, DB_PASSWORD".to_string(),
        };
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.to_string().contains("DB_USER"));
    }
}
