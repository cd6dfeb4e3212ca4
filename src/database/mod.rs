//! # Database Connection Management
//!
//! Opens and probes the PostgreSQL connection the pipeline uses for both the
//! extract and load phases. One pool, one connection, used sequentially.

pub mod connection;

pub use connection::DatabaseConnection;
