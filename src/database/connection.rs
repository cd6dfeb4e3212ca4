use crate::config::EtlConfig;
use crate::error::{EtlError, Result};
use crate::resilience::retry_with_backoff;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Live database handle. Holds the single connection the pipeline uses
/// sequentially for extract and load.
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Open the connection described by the configuration, retrying with
    /// backoff on failure. Each attempt opens a fresh pool and verifies it
    /// with a probe query before it counts as connected.
    ///
    /// Transient and fatal failures are retried identically; the caller only
    /// observes final success or [`EtlError::Connection`].
    pub async fn connect(config: &EtlConfig) -> Result<Self> {
        let url = config.database.connection_url();
        let retry = &config.connect_retry;

        let pool = retry_with_backoff(retry, "DB connect", || Self::connect_once(&url))
            .await
            .map_err(|e| EtlError::Connection {
                message: e.to_string(),
                attempts: retry.max_attempts,
            })?;

        info!(
            host = %config.database.host,
            database = %config.database.name,
            "database connection established"
        );
        Ok(Self { pool })
    }

    async fn connect_once(url: &str) -> std::result::Result<PgPool, sqlx::Error> {
        let pool = PgPoolOptions::new().max_connections(1).connect(url).await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(pool)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
