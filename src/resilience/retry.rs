//! Retry policy and the generic backoff loop.

use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Retry policy for a transient operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Delay after the first failed attempt.
    pub base_delay: Duration,
    /// Ceiling applied to the jittered delay.
    pub max_delay: Duration,
    /// Exponential backoff multiplier.
    pub backoff_multiplier: f64,
    /// Add up to 20% random jitter to each delay.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(20),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Delay before the next try, where `attempt` is the 1-based attempt that
    /// just failed: base, base*m, base*m^2, ... capped at `max_delay`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        let delay = self.base_delay.mul_f64(self.backoff_multiplier.powi(exponent));
        let delay = if self.jitter {
            delay + delay.mul_f64(0.2 * fastrand::f64())
        } else {
            delay
        };
        delay.min(self.max_delay)
    }
}

/// Run `operation` up to `config.max_attempts` times, sleeping between
/// attempts. Returns the first success or the last error. Every failed
/// attempt except the final one is logged at `warn`.
///
/// No transient/fatal classification happens here: any error is retried until
/// the budget runs out.
pub async fn retry_with_backoff<T, E, F, Fut>(
    config: &RetryConfig,
    op_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt >= max_attempts {
                    return Err(error);
                }
                let sleep_for = config.delay_for_attempt(attempt);
                warn!(
                    operation = op_name,
                    attempt,
                    max_attempts,
                    error = %error,
                    sleep_ms = sleep_for.as_millis() as u64,
                    "operation failed, retrying after backoff"
                );
                tokio::time::sleep(sleep_for).await;
                attempt += 1;
            }
        }
    }
}
