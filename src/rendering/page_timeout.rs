//! Timeout utilities for page operations
//!
//! Bounds navigation and content capture so a stuck page fails its own
//! request instead of hanging it.

use std::future::Future;
use std::time::Duration;

use super::RenderError;

/// Wrap an async page operation with an explicit timeout
///
/// # Arguments
/// * `operation` - The async Future to execute with a timeout
/// * `timeout_secs` - Timeout duration in seconds
/// * `operation_name` - Human-readable name for error messages
///
/// # Returns
/// * `Ok(T)` - Operation completed successfully
/// * `Err(RenderError::Timeout)` - The timeout was reached
/// * `Err(_)` - The operation itself failed
pub async fn with_page_timeout<F, T>(
    operation: F,
    timeout_secs: u64,
    operation_name: &str,
) -> Result<T, RenderError>
where
    F: Future<Output = Result<T, RenderError>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(RenderError::Timeout {
            operation: operation_name.to_string(),
            seconds: timeout_secs,
        }),
    }
}
