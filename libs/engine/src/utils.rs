use std::future::Future;
use std::time::Duration;

use eyre::Result;

use crate::error::EngineError;

/// Bounds one outbound call; elapsed calls fail with [`EngineError::Timeout`].
pub async fn with_timeout<T, F>(operation: &'static str, timeout: Duration, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(EngineError::Timeout { operation, timeout }.into()),
    }
}
