//! Deferred failure used to bound a load attempt.

use std::future::Future;
use std::time::Duration;

use super::error::LoadError;

/// Resolve to a [`LoadError::TimedOut`] after `duration`.
///
/// Never yields a success; meant to be raced, not awaited on its own.
/// Dropping the future cancels its timer.
pub async fn expire_after(duration: Duration, message: Option<String>) -> LoadError {
    tokio::time::sleep(duration).await;
    LoadError::TimedOut {
        message: message
            .unwrap_or_else(|| format!("Operation timed out after {}ms", duration.as_millis())),
    }
}

/// Race `operation` against [`expire_after`].
///
/// Whichever settles first wins and the other is dropped. An operation
/// that completes after the deadline is never observed.
pub async fn race<F, T, E>(
    operation: F,
    duration: Duration,
    message: Option<String>,
) -> Result<T, LoadError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<LoadError>,
{
    tokio::select! {
        biased;
        result = operation => result.map_err(Into::into),
        err = expire_after(duration, message) => Err(err),
    }
}
