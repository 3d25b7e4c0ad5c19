//! Suspension port used between run status polls.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the current task.
///
/// Production code sleeps on the async runtime; tests substitute an
/// implementation that advances a manual clock instead of waiting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspends for `duration`.
    async fn sleep(&self, duration: Duration);
}
