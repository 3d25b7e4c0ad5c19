//! Conversation provider port for the hosted assistant backend.

use crate::assistant::domain::AssistantId;
use crate::conversation::domain::{MessageRole, Run, RunId, RunStatus, ThreadId, ThreadMessage};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for conversation provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Operations the hosted assistant backend must expose.
///
/// Every call is a single attempt. Implementations must not retry on their
/// own; callers decide how to react to a failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversationProvider: Send + Sync {
    /// Creates a new, empty thread.
    async fn create_thread(&self) -> ProviderResult<ThreadId>;

    /// Appends a message authored by `role` to a thread.
    async fn append_message(
        &self,
        thread_id: &ThreadId,
        role: MessageRole,
        text: &str,
    ) -> ProviderResult<()>;

    /// Starts a run of `assistant_id` against a thread.
    async fn create_run(
        &self,
        thread_id: &ThreadId,
        assistant_id: &AssistantId,
    ) -> ProviderResult<Run>;

    /// Fetches the current status of a run.
    async fn run_status(&self, thread_id: &ThreadId, run_id: &RunId)
    -> ProviderResult<RunStatus>;

    /// Lists a thread's messages, newest first.
    ///
    /// The newest-first ordering is part of the contract: reply extraction
    /// relies on it.
    async fn list_messages(&self, thread_id: &ThreadId) -> ProviderResult<Vec<ThreadMessage>>;
}

/// Errors returned by conversation provider adapters.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The request never produced a response (connect, TLS, timeout).
    #[error("provider transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, trimmed; `<empty>` when blank.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("provider response could not be decoded: {0}")]
    Decode(String),

    /// The provider is reachable but refused the operation.
    #[error("provider rejected the request: {0}")]
    Rejected(String),
}

impl ProviderError {
    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
