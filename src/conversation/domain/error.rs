//! Error types for conversation domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing conversation domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversationDomainError {
    /// The thread identifier is empty after trimming.
    #[error("thread identifier must not be empty")]
    EmptyThreadId,

    /// The run identifier is empty after trimming.
    #[error("run identifier must not be empty")]
    EmptyRunId,

    /// The user message text is empty.
    #[error("message text must not be empty")]
    EmptyMessageText,
}

/// Error returned while parsing a message role reported by the provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message role: {0}")]
pub struct ParseMessageRoleError(pub String);
