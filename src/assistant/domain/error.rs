//! Error types for assistant profile validation.

use thiserror::Error;

/// Errors returned while constructing assistant domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssistantDomainError {
    /// The profile key is empty after trimming.
    #[error("assistant key must not be empty")]
    EmptyKey,

    /// The profile key contains characters outside `[a-z0-9_-]`.
    #[error(
        "assistant key '{0}' contains invalid characters (only lowercase alphanumeric, hyphens and underscores allowed)"
    )]
    InvalidKey(String),

    /// The profile key exceeds the 100-character limit.
    #[error("assistant key exceeds 100 character limit: {0}")]
    KeyTooLong(String),

    /// The remote assistant identifier is empty after trimming.
    #[error("remote assistant identifier must not be empty")]
    EmptyAssistantId,

    /// The display name is empty after trimming.
    #[error("assistant display name must not be empty")]
    EmptyDisplayName,

    /// Two profiles share the same key.
    #[error("duplicate assistant key: {0}")]
    DuplicateKey(String),

    /// The registry was built without any profile.
    #[error("assistant registry must contain at least one profile")]
    EmptyRegistry,

    /// The default profile key does not name a registered profile.
    #[error("default assistant '{0}' is not a registered profile")]
    UnknownDefault(String),
}
