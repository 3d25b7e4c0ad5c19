//! Identifier types for provider-issued threads and runs.
//!
//! Both identifiers are opaque strings minted by the provider and are kept
//! byte-for-byte; only blank values are rejected.

use super::ConversationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a remote conversation thread.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    /// Wraps a provider thread identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationDomainError::EmptyThreadId`] when the value is
    /// blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ConversationDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ConversationDomainError::EmptyThreadId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ThreadId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a remote run within a thread.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    /// Wraps a provider run identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationDomainError::EmptyRunId`] when the value is
    /// blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ConversationDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ConversationDomainError::EmptyRunId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
