//! Identifier types for the assistant domain.

use super::AssistantDomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Maximum length for a profile key.
const MAX_KEY_LENGTH: usize = 100;

/// Validated profile key such as `customer-support` or `hr-internal`.
///
/// Keys are never case-folded: clients address profiles by the literal key,
/// so `Sales` is rejected rather than normalised to `sales`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssistantKey(String);

impl AssistantKey {
    /// Creates a validated profile key.
    ///
    /// The input is trimmed. Only characters in `[a-z0-9_-]` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantDomainError::EmptyKey`] when the value is empty
    /// after trimming, [`AssistantDomainError::InvalidKey`] when it contains
    /// other characters, or [`AssistantDomainError::KeyTooLong`] when it
    /// exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AssistantDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AssistantDomainError::EmptyKey);
        }

        if trimmed.len() > MAX_KEY_LENGTH {
            return Err(AssistantDomainError::KeyTooLong(raw));
        }

        let is_valid = trimmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');

        if !is_valid {
            return Err(AssistantDomainError::InvalidKey(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the environment variable suffix for this key.
    ///
    /// `hr-internal` becomes `HR_INTERNAL`.
    #[must_use]
    pub fn env_suffix(&self) -> String {
        self.0.to_ascii_uppercase().replace('-', "_")
    }
}

impl TryFrom<String> for AssistantKey {
    type Error = AssistantDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssistantKey> for String {
    fn from(key: AssistantKey) -> Self {
        key.0
    }
}

impl Borrow<str> for AssistantKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AssistantKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AssistantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of the remote assistant a profile runs against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssistantId(String);

impl AssistantId {
    /// Creates a remote assistant identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantDomainError::EmptyAssistantId`] when the value is
    /// blank.
    pub fn new(value: impl Into<String>) -> Result<Self, AssistantDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(AssistantDomainError::EmptyAssistantId);
        }
        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AssistantId {
    type Error = AssistantDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssistantId> for String {
    fn from(id: AssistantId) -> Self {
        id.0
    }
}

impl fmt::Display for AssistantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
