//! Messages as listed from a provider thread.

use super::ParseMessageRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Author of a thread message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Written by the end user.
    User,
    /// Written by the remote assistant.
    Assistant,
}

impl MessageRole {
    /// Returns the provider's string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MessageRole {
    type Error = ParseMessageRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            _ => Err(ParseMessageRoleError(value.to_owned())),
        }
    }
}

/// One entry of a thread's message listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadMessage {
    role: MessageRole,
    text_parts: Vec<String>,
}

impl ThreadMessage {
    /// Creates a message from its role and text parts in content order.
    #[must_use]
    pub fn new(role: MessageRole, text_parts: impl IntoIterator<Item = String>) -> Self {
        Self {
            role,
            text_parts: text_parts.into_iter().collect(),
        }
    }

    /// Creates a single-part message.
    #[must_use]
    pub fn text(role: MessageRole, text: impl Into<String>) -> Self {
        Self::new(role, [text.into()])
    }

    /// Returns the author role.
    #[must_use]
    pub const fn role(&self) -> MessageRole {
        self.role
    }

    /// Returns all text parts in content order.
    #[must_use]
    pub fn text_parts(&self) -> &[String] {
        &self.text_parts
    }

    /// Returns the first text part, if any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.text_parts.first().map(String::as_str)
    }
}

/// Picks the reply text from a newest-first message listing.
///
/// The provider contract is that listings are ordered newest first, so the
/// reply is the first assistant-authored entry. Its first text part is
/// returned. Entries authored by the user (for example the message that was
/// just appended) are skipped.
#[must_use]
pub fn latest_assistant_reply(newest_first: &[ThreadMessage]) -> Option<&str> {
    newest_first
        .iter()
        .find(|message| message.role() == MessageRole::Assistant)
        .and_then(ThreadMessage::first_text)
}
