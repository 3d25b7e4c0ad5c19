//! Assistant profile value type.

use super::{AssistantDomainError, AssistantId, AssistantKey};
use serde::{Deserialize, Serialize};

/// A named configuration bundling a remote assistant with access rules and
/// presentation metadata.
///
/// Profiles are immutable once the registry is built. The builder-style
/// `with_*` methods exist for construction from configuration only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantProfile {
    key: AssistantKey,
    assistant_id: AssistantId,
    display_name: String,
    welcome_message: String,
    color: String,
    allowed_domains: Vec<String>,
    requires_auth: bool,
    placeholder: String,
}

impl AssistantProfile {
    /// Creates an unrestricted profile with empty presentation text.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantDomainError::EmptyDisplayName`] when the display
    /// name is blank.
    pub fn new(
        key: AssistantKey,
        assistant_id: AssistantId,
        raw_display_name: impl Into<String>,
    ) -> Result<Self, AssistantDomainError> {
        let display_name = raw_display_name.into().trim().to_owned();
        if display_name.is_empty() {
            return Err(AssistantDomainError::EmptyDisplayName);
        }

        Ok(Self {
            key,
            assistant_id,
            display_name,
            welcome_message: String::new(),
            color: String::new(),
            allowed_domains: Vec::new(),
            requires_auth: false,
            placeholder: String::new(),
        })
    }

    /// Sets the greeting shown when a conversation opens.
    #[must_use]
    pub fn with_welcome_message(mut self, message: impl Into<String>) -> Self {
        self.welcome_message = message.into();
        self
    }

    /// Sets the UI color tag (for example `#dc2626`).
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the input placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Restricts the profile to the given origin domains.
    ///
    /// Entries are trimmed and blank entries are dropped; order is kept. An
    /// empty list leaves the profile unrestricted.
    #[must_use]
    pub fn with_allowed_domains(mut self, domains: impl IntoIterator<Item = String>) -> Self {
        self.allowed_domains = domains
            .into_iter()
            .map(|domain| domain.trim().to_owned())
            .filter(|domain| !domain.is_empty())
            .collect();
        self
    }

    /// Sets whether an authorization header must accompany new sessions.
    #[must_use]
    pub const fn with_requires_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }

    /// Replaces the remote assistant identifier.
    #[must_use]
    pub fn with_assistant_id(mut self, assistant_id: AssistantId) -> Self {
        self.assistant_id = assistant_id;
        self
    }

    /// Returns the profile key.
    #[must_use]
    pub const fn key(&self) -> &AssistantKey {
        &self.key
    }

    /// Returns the remote assistant identifier.
    #[must_use]
    pub const fn assistant_id(&self) -> &AssistantId {
        &self.assistant_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the welcome message.
    #[must_use]
    pub fn welcome_message(&self) -> &str {
        &self.welcome_message
    }

    /// Returns the color tag.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the placeholder text.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns the allowed origin domains; empty means unrestricted.
    #[must_use]
    pub fn allowed_domains(&self) -> &[String] {
        &self.allowed_domains
    }

    /// Returns whether an authorization header is required.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    /// Returns whether a request from `domain` may use this profile.
    ///
    /// Matching is exact and case-sensitive with no wildcard or subdomain
    /// expansion. A missing domain only passes an unrestricted profile.
    #[must_use]
    pub fn permits_domain(&self, domain: Option<&str>) -> bool {
        if self.allowed_domains.is_empty() {
            return true;
        }
        domain.is_some_and(|candidate| self.allowed_domains.iter().any(|d| d == candidate))
    }
}
