//! Pure access decision for opening a conversation under a profile.

use super::AssistantProfile;
use serde::Serialize;
use std::fmt;

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// No profile matches the requested key.
    UnknownAssistant,
    /// The profile does not allow the request's origin domain.
    DomainForbidden,
    /// The profile requires an authorization header and none was sent.
    AuthRequired,
}

impl DenialReason {
    /// Returns the canonical reason code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownAssistant => "unknown_assistant",
            Self::DomainForbidden => "domain_forbidden",
            Self::AuthRequired => "auth_required",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The request may proceed.
    Allow,
    /// The request is refused for the given reason.
    Deny(DenialReason),
}

impl AccessDecision {
    /// Returns `true` for [`AccessDecision::Allow`].
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decides whether a request may open a conversation under `profile`.
///
/// Checks run in a fixed order so that each request maps to exactly one
/// reason: unknown profile, then domain, then authentication. A domain
/// mismatch is therefore reported even when auth is also missing.
#[must_use]
pub fn authorize(
    profile: Option<&AssistantProfile>,
    request_domain: Option<&str>,
    has_auth_header: bool,
) -> AccessDecision {
    let Some(found) = profile else {
        return AccessDecision::Deny(DenialReason::UnknownAssistant);
    };

    if !found.permits_domain(request_domain) {
        return AccessDecision::Deny(DenialReason::DomainForbidden);
    }

    if found.requires_auth() && !has_auth_header {
        return AccessDecision::Deny(DenialReason::AuthRequired);
    }

    AccessDecision::Allow
}
