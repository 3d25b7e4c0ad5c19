//! Access guard resolving a client request to an assistant profile.
//!
//! Provides [`AccessGuard`], which combines a registry lookup with the pure
//! [`authorize`] decision and reports the outcome as a typed error.

use crate::assistant::domain::{
    AccessDecision, AssistantProfile, AssistantRegistry, DenialReason, authorize,
};
use std::sync::Arc;
use thiserror::Error;

/// A request refused by the [`AccessGuard`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("access to assistant '{requested_key}' denied: {reason}")]
pub struct AccessDenied {
    requested_key: String,
    reason: DenialReason,
}

impl AccessDenied {
    /// Returns why the request was refused.
    #[must_use]
    pub const fn reason(&self) -> DenialReason {
        self.reason
    }

    /// Returns the profile key the client asked for.
    #[must_use]
    pub fn requested_key(&self) -> &str {
        &self.requested_key
    }
}

/// Resolves profile keys and enforces their domain and auth restrictions.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    registry: Arc<AssistantRegistry>,
}

impl AccessGuard {
    /// Creates a guard over the shared registry.
    #[must_use]
    pub const fn new(registry: Arc<AssistantRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the registry consulted by this guard.
    #[must_use]
    pub fn registry(&self) -> &AssistantRegistry {
        &self.registry
    }

    /// Admits a request for `requested_key` or explains the refusal.
    ///
    /// `has_auth_header` reflects only the presence of credentials; token
    /// contents are not validated here.
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] carrying
    /// [`DenialReason::UnknownAssistant`], [`DenialReason::DomainForbidden`]
    /// or [`DenialReason::AuthRequired`].
    pub fn admit(
        &self,
        requested_key: &str,
        domain: Option<&str>,
        has_auth_header: bool,
    ) -> Result<&AssistantProfile, AccessDenied> {
        let profile = self.registry.lookup(requested_key);
        match (authorize(profile, domain, has_auth_header), profile) {
            (AccessDecision::Allow, Some(admitted)) => Ok(admitted),
            (AccessDecision::Deny(reason), _) => {
                tracing::warn!(
                    assistant = requested_key,
                    domain = domain.unwrap_or_default(),
                    reason = reason.as_str(),
                    "assistant access denied"
                );
                Err(AccessDenied {
                    requested_key: requested_key.to_owned(),
                    reason,
                })
            }
            (AccessDecision::Allow, None) => Err(AccessDenied {
                requested_key: requested_key.to_owned(),
                reason: DenialReason::UnknownAssistant,
            }),
        }
    }
}
