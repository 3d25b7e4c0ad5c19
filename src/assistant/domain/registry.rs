//! Immutable registry of assistant profiles.

use super::{AssistantDomainError, AssistantKey, AssistantProfile};
use std::collections::HashMap;

/// Read-only mapping from profile key to [`AssistantProfile`].
///
/// Built once at start-up. Profiles keep their configuration order, which is
/// the order reported by [`AssistantRegistry::keys`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantRegistry {
    profiles: Vec<AssistantProfile>,
    index: HashMap<AssistantKey, usize>,
    default_profile: AssistantProfile,
}

impl AssistantRegistry {
    /// Builds a registry from an ordered list of profiles.
    ///
    /// `default_key` names the profile whose remote assistant handles every
    /// message run, see [`AssistantRegistry::default_profile`].
    ///
    /// # Errors
    ///
    /// Returns [`AssistantDomainError::EmptyRegistry`] when `profiles` is
    /// empty, [`AssistantDomainError::DuplicateKey`] when two profiles share
    /// a key, or [`AssistantDomainError::UnknownDefault`] when `default_key`
    /// is not among them.
    pub fn new(
        profiles: Vec<AssistantProfile>,
        default_key: AssistantKey,
    ) -> Result<Self, AssistantDomainError> {
        if profiles.is_empty() {
            return Err(AssistantDomainError::EmptyRegistry);
        }

        let mut index = HashMap::with_capacity(profiles.len());
        for (position, profile) in profiles.iter().enumerate() {
            if index.insert(profile.key().clone(), position).is_some() {
                return Err(AssistantDomainError::DuplicateKey(
                    profile.key().as_str().to_owned(),
                ));
            }
        }

        let default_profile = index
            .get(&default_key)
            .and_then(|position| profiles.get(*position))
            .cloned()
            .ok_or_else(|| AssistantDomainError::UnknownDefault(default_key.as_str().to_owned()))?;

        Ok(Self {
            profiles,
            index,
            default_profile,
        })
    }

    /// Looks up a profile by its literal key.
    ///
    /// Matching is exact: no trimming or case folding. Returns `None` for
    /// absent keys; callers treat that as a client error.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&AssistantProfile> {
        self.index
            .get(key)
            .and_then(|position| self.profiles.get(*position))
    }

    /// Returns every profile key in configuration order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.profiles
            .iter()
            .map(|profile| profile.key().as_str())
            .collect()
    }

    /// Returns the profile used for message runs.
    #[must_use]
    pub const fn default_profile(&self) -> &AssistantProfile {
        &self.default_profile
    }
}
