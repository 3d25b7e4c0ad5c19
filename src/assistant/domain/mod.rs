//! Domain model for assistant profiles and access decisions.
//!
//! Profiles are loaded once at start-up and never mutated afterwards, so the
//! registry can be shared across request handlers without synchronisation.

mod access;
mod error;
mod ids;
mod profile;
mod registry;

pub use access::{AccessDecision, DenialReason, authorize};
pub use error::AssistantDomainError;
pub use ids::{AssistantId, AssistantKey};
pub use profile::AssistantProfile;
pub use registry::AssistantRegistry;
