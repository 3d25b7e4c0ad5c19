//! Assistant profiles and the access rules that guard them.
//!
//! A profile bundles a remote assistant identifier with presentation
//! metadata and the domain and authentication restrictions a client must
//! satisfy before a conversation is opened. The module follows the same
//! layering as the rest of the crate:
//!
//! - Domain types in [`domain`]: profiles, the immutable registry, and the
//!   pure access decision
//! - Orchestration services in [`services`]: the access guard used by the
//!   HTTP layer

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
