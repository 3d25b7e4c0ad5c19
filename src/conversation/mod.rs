//! Conversation sessions and the bounded-wait run protocol.
//!
//! A conversation lives on the hosted provider as a *thread*; each client
//! message becomes one *run* that is polled until it completes, fails or
//! exceeds its deadline. This process never stores threads or runs: it only
//! passes their identifiers between the client and the provider.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`] for the provider and for time
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
