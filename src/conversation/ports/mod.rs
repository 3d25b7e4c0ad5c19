//! Port contracts for the conversation services.
//!
//! The hosted assistant API and the passage of time are both outside the
//! domain boundary; services reach them only through these traits.

mod provider;
mod timing;

#[cfg(test)]
pub use provider::MockConversationProvider;
pub use provider::{ConversationProvider, ProviderError, ProviderResult};
#[cfg(test)]
pub use timing::MockSleeper;
pub use timing::Sleeper;
