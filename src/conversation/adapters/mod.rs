//! Adapter implementations for the conversation ports.

pub mod memory;
pub mod openai;
pub mod timing;

pub use memory::{InMemoryConversationProvider, ProviderCallCounts, ProviderOperation};
pub use openai::{OpenAiAssistantsProvider, OpenAiConfig};
pub use timing::{ManualClock, ManualSleeper, TokioSleeper};
