//! Domain model for conversation threads, runs and thread messages.

mod error;
mod ids;
mod message;
mod run;
mod session;

pub use error::{ConversationDomainError, ParseMessageRoleError};
pub use ids::{RunId, ThreadId};
pub use message::{MessageRole, ThreadMessage, latest_assistant_reply};
pub use run::{Run, RunStatus};
pub use session::ConversationSession;
