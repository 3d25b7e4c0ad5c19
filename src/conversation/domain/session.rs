//! Conversation session handed back to the client.

use super::ThreadId;
use crate::assistant::domain::AssistantKey;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A remote thread opened under an assistant profile.
///
/// The provider owns the thread for its whole lifetime; this value only
/// carries the identifier back to the client, which must present it with
/// every subsequent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSession {
    thread_id: ThreadId,
    assistant_key: AssistantKey,
    created_at: DateTime<Utc>,
}

impl ConversationSession {
    /// Creates a session for a freshly created thread.
    #[must_use]
    pub fn new(thread_id: ThreadId, assistant_key: AssistantKey, clock: &impl Clock) -> Self {
        Self {
            thread_id,
            assistant_key,
            created_at: clock.utc(),
        }
    }

    /// Returns the remote thread identifier.
    #[must_use]
    pub const fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    /// Returns the profile the session was opened under.
    #[must_use]
    pub const fn assistant_key(&self) -> &AssistantKey {
        &self.assistant_key
    }

    /// Returns when the session was opened.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
