//! Wire shapes for the hosted Assistants API.

use crate::conversation::domain::{
    ConversationDomainError, MessageRole, ParseMessageRoleError, Run, RunId, RunStatus, ThreadId,
    ThreadMessage,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize)]
pub(super) struct CreateMessageRequest<'a> {
    pub(super) role: &'a str,
    pub(super) content: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateRunRequest<'a> {
    pub(super) assistant_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct ThreadObject {
    pub(super) id: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RunObject {
    pub(super) id: String,
    pub(super) thread_id: String,
    pub(super) status: RunStatus,
}

#[derive(Debug, Deserialize)]
pub(super) struct MessageList {
    pub(super) data: Vec<MessageObject>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MessageObject {
    pub(super) role: String,
    #[serde(default)]
    pub(super) content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(super) enum ContentBlock {
    Text { text: TextValue },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub(super) struct TextValue {
    pub(super) value: String,
}

/// A provider payload that decoded as JSON but breaks a domain rule.
#[derive(Debug, Error)]
pub(super) enum WireError {
    #[error(transparent)]
    Identifier(#[from] ConversationDomainError),
    #[error(transparent)]
    Role(#[from] ParseMessageRoleError),
}

impl ThreadObject {
    pub(super) fn into_domain(self) -> Result<ThreadId, WireError> {
        Ok(ThreadId::new(self.id)?)
    }
}

impl RunObject {
    pub(super) fn into_domain(self) -> Result<Run, WireError> {
        Ok(Run::new(
            RunId::new(self.id)?,
            ThreadId::new(self.thread_id)?,
            self.status,
        ))
    }
}

impl MessageObject {
    pub(super) fn into_domain(self) -> Result<ThreadMessage, WireError> {
        let role = MessageRole::try_from(self.role.as_str())?;
        let text_parts = self.content.into_iter().filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.value),
            ContentBlock::Other => None,
        });
        Ok(ThreadMessage::new(role, text_parts))
    }
}

impl MessageList {
    pub(super) fn into_domain(self) -> Result<Vec<ThreadMessage>, WireError> {
        self.data.into_iter().map(MessageObject::into_domain).collect()
    }
}
