//! Request and response bodies for the public endpoints.

use crate::assistant::domain::AssistantProfile;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/newThread`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewThreadRequest {
    /// Requested profile key.
    #[serde(default)]
    pub assistant_type: Option<String>,
    /// Domain the embedding page is served from.
    #[serde(default)]
    pub domain: Option<String>,
}

/// Presentation metadata returned with a new thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantConfigView {
    /// Display name.
    pub name: String,
    /// Greeting shown when the chat opens.
    pub welcome_message: String,
    /// UI color tag.
    pub color: String,
    /// Input placeholder text.
    pub placeholder: String,
}

impl From<&AssistantProfile> for AssistantConfigView {
    fn from(profile: &AssistantProfile) -> Self {
        Self {
            name: profile.display_name().to_owned(),
            welcome_message: profile.welcome_message().to_owned(),
            color: profile.color().to_owned(),
            placeholder: profile.placeholder().to_owned(),
        }
    }
}

/// Success body of `POST /api/newThread`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewThreadResponse {
    /// Provider thread identifier.
    pub thread_id: String,
    /// Presentation metadata of the admitted profile.
    pub assistant_config: AssistantConfigView,
    /// Always `true`.
    pub success: bool,
}

/// Body of `POST /api/sendMessage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Thread returned by `newThread`.
    #[serde(default)]
    pub thread_id: Option<String>,
    /// User message text.
    #[serde(default)]
    pub message: Option<String>,
}

/// Success body of `POST /api/sendMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessageResponse {
    /// Assistant reply text.
    pub response: String,
    /// Always `true`.
    pub success: bool,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    /// Always `"OK"`.
    pub status: &'static str,
    /// Unix time in seconds.
    pub timestamp: f64,
    /// Every registered profile key in configuration order.
    pub assistants: Vec<String>,
}
