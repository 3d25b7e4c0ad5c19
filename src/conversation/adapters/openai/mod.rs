//! Conversation provider backed by the hosted OpenAI Assistants API.
//!
//! Each port operation maps to exactly one HTTP request. Non-success
//! responses surface as [`ProviderError::Http`] with the trimmed response
//! body, and undecodable bodies as [`ProviderError::Decode`].

mod wire;

use crate::assistant::domain::AssistantId;
use crate::conversation::{
    domain::{MessageRole, Run, RunId, RunStatus, ThreadId, ThreadMessage},
    ports::{ConversationProvider, ProviderError, ProviderResult},
};
use async_trait::async_trait;
use reqwest::{
    StatusCode, Url,
    header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue},
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;
use wire::{
    CreateMessageRequest, CreateRunRequest, MessageList, RunObject, ThreadObject, WireError,
};

const BETA_HEADER: HeaderName = HeaderName::from_static("openai-beta");
const BETA_VALUE: &str = "assistants=v2";
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Connection settings for [`OpenAiAssistantsProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    /// API root, for example `https://api.openai.com/v1`.
    pub base_url: String,
    /// Secret API key sent as a bearer token.
    pub api_key: String,
    /// Upper bound for each individual HTTP request.
    pub timeout: Duration,
}

/// Errors raised while building the HTTP client.
#[derive(Debug, Error)]
pub enum OpenAiSetupError {
    /// The base URL is not an absolute hierarchical URL.
    #[error("invalid provider base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The API key is blank or cannot be sent as a header.
    #[error("provider API key must be a non-empty header-safe string")]
    InvalidApiKey,

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// [`ConversationProvider`] speaking the Assistants v2 HTTP protocol.
#[derive(Debug, Clone)]
pub struct OpenAiAssistantsProvider {
    base_url: Url,
    http: reqwest::Client,
}

impl OpenAiAssistantsProvider {
    /// Builds a provider from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAiSetupError`] when the base URL or API key is unusable
    /// or the HTTP client cannot be built.
    pub fn new(config: &OpenAiConfig) -> Result<Self, OpenAiSetupError> {
        let base_url = parse_base_url(&config.base_url)?;

        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(OpenAiSetupError::InvalidApiKey);
        }
        let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| OpenAiSetupError::InvalidApiKey)?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(BETA_HEADER, HeaderValue::from_static(BETA_VALUE));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { base_url, http })
    }

    fn endpoint(&self, segments: &[&str]) -> ProviderResult<Url> {
        endpoint_url(&self.base_url, segments)
    }

    async fn get<T>(&self, url: Url) -> ProviderResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(url)
            .header(REQUEST_ID_HEADER, request_id())
            .send()
            .await
            .map_err(ProviderError::transport)?;
        decode_json_response(response).await
    }

    async fn post<B, T>(&self, url: Url, body: &B) -> ProviderResult<T>
    where
        B: serde::Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .header(REQUEST_ID_HEADER, request_id())
            .json(body)
            .send()
            .await
            .map_err(ProviderError::transport)?;
        decode_json_response(response).await
    }
}

#[async_trait]
impl ConversationProvider for OpenAiAssistantsProvider {
    async fn create_thread(&self) -> ProviderResult<ThreadId> {
        let url = self.endpoint(&["threads"])?;
        let thread: ThreadObject = self.post(url, &serde_json::json!({})).await?;
        thread.into_domain().map_err(wire_error)
    }

    async fn append_message(
        &self,
        thread_id: &ThreadId,
        role: MessageRole,
        text: &str,
    ) -> ProviderResult<()> {
        let url = self.endpoint(&["threads", thread_id.as_str(), "messages"])?;
        let request = CreateMessageRequest {
            role: role.as_str(),
            content: text,
        };
        let _: serde_json::Value = self.post(url, &request).await?;
        Ok(())
    }

    async fn create_run(
        &self,
        thread_id: &ThreadId,
        assistant_id: &AssistantId,
    ) -> ProviderResult<Run> {
        let url = self.endpoint(&["threads", thread_id.as_str(), "runs"])?;
        let request = CreateRunRequest {
            assistant_id: assistant_id.as_str(),
        };
        let run: RunObject = self.post(url, &request).await?;
        run.into_domain().map_err(wire_error)
    }

    async fn run_status(
        &self,
        thread_id: &ThreadId,
        run_id: &RunId,
    ) -> ProviderResult<RunStatus> {
        let url = self.endpoint(&["threads", thread_id.as_str(), "runs", run_id.as_str()])?;
        let run: RunObject = self.get(url).await?;
        Ok(run.status)
    }

    async fn list_messages(&self, thread_id: &ThreadId) -> ProviderResult<Vec<ThreadMessage>> {
        let mut url = self.endpoint(&["threads", thread_id.as_str(), "messages"])?;
        url.query_pairs_mut().append_pair("order", "desc");
        let listing: MessageList = self.get(url).await?;
        listing.into_domain().map_err(wire_error)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, OpenAiSetupError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|_| OpenAiSetupError::InvalidBaseUrl(raw.to_owned()))?;
    if url.cannot_be_a_base() {
        return Err(OpenAiSetupError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(url)
}

/// Appends percent-encoded path segments to the API root.
fn endpoint_url(base_url: &Url, segments: &[&str]) -> ProviderResult<Url> {
    let mut url = base_url.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|()| ProviderError::Rejected(format!("base URL '{base_url}' cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

fn wire_error(err: WireError) -> ProviderError {
    ProviderError::Decode(err.to_string())
}

/// Formats a non-success response as [`ProviderError::Http`].
fn format_http_error(status: StatusCode, body: &[u8]) -> ProviderError {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    let body = if trimmed.is_empty() {
        "<empty>".to_owned()
    } else {
        trimmed.to_owned()
    };
    ProviderError::Http {
        status: status.as_u16(),
        body,
    }
}

async fn decode_json_response<T>(response: reqwest::Response) -> ProviderResult<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let bytes = response.bytes().await.map_err(ProviderError::transport)?;

    if !status.is_success() {
        return Err(format_http_error(status, &bytes));
    }

    serde_json::from_slice::<T>(&bytes).map_err(|err| ProviderError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config(base_url: &str) -> OpenAiConfig {
        OpenAiConfig {
            base_url: base_url.to_owned(),
            api_key: "sk-test".to_owned(),
            timeout: Duration::from_secs(5),
        }
    }

    #[rstest]
    #[case("https://api.openai.com/v1", "https://api.openai.com/v1/threads/thread_1/runs")]
    #[case("https://api.openai.com/v1/", "https://api.openai.com/v1/threads/thread_1/runs")]
    #[case("http://localhost:8080", "http://localhost:8080/threads/thread_1/runs")]
    fn endpoint_joins_segments(#[case] base: &str, #[case] expected: &str) {
        let base_url = parse_base_url(base).expect("base URL should parse");

        let url = endpoint_url(&base_url, &["threads", "thread_1", "runs"])
            .expect("endpoint should build");

        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    fn endpoint_percent_encodes_identifiers() {
        let base_url = parse_base_url("https://api.openai.com/v1").expect("base URL should parse");

        let url = endpoint_url(&base_url, &["threads", "../admin?x=1", "messages"])
            .expect("endpoint should build");

        assert_eq!(
            url.as_str(),
            "https://api.openai.com/v1/threads/..%2Fadmin%3Fx=1/messages"
        );
    }

    #[rstest]
    #[case("not a url")]
    #[case("mailto:ops@example.com")]
    fn provider_rejects_unusable_base_url(#[case] base: &str) {
        let result = OpenAiAssistantsProvider::new(&config(base));

        assert!(matches!(result, Err(OpenAiSetupError::InvalidBaseUrl(_))));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("sk-bad\nkey")]
    fn provider_rejects_unusable_api_key(#[case] api_key: &str) {
        let mut settings = config("https://api.openai.com/v1");
        settings.api_key = api_key.to_owned();

        let result = OpenAiAssistantsProvider::new(&settings);

        assert!(matches!(result, Err(OpenAiSetupError::InvalidApiKey)));
    }

    #[rstest]
    #[case(b"  {\"error\":\"nope\"}  ".as_slice(), "{\"error\":\"nope\"}")]
    #[case(b"   ".as_slice(), "<empty>")]
    fn http_errors_carry_trimmed_body(#[case] body: &[u8], #[case] expected: &str) {
        let error = format_http_error(StatusCode::BAD_GATEWAY, body);

        match error {
            ProviderError::Http { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, expected);
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }

    #[rstest]
    fn message_listing_keeps_text_blocks_in_order() {
        let payload = serde_json::json!({
            "object": "list",
            "data": [
                {
                    "id": "msg_2",
                    "role": "assistant",
                    "content": [
                        {"type": "image_file", "image_file": {"file_id": "file_1"}},
                        {"type": "text", "text": {"value": "Hello", "annotations": []}},
                        {"type": "text", "text": {"value": "again", "annotations": []}}
                    ]
                },
                {
                    "id": "msg_1",
                    "role": "user",
                    "content": [{"type": "text", "text": {"value": "Hi", "annotations": []}}]
                }
            ]
        });

        let listing: MessageList = serde_json::from_value(payload).expect("listing decodes");
        let messages = listing.into_domain().expect("listing converts");

        assert_eq!(
            messages,
            vec![
                ThreadMessage::new(
                    MessageRole::Assistant,
                    ["Hello".to_owned(), "again".to_owned()]
                ),
                ThreadMessage::text(MessageRole::User, "Hi"),
            ]
        );
    }

    #[rstest]
    fn run_object_preserves_unknown_status() {
        let payload = serde_json::json!({
            "id": "run_1",
            "object": "thread.run",
            "thread_id": "thread_1",
            "status": "requires_action"
        });

        let run: RunObject = serde_json::from_value(payload).expect("run decodes");
        let run = run.into_domain().expect("run converts");

        assert_eq!(run.status(), &RunStatus::Other("requires_action".to_owned()));
        assert!(!run.status().is_terminal());
    }

    #[rstest]
    fn blank_thread_identifier_is_a_decode_error() {
        let thread: ThreadObject =
            serde_json::from_value(serde_json::json!({"id": ""})).expect("thread decodes");

        let error = thread.into_domain().map_err(wire_error);

        assert!(matches!(error, Err(ProviderError::Decode(_))));
    }
}
