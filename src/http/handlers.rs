//! Endpoint handlers.

use super::{
    dto::{
        AssistantConfigView, HealthResponse, NewThreadRequest, NewThreadResponse,
        SendMessageRequest, SendMessageResponse,
    },
    error::ApiError,
    state::AppState,
};
use crate::conversation::ports::{ConversationProvider, Sleeper};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, header::AUTHORIZATION},
};
use mockable::Clock;

/// `POST /api/newThread`: admit the request and open a provider thread.
pub(super) async fn new_thread<P, C, S>(
    State(state): State<AppState<P, C, S>>,
    headers: HeaderMap,
    payload: Result<Json<NewThreadRequest>, JsonRejection>,
) -> Result<Json<NewThreadResponse>, ApiError>
where
    P: ConversationProvider + 'static,
    C: Clock + Send + Sync + 'static,
    S: Sleeper + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected newThread body");
        ApiError::InvalidBody
    })?;

    let requested = request.assistant_type.unwrap_or_default();
    let profile = state
        .guard
        .admit(&requested, request.domain.as_deref(), has_auth_header(&headers))
        .map_err(|denied| ApiError::from(&denied))?;

    let session = state.threads.create_session(profile).await.map_err(|err| {
        tracing::error!(assistant = %profile.key(), error = %err, "thread creation failed");
        ApiError::ThreadCreation
    })?;

    Ok(Json(NewThreadResponse {
        thread_id: session.thread_id().as_str().to_owned(),
        assistant_config: AssistantConfigView::from(profile),
        success: true,
    }))
}

/// `POST /api/sendMessage`: run one message turn and return the reply.
///
/// The run always uses the default profile's remote assistant.
pub(super) async fn send_message<P, C, S>(
    State(state): State<AppState<P, C, S>>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<SendMessageResponse>, ApiError>
where
    P: ConversationProvider + 'static,
    C: Clock + Send + Sync + 'static,
    S: Sleeper + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected sendMessage body");
        ApiError::InvalidBody
    })?;

    let (Some(thread_id), Some(message)) = (request.thread_id, request.message) else {
        return Err(ApiError::MissingFields);
    };

    let assistant_id = state.registry().default_profile().assistant_id().clone();
    let reply = state
        .runs
        .send_message(&thread_id, &message, &assistant_id)
        .await
        .map_err(|err| {
            if err.is_client_error() {
                return ApiError::MissingFields;
            }
            tracing::error!(thread_id = %thread_id, error = %err, "message turn failed");
            ApiError::SendFailed
        })?;

    Ok(Json(SendMessageResponse {
        response: reply,
        success: true,
    }))
}

/// `GET /health`: liveness plus the list of profile keys.
pub(super) async fn health<P, C, S>(State(state): State<AppState<P, C, S>>) -> Json<HealthResponse>
where
    P: ConversationProvider + 'static,
    C: Clock + Send + Sync + 'static,
    S: Sleeper + 'static,
{
    Json(HealthResponse {
        status: "OK",
        timestamp: unix_seconds(&*state.clock),
        assistants: state
            .registry()
            .keys()
            .into_iter()
            .map(str::to_owned)
            .collect(),
    })
}

fn has_auth_header(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| !value.trim().is_empty())
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "health timestamps tolerate sub-millisecond rounding"
)]
fn unix_seconds(clock: &impl Clock) -> f64 {
    clock.utc().timestamp_millis() as f64 / 1000.0
}
