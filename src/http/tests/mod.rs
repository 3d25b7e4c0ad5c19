//! Router tests driven through `tower::ServiceExt::oneshot`.


use crate::assistant::domain::{
    AssistantDomainError, AssistantId, AssistantKey, AssistantProfile, AssistantRegistry,
};
use crate::conversation::{
    adapters::{InMemoryConversationProvider, ManualClock, ManualSleeper},
    services::PollPolicy,
};
use crate::http::{AppState, router};
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tower::ServiceExt;

const ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

struct TestApp {
    app: Router,
    provider: Arc<InMemoryConversationProvider>,
}

fn profile(
    key: &str,
    assistant_id: &str,
    domains: &[&str],
    requires_auth: bool,
) -> Result<AssistantProfile, AssistantDomainError> {
    Ok(AssistantProfile::new(
        AssistantKey::new(key)?,
        AssistantId::new(assistant_id)?,
        format!("{key} desk"),
    )?
    .with_welcome_message(format!("Welcome to {key}"))
    .with_color("#dc2626")
    .with_placeholder("Type your message...")
    .with_allowed_domains(domains.iter().map(|domain| (*domain).to_owned()))
    .with_requires_auth(requires_auth))
}

fn registry() -> Result<AssistantRegistry, AssistantDomainError> {
    AssistantRegistry::new(
        vec![
            profile(
                "customer-support",
                "asst_customer_support_123",
                &["localhost", "yourcompany.com"],
                false,
            )?,
            profile(
                "hr-internal",
                "asst_hr_789",
                &["localhost", "internal.yourcompany.com"],
                true,
            )?,
            profile("open-chat", "asst_open", &[], false)?,
        ],
        AssistantKey::new("customer-support")?,
    )
}

fn test_app() -> TestApp {
    let provider = Arc::new(InMemoryConversationProvider::new());
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp");
    let clock = Arc::new(ManualClock::new(start));
    let sleeper = Arc::new(ManualSleeper::new(Arc::clone(&clock)));
    let state = AppState::new(
        Arc::new(registry().expect("valid registry")),
        Arc::clone(&provider),
        clock,
        sleeper,
        PollPolicy::default(),
    );
    let origins: Vec<String> = ORIGINS.iter().map(|origin| (*origin).to_owned()).collect();
    TestApp {
        app: router(state, &origins),
        provider,
    }
}

async fn post_json(app: &Router, uri: &str, body: &str, auth: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = builder
        .body(Body::from(body.to_owned()))
        .expect("request should build");
    app.clone()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
