//! When steps for assistant access policy BDD scenarios.

use super::world::{AccessWorld, run_async};
use axum::{
    body::Body,
    http::{Request, header},
};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tower::ServiceExt;

#[when(r#"a widget on "{domain}" opens a "{assistant}" conversation"#)]
fn widget_opens_conversation(
    world: &mut AccessWorld,
    domain: String,
    assistant: String,
) -> Result<(), eyre::Report> {
    let app = world
        .app
        .clone()
        .ok_or_else(|| eyre::eyre!("gateway not configured in scenario world"))?;
    let payload = serde_json::json!({ "assistantType": assistant, "domain": domain });

    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/newThread")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = world.authorization.as_deref() {
        builder = builder.header(header::AUTHORIZATION, token);
    }
    let request = builder
        .body(Body::from(payload.to_string()))
        .wrap_err("build newThread request")?;

    let response = run_async(app.oneshot(request)).wrap_err("dispatch newThread request")?;
    world.last_status = Some(response.status());
    let bytes = run_async(axum::body::to_bytes(response.into_body(), 64 * 1024))
        .wrap_err("read newThread response body")?;
    world.last_body = Some(serde_json::from_slice(&bytes).wrap_err("decode newThread body")?);
    Ok(())
}
