//! Then steps for assistant access policy BDD scenarios.

use super::world::AccessWorld;
use axum::http::StatusCode;
use rstest_bdd_macros::then;

#[then(r#"the conversation opens with display name "{name}""#)]
fn conversation_opens(world: &AccessWorld, name: String) -> Result<(), eyre::Report> {
    let status = world
        .last_status
        .ok_or_else(|| eyre::eyre!("missing response status in scenario world"))?;
    let body = world
        .last_body
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing response body in scenario world"))?;

    if status != StatusCode::OK {
        return Err(eyre::eyre!("expected 200, got {status} with body {body}"));
    }
    if body.get("success") != Some(&serde_json::Value::Bool(true)) {
        return Err(eyre::eyre!("expected success flag in {body}"));
    }
    if body
        .get("threadId")
        .and_then(serde_json::Value::as_str)
        .is_none_or(str::is_empty)
    {
        return Err(eyre::eyre!("expected a thread identifier in {body}"));
    }
    if body
        .pointer("/assistantConfig/name")
        .and_then(serde_json::Value::as_str)
        != Some(name.as_str())
    {
        return Err(eyre::eyre!("expected display name {name}, got {body}"));
    }
    Ok(())
}

#[then(r#"the request is refused with status {code:u16} and error "{message}""#)]
fn request_refused(world: &AccessWorld, code: u16, message: String) -> Result<(), eyre::Report> {
    let status = world
        .last_status
        .ok_or_else(|| eyre::eyre!("missing response status in scenario world"))?;
    let body = world
        .last_body
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing response body in scenario world"))?;

    if status.as_u16() != code {
        return Err(eyre::eyre!("expected status {code}, got {status}"));
    }
    let expected = serde_json::json!({ "error": message, "success": false });
    if *body != expected {
        return Err(eyre::eyre!("expected body {expected}, got {body}"));
    }
    Ok(())
}
