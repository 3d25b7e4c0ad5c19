//! Then steps for message run protocol BDD scenarios.

use super::world::RunWorld;
use eyre::WrapErr;
use mockable::Clock;
use rstest_bdd_macros::then;
use switchboard::conversation::services::{RunServiceError, RunServiceResult};

fn last_result(world: &RunWorld) -> Result<&RunServiceResult<String>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no turn recorded in scenario world"))
}

#[then(r#"the reply is "{expected}""#)]
fn reply_is(world: &RunWorld, expected: String) -> Result<(), eyre::Report> {
    match last_result(world)? {
        Ok(reply) if *reply == expected => Ok(()),
        Ok(reply) => Err(eyre::eyre!("expected reply {expected:?}, got {reply:?}")),
        Err(err) => Err(eyre::eyre!("expected reply {expected:?}, turn failed: {err}")),
    }
}

#[then("the run status was fetched {count:u64} times")]
fn run_status_fetch_count(world: &RunWorld, count: u64) -> Result<(), eyre::Report> {
    let calls = world.provider.calls().wrap_err("read provider call counts")?;
    let fetched = u64::try_from(calls.run_status).wrap_err("fetch count fits in u64")?;
    if fetched != count {
        return Err(eyre::eyre!("expected {count} status fetches, got {fetched}"));
    }
    Ok(())
}

#[then("the turn fails because the run failed")]
fn turn_fails_with_run_failure(world: &RunWorld) -> Result<(), eyre::Report> {
    match last_result(world)? {
        Err(RunServiceError::RunFailed { .. }) => Ok(()),
        other => Err(eyre::eyre!("expected a failed run, got {other:?}")),
    }
}

#[then("the thread messages were never listed")]
fn messages_never_listed(world: &RunWorld) -> Result<(), eyre::Report> {
    let calls = world.provider.calls().wrap_err("read provider call counts")?;
    if calls.list_messages != 0 {
        return Err(eyre::eyre!(
            "expected no message listing, got {}",
            calls.list_messages
        ));
    }
    Ok(())
}

#[then("the turn times out between {low:i64} and {high:i64} seconds after polling began")]
fn turn_times_out(world: &RunWorld, low: i64, high: i64) -> Result<(), eyre::Report> {
    if !matches!(last_result(world)?, Err(RunServiceError::Timeout { .. })) {
        return Err(eyre::eyre!(
            "expected a timeout, got {:?}",
            world.last_result
        ));
    }
    let started = world
        .started_at
        .ok_or_else(|| eyre::eyre!("turn start not recorded in scenario world"))?;
    let elapsed = world.clock.utc().signed_duration_since(started).num_seconds();
    if !(low..=high).contains(&elapsed) {
        return Err(eyre::eyre!(
            "expected timeout between {low}s and {high}s, got {elapsed}s"
        ));
    }
    Ok(())
}
