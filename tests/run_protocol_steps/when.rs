//! When steps for message run protocol BDD scenarios.

use super::world::{RunWorld, run_async};
use mockable::Clock;
use rstest_bdd_macros::when;

#[when(r#"the user sends "{text}""#)]
fn user_sends(world: &mut RunWorld, text: String) -> Result<(), eyre::Report> {
    let thread = world
        .thread
        .clone()
        .ok_or_else(|| eyre::eyre!("no thread opened in scenario world"))?;

    world.started_at = Some(world.clock.utc());
    let result = run_async(world.coordinator.send_message(
        thread.as_str(),
        &text,
        &world.assistant_id,
    ));
    world.last_result = Some(result);
    Ok(())
}
