//! Given steps for message run protocol BDD scenarios.

use super::world::{RunWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use switchboard::conversation::{domain::RunStatus, ports::ConversationProvider};

#[given("an open conversation thread")]
fn open_conversation_thread(world: &mut RunWorld) -> Result<(), eyre::Report> {
    let thread = run_async(world.provider.create_thread()).wrap_err("create thread")?;
    world.thread = Some(thread);
    Ok(())
}

#[given(r#"the next run reports "{statuses}""#)]
fn next_run_reports(world: &mut RunWorld, statuses: String) -> Result<(), eyre::Report> {
    let script: Vec<RunStatus> = statuses
        .split(',')
        .map(str::trim)
        .filter(|status| !status.is_empty())
        .map(RunStatus::from)
        .collect();
    world
        .provider
        .script_next_run(script)
        .wrap_err("script run statuses")
}

#[given(r#"the assistant will reply "{reply}""#)]
fn assistant_will_reply(world: &mut RunWorld, reply: String) -> Result<(), eyre::Report> {
    world.provider.queue_reply(reply).wrap_err("queue reply")
}
