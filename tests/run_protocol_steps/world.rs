//! Shared world state for message run protocol BDD scenarios.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rstest::fixture;
use switchboard::{
    assistant::domain::AssistantId,
    conversation::{
        adapters::{InMemoryConversationProvider, ManualClock, ManualSleeper},
        domain::ThreadId,
        services::{PollPolicy, RunCoordinator, RunServiceResult},
    },
};

/// Coordinator type used by the BDD world.
pub type TestRunCoordinator =
    RunCoordinator<InMemoryConversationProvider, ManualClock, ManualSleeper>;

/// Scenario world for run protocol behaviour tests.
pub struct RunWorld {
    /// Scriptable provider shared with the coordinator.
    pub provider: Arc<InMemoryConversationProvider>,
    /// Clock advanced by every poll interval.
    pub clock: Arc<ManualClock>,
    /// Coordinator under test.
    pub coordinator: TestRunCoordinator,
    /// Assistant the runs are started with.
    pub assistant_id: AssistantId,
    /// Thread opened by the scenario.
    pub thread: Option<ThreadId>,
    /// Clock reading when the last turn started.
    pub started_at: Option<DateTime<Utc>>,
    /// Outcome of the last turn.
    pub last_result: Option<RunServiceResult<String>>,
}

impl RunWorld {
    /// Creates a world around a fresh in-memory provider.
    pub fn new() -> Result<Self, eyre::Report> {
        let provider = Arc::new(InMemoryConversationProvider::new());
        let clock = Arc::new(ManualClock::default());
        let coordinator = RunCoordinator::new(
            Arc::clone(&provider),
            Arc::clone(&clock),
            Arc::new(ManualSleeper::new(Arc::clone(&clock))),
            PollPolicy::new(Duration::from_secs(30), Duration::from_secs(1)),
        );
        Ok(Self {
            provider,
            clock,
            coordinator,
            assistant_id: AssistantId::new("asst_customer_support_123")?,
            thread: None,
            started_at: None,
            last_result: None,
        })
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
#[expect(clippy::expect_used, reason = "the fixture assistant id is a valid literal")]
pub fn world() -> RunWorld {
    RunWorld::new().expect("scenario world should build")
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
