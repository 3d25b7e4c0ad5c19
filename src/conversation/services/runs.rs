//! Message turn orchestration: append, run, poll, extract.

use crate::assistant::domain::AssistantId;
use crate::conversation::{
    domain::{
        ConversationDomainError, MessageRole, RunId, RunStatus, ThreadId, latest_assistant_reply,
    },
    ports::{ConversationProvider, ProviderError, Sleeper},
};
use chrono::TimeDelta;
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);
const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Deadline and pacing of the run status poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    deadline: Duration,
    interval: Duration,
}

impl PollPolicy {
    /// Creates a policy with an explicit deadline and interval.
    #[must_use]
    pub const fn new(deadline: Duration, interval: Duration) -> Self {
        Self { deadline, interval }
    }

    /// Returns the maximum time spent polling one run.
    #[must_use]
    pub const fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Returns the pause between status fetches.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DEADLINE, DEFAULT_INTERVAL)
    }
}

/// Service-level errors for a message turn.
#[derive(Debug, Clone, Error)]
pub enum RunServiceError {
    /// The thread identifier or message text was missing.
    #[error(transparent)]
    InvalidRequest(#[from] ConversationDomainError),

    /// A provider call failed; the turn was abandoned.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The provider reported the run as failed.
    #[error("run {run_id} failed")]
    RunFailed {
        /// Identifier of the failed run.
        run_id: RunId,
    },

    /// The run did not reach a terminal status before the deadline.
    #[error("run {run_id} still {last_status} after {deadline:?}")]
    Timeout {
        /// Identifier of the abandoned run.
        run_id: RunId,
        /// Deadline that was exceeded.
        deadline: Duration,
        /// Last status observed.
        last_status: RunStatus,
    },

    /// The run completed but the thread holds no assistant reply.
    #[error("thread {0} has no assistant reply")]
    MissingReply(ThreadId),
}

impl RunServiceError {
    /// Returns `true` when the caller supplied an unusable request.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

/// Result type for run service operations.
pub type RunServiceResult<T> = Result<T, RunServiceError>;

/// Drives one message turn against the provider.
///
/// A turn appends the user's text, starts a run, polls the run until it is
/// terminal or the [`PollPolicy`] deadline passes, and returns the newest
/// assistant reply. Nothing is retried: any provider failure ends the turn.
/// Dropping the returned future cancels polling at its next suspension; the
/// remote run keeps going.
pub struct RunCoordinator<P, C, S>
where
    P: ConversationProvider,
    C: Clock + Send + Sync,
    S: Sleeper,
{
    provider: Arc<P>,
    clock: Arc<C>,
    sleeper: Arc<S>,
    policy: PollPolicy,
}

impl<P, C, S> Clone for RunCoordinator<P, C, S>
where
    P: ConversationProvider,
    C: Clock + Send + Sync,
    S: Sleeper,
{
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            clock: Arc::clone(&self.clock),
            sleeper: Arc::clone(&self.sleeper),
            policy: self.policy,
        }
    }
}

impl<P, C, S> RunCoordinator<P, C, S>
where
    P: ConversationProvider,
    C: Clock + Send + Sync,
    S: Sleeper,
{
    /// Creates a run coordinator.
    #[must_use]
    pub const fn new(provider: Arc<P>, clock: Arc<C>, sleeper: Arc<S>, policy: PollPolicy) -> Self {
        Self {
            provider,
            clock,
            sleeper,
            policy,
        }
    }

    /// Sends `text` to a thread and waits for the assistant's reply.
    ///
    /// # Errors
    ///
    /// Returns [`RunServiceError::InvalidRequest`] for a blank thread id or
    /// an empty message, [`RunServiceError::RunFailed`] or
    /// [`RunServiceError::Timeout`] when the run does not complete,
    /// [`RunServiceError::MissingReply`] when no assistant message exists,
    /// and [`RunServiceError::Provider`] for any provider failure.
    #[tracing::instrument(skip(self, text), fields(run_id = tracing::field::Empty))]
    pub async fn send_message(
        &self,
        thread_id: &str,
        text: &str,
        assistant_id: &AssistantId,
    ) -> RunServiceResult<String> {
        let thread = ThreadId::new(thread_id)?;
        if text.is_empty() {
            return Err(ConversationDomainError::EmptyMessageText.into());
        }

        self.provider
            .append_message(&thread, MessageRole::User, text)
            .await?;
        let run = self.provider.create_run(&thread, assistant_id).await?;
        tracing::Span::current().record("run_id", run.id().as_str());

        self.await_completion(&thread, run.id()).await?;

        let messages = self.provider.list_messages(&thread).await?;
        let reply = latest_assistant_reply(&messages)
            .ok_or_else(|| RunServiceError::MissingReply(thread.clone()))?;
        tracing::info!(reply_len = reply.len(), "assistant reply extracted");
        Ok(reply.to_owned())
    }

    async fn await_completion(&self, thread: &ThreadId, run_id: &RunId) -> RunServiceResult<()> {
        let deadline = TimeDelta::from_std(self.policy.deadline).unwrap_or(TimeDelta::MAX);
        let started = self.clock.utc();
        let mut polls: u32 = 0;

        loop {
            let status = self.provider.run_status(thread, run_id).await?;
            polls = polls.saturating_add(1);
            tracing::debug!(poll = polls, status = %status, "run status fetched");

            match status {
                RunStatus::Completed => return Ok(()),
                RunStatus::Failed => {
                    tracing::warn!("run reported failure");
                    return Err(RunServiceError::RunFailed {
                        run_id: run_id.clone(),
                    });
                }
                pending => {
                    let elapsed = self.clock.utc().signed_duration_since(started);
                    if elapsed > deadline {
                        tracing::warn!(
                            polls,
                            last_status = %pending,
                            "run did not complete before the deadline"
                        );
                        return Err(RunServiceError::Timeout {
                            run_id: run_id.clone(),
                            deadline: self.policy.deadline,
                            last_status: pending,
                        });
                    }
                }
            }

            self.sleeper.sleep(self.policy.interval).await;
        }
    }
}
