//! In-memory conversation provider for tests and offline runs.

use crate::assistant::domain::AssistantId;
use crate::conversation::{
    domain::{MessageRole, Run, RunId, RunStatus, ThreadId, ThreadMessage},
    ports::{ConversationProvider, ProviderError, ProviderResult},
};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

/// Provider operations that can be scripted to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderOperation {
    /// [`ConversationProvider::create_thread`].
    CreateThread,
    /// [`ConversationProvider::append_message`].
    AppendMessage,
    /// [`ConversationProvider::create_run`].
    CreateRun,
    /// [`ConversationProvider::run_status`].
    RunStatus,
    /// [`ConversationProvider::list_messages`].
    ListMessages,
}

/// Number of calls received per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderCallCounts {
    /// Threads created.
    pub create_thread: usize,
    /// Messages appended.
    pub append_message: usize,
    /// Runs started.
    pub create_run: usize,
    /// Run status fetches.
    pub run_status: usize,
    /// Message listings.
    pub list_messages: usize,
}

/// Deterministic, scriptable conversation provider.
///
/// Each run walks through a status script; the final status repeats once the
/// script is exhausted. When a run first reports
/// [`RunStatus::Completed`] the provider appends an assistant reply to the
/// thread: a queued reply if one was scripted, otherwise an echo of the
/// latest user message. Listings are returned newest first, matching the
/// hosted API contract.
///
/// Threads and runs are never pruned: every conversation opened through a
/// long-lived `kind = "memory"` server stays in memory until the process
/// exits. Use it for tests and local runs, not as a production backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationProvider {
    state: Arc<RwLock<InMemoryProviderState>>,
}

#[derive(Debug, Default)]
struct InMemoryProviderState {
    next_thread: u64,
    next_run: u64,
    threads: HashMap<ThreadId, Vec<ThreadMessage>>,
    runs: HashMap<RunId, ScriptedRun>,
    run_scripts: VecDeque<Vec<RunStatus>>,
    replies: VecDeque<String>,
    failures: HashMap<ProviderOperation, ProviderError>,
    calls: ProviderCallCounts,
}

#[derive(Debug)]
struct ScriptedRun {
    thread_id: ThreadId,
    assistant_id: AssistantId,
    remaining: VecDeque<RunStatus>,
    last: RunStatus,
    replied: bool,
}

fn lock_error(err: impl std::fmt::Display) -> ProviderError {
    ProviderError::transport(std::io::Error::other(err.to_string()))
}

fn not_found(kind: &str, id: &str) -> ProviderError {
    ProviderError::Http {
        status: 404,
        body: format!("No {kind} found with id '{id}'."),
    }
}

impl InMemoryConversationProvider {
    /// Creates an empty provider whose runs complete on the first poll.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the status sequence for the next run that is started.
    ///
    /// Runs without a queued script report [`RunStatus::Completed`]. An
    /// empty script is treated the same way.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the state lock is poisoned.
    pub fn script_next_run(
        &self,
        statuses: impl IntoIterator<Item = RunStatus>,
    ) -> ProviderResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.run_scripts.push_back(statuses.into_iter().collect());
        Ok(())
    }

    /// Queues the text of the next assistant reply.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the state lock is poisoned.
    pub fn queue_reply(&self, text: impl Into<String>) -> ProviderResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.replies.push_back(text.into());
        Ok(())
    }

    /// Makes the next call to `operation` fail with `error`.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the state lock is poisoned.
    pub fn fail_next(
        &self,
        operation: ProviderOperation,
        error: ProviderError,
    ) -> ProviderResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failures.insert(operation, error);
        Ok(())
    }

    /// Returns per-operation call counts.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the state lock is poisoned.
    pub fn calls(&self) -> ProviderResult<ProviderCallCounts> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.calls)
    }

    /// Returns a thread's messages in chronological order.
    ///
    /// # Errors
    ///
    /// Returns an HTTP 404 error when the thread does not exist.
    pub fn thread_messages(&self, thread_id: &ThreadId) -> ProviderResult<Vec<ThreadMessage>> {
        let state = self.state.read().map_err(lock_error)?;
        state
            .threads
            .get(thread_id)
            .cloned()
            .ok_or_else(|| not_found("thread", thread_id.as_str()))
    }

    /// Returns the remote assistant each run was started with, in start
    /// order.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the state lock is poisoned.
    pub fn run_assistants(&self) -> ProviderResult<Vec<(RunId, AssistantId)>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut started: Vec<(RunId, AssistantId)> = state
            .runs
            .iter()
            .map(|(id, run)| (id.clone(), run.assistant_id.clone()))
            .collect();
        started.sort_by_key(|(id, _)| run_sequence(id));
        Ok(started)
    }
}

fn run_sequence(id: &RunId) -> u64 {
    id.as_str()
        .strip_prefix("run_")
        .and_then(|suffix| suffix.parse().ok())
        .unwrap_or(u64::MAX)
}

impl InMemoryProviderState {
    fn take_failure(&mut self, operation: ProviderOperation) -> ProviderResult<()> {
        self.failures.remove(&operation).map_or(Ok(()), Err)
    }

    fn next_reply(&mut self, thread_id: &ThreadId) -> String {
        if let Some(reply) = self.replies.pop_front() {
            return reply;
        }
        let latest_user_text = self
            .threads
            .get(thread_id)
            .and_then(|messages| {
                messages
                    .iter()
                    .rev()
                    .find(|message| message.role() == MessageRole::User)
            })
            .and_then(ThreadMessage::first_text)
            .unwrap_or_default();
        format!("Echo: {latest_user_text}")
    }
}

#[async_trait]
impl ConversationProvider for InMemoryConversationProvider {
    async fn create_thread(&self) -> ProviderResult<ThreadId> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.calls.create_thread += 1;
        state.take_failure(ProviderOperation::CreateThread)?;

        state.next_thread += 1;
        let thread_id = ThreadId::new(format!("thread_{}", state.next_thread))
            .map_err(|err| ProviderError::Decode(err.to_string()))?;
        state.threads.insert(thread_id.clone(), Vec::new());
        Ok(thread_id)
    }

    async fn append_message(
        &self,
        thread_id: &ThreadId,
        role: MessageRole,
        text: &str,
    ) -> ProviderResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.calls.append_message += 1;
        state.take_failure(ProviderOperation::AppendMessage)?;

        let messages = state
            .threads
            .get_mut(thread_id)
            .ok_or_else(|| not_found("thread", thread_id.as_str()))?;
        messages.push(ThreadMessage::text(role, text));
        Ok(())
    }

    async fn create_run(
        &self,
        thread_id: &ThreadId,
        assistant_id: &AssistantId,
    ) -> ProviderResult<Run> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.calls.create_run += 1;
        state.take_failure(ProviderOperation::CreateRun)?;

        if !state.threads.contains_key(thread_id) {
            return Err(not_found("thread", thread_id.as_str()));
        }

        state.next_run += 1;
        let run_id = RunId::new(format!("run_{}", state.next_run))
            .map_err(|err| ProviderError::Decode(err.to_string()))?;
        let remaining: VecDeque<RunStatus> =
            state.run_scripts.pop_front().unwrap_or_default().into();
        state.runs.insert(
            run_id.clone(),
            ScriptedRun {
                thread_id: thread_id.clone(),
                assistant_id: assistant_id.clone(),
                remaining,
                last: RunStatus::Completed,
                replied: false,
            },
        );
        Ok(Run::new(run_id, thread_id.clone(), RunStatus::Queued))
    }

    async fn run_status(
        &self,
        thread_id: &ThreadId,
        run_id: &RunId,
    ) -> ProviderResult<RunStatus> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.calls.run_status += 1;
        state.take_failure(ProviderOperation::RunStatus)?;

        let run = state
            .runs
            .get_mut(run_id)
            .filter(|run| &run.thread_id == thread_id)
            .ok_or_else(|| not_found("run", run_id.as_str()))?;
        if let Some(next) = run.remaining.pop_front() {
            run.last = next;
        }
        let status = run.last.clone();
        let needs_reply = status == RunStatus::Completed && !run.replied;
        if needs_reply {
            run.replied = true;
            let reply = state.next_reply(thread_id);
            if let Some(messages) = state.threads.get_mut(thread_id) {
                messages.push(ThreadMessage::text(MessageRole::Assistant, reply));
            }
        }
        Ok(status)
    }

    async fn list_messages(&self, thread_id: &ThreadId) -> ProviderResult<Vec<ThreadMessage>> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.calls.list_messages += 1;
        state.take_failure(ProviderOperation::ListMessages)?;

        let messages = state
            .threads
            .get(thread_id)
            .ok_or_else(|| not_found("thread", thread_id.as_str()))?;
        Ok(messages.iter().rev().cloned().collect())
    }
}
