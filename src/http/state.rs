//! Shared state handed to every handler.

use crate::assistant::{domain::AssistantRegistry, services::AccessGuard};
use crate::conversation::{
    ports::{ConversationProvider, Sleeper},
    services::{PollPolicy, RunCoordinator, ThreadManager},
};
use mockable::Clock;
use std::sync::Arc;

/// Services shared by the HTTP handlers.
pub struct AppState<P, C, S>
where
    P: ConversationProvider,
    C: Clock + Send + Sync,
    S: Sleeper,
{
    pub(super) guard: AccessGuard,
    pub(super) threads: ThreadManager<P, C>,
    pub(super) runs: RunCoordinator<P, C, S>,
    pub(super) clock: Arc<C>,
}

impl<P, C, S> Clone for AppState<P, C, S>
where
    P: ConversationProvider,
    C: Clock + Send + Sync,
    S: Sleeper,
{
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            threads: self.threads.clone(),
            runs: self.runs.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<P, C, S> AppState<P, C, S>
where
    P: ConversationProvider,
    C: Clock + Send + Sync,
    S: Sleeper,
{
    /// Wires the services around one provider, clock and sleeper.
    #[must_use]
    pub fn new(
        registry: Arc<AssistantRegistry>,
        provider: Arc<P>,
        clock: Arc<C>,
        sleeper: Arc<S>,
        policy: PollPolicy,
    ) -> Self {
        Self {
            guard: AccessGuard::new(registry),
            threads: ThreadManager::new(Arc::clone(&provider), Arc::clone(&clock)),
            runs: RunCoordinator::new(provider, Arc::clone(&clock), sleeper, policy),
            clock,
        }
    }

    /// Returns the profile registry.
    #[must_use]
    pub fn registry(&self) -> &AssistantRegistry {
        self.guard.registry()
    }
}
