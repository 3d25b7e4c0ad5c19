//! Service that opens conversation threads for admitted profiles.

use crate::assistant::domain::AssistantProfile;
use crate::conversation::{
    domain::ConversationSession,
    ports::{ConversationProvider, ProviderError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for thread creation.
#[derive(Debug, Clone, Error)]
pub enum ThreadServiceError {
    /// The provider could not create the thread.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Result type for thread service operations.
pub type ThreadServiceResult<T> = Result<T, ThreadServiceError>;

/// Opens remote threads on behalf of admitted clients.
pub struct ThreadManager<P, C>
where
    P: ConversationProvider,
    C: Clock + Send + Sync,
{
    provider: Arc<P>,
    clock: Arc<C>,
}

impl<P, C> Clone for ThreadManager<P, C>
where
    P: ConversationProvider,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<P, C> ThreadManager<P, C>
where
    P: ConversationProvider,
    C: Clock + Send + Sync,
{
    /// Creates a thread manager.
    #[must_use]
    pub const fn new(provider: Arc<P>, clock: Arc<C>) -> Self {
        Self { provider, clock }
    }

    /// Opens a new thread for `profile`.
    ///
    /// Exactly one create-thread call is made; failures are not retried.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadServiceError::Provider`] when the provider call fails.
    #[tracing::instrument(skip_all, fields(assistant = %profile.key()))]
    pub async fn create_session(
        &self,
        profile: &AssistantProfile,
    ) -> ThreadServiceResult<ConversationSession> {
        let thread_id = self.provider.create_thread().await?;
        tracing::info!(thread_id = %thread_id, "conversation thread created");
        Ok(ConversationSession::new(
            thread_id,
            profile.key().clone(),
            &*self.clock,
        ))
    }
}
