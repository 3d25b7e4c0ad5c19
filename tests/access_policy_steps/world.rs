//! Shared world state for assistant access policy BDD scenarios.

use std::sync::Arc;

use axum::{Router, http::StatusCode};
use rstest::fixture;
use switchboard::{
    config::{ConfigOverrides, GatewayConfig, MapEnv},
    conversation::adapters::{InMemoryConversationProvider, ManualClock, ManualSleeper},
    http::{AppState, router},
};

/// Scenario world for access policy behaviour tests.
pub struct AccessWorld {
    /// Gateway router under test.
    pub app: Option<Router>,
    /// Authorization header sent with the next request.
    pub authorization: Option<String>,
    /// Status of the last response.
    pub last_status: Option<StatusCode>,
    /// Decoded body of the last response.
    pub last_body: Option<serde_json::Value>,
}

impl AccessWorld {
    /// Creates a world with no gateway configured yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            app: None,
            authorization: None,
            last_status: None,
            last_body: None,
        }
    }

    /// Builds the gateway router from the stock configuration.
    pub fn configure_stock_gateway(&mut self) -> Result<(), eyre::Report> {
        let config = GatewayConfig::from_toml_str(
            "[provider]\nkind = \"memory\"",
            &ConfigOverrides::default(),
            &MapEnv::new(),
        )?;
        let clock = Arc::new(ManualClock::default());
        let state = AppState::new(
            Arc::new(config.registry),
            Arc::new(InMemoryConversationProvider::new()),
            Arc::clone(&clock),
            Arc::new(ManualSleeper::new(clock)),
            config.polling,
        );
        self.app = Some(router(state, &config.server.allowed_origins));
        Ok(())
    }
}

impl Default for AccessWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AccessWorld {
    AccessWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
