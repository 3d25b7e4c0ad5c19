//! Switchboard server entry point.
//!
//! Usage:
//!
//! ```text
//! switchboard [--config <path>] [--host <host>] [--port <port>] [--provider openai|memory]
//! ```
//!
//! Configuration is layered from built-in defaults, the optional TOML file,
//! environment variables and these flags. The server stops gracefully on
//! Ctrl-C.

use camino::Utf8PathBuf;
use clap::Parser;
use eyre::WrapErr;
use mockable::DefaultClock;
use std::sync::Arc;
use switchboard::config::{ConfigOverrides, GatewayConfig, ProcessEnv, ProviderKind};
use switchboard::conversation::{
    adapters::{InMemoryConversationProvider, OpenAiAssistantsProvider, OpenAiConfig, TokioSleeper},
    ports::ConversationProvider,
};
use switchboard::http::{self, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Routes web chat conversations to hosted assistant profiles.
#[derive(Debug, Parser)]
#[command(name = "switchboard", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, env = "SWITCHBOARD_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Address to bind (overrides `HOST`).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides `PORT`).
    #[arg(long)]
    port: Option<u16>,

    /// Conversation provider: `openai` or `memory`.
    #[arg(long)]
    provider: Option<ProviderKind>,
}

impl From<Cli> for ConfigOverrides {
    fn from(cli: Cli) -> Self {
        Self {
            config_path: cli.config,
            host: cli.host,
            port: cli.port,
            provider: cli.provider,
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let overrides = ConfigOverrides::from(Cli::parse());
    let config = GatewayConfig::load(&overrides, &ProcessEnv)
        .wrap_err("failed to load switchboard configuration")?;

    match config.provider.kind {
        ProviderKind::OpenAi => {
            let provider = OpenAiAssistantsProvider::new(&OpenAiConfig {
                base_url: config.provider.base_url.clone(),
                api_key: config.provider.api_key.clone().unwrap_or_default(),
                timeout: config.provider.request_timeout,
            })
            .wrap_err("failed to build the OpenAI provider")?;
            run(config, provider).await
        }
        ProviderKind::Memory => {
            tracing::warn!("using the in-memory echo provider; replies are not generated");
            run(config, InMemoryConversationProvider::new()).await
        }
    }
}

async fn run<P>(config: GatewayConfig, provider: P) -> eyre::Result<()>
where
    P: ConversationProvider + 'static,
{
    let bind_address = config.server.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .wrap_err_with(|| format!("failed to bind {bind_address}"))?;

    let registry = Arc::new(config.registry);
    tracing::info!(
        address = %bind_address,
        provider = %config.provider.kind,
        assistants = %registry.keys().join(", "),
        default_assistant = %registry.default_profile().key(),
        "switchboard listening"
    );

    let state = AppState::new(
        registry,
        Arc::new(provider),
        Arc::new(DefaultClock),
        Arc::new(TokioSleeper),
        config.polling,
    );
    let app = http::router(state, &config.server.allowed_origins);
    http::serve(listener, app)
        .await
        .wrap_err("server terminated unexpectedly")?;

    tracing::info!("switchboard stopped");
    Ok(())
}
