//! Gateway configuration.
//!
//! Settings are layered, later layers winning:
//!
//! 1. built-in defaults, including the four stock assistant profiles;
//! 2. an optional TOML file whose `[[assistants]]` list, when present,
//!    replaces the stock profiles;
//! 3. environment variables (`PORT`, `HOST`, `OPENAI_API_KEY`,
//!    `OPENAI_BASE_URL`, `ALLOWED_ORIGINS`, `SWITCHBOARD_PROVIDER` and
//!    `ASSISTANT_<KEY>`);
//! 4. command-line overrides.
//!
//! A minimal file looks like:
//!
//! ```toml
//! default_assistant = "support"
//!
//! [server]
//! port = 8080
//! allowed_origins = ["https://chat.example.com"]
//!
//! [[assistants]]
//! key = "support"
//! assistant_id = "asst_abc"
//! name = "Support"
//! allowed_domains = ["example.com"]
//! ```

mod defaults;
mod env;
mod file;


pub use env::{EnvSource, MapEnv, ProcessEnv};

use crate::assistant::domain::{
    AssistantDomainError, AssistantId, AssistantKey, AssistantProfile, AssistantRegistry,
};
use crate::conversation::services::PollPolicy;
use camino::{Utf8Path, Utf8PathBuf};
use file::{AssistantEntry, FileConfig};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while assembling the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Underlying parse error.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// An environment variable holds an unusable value.
    #[error("environment variable {name} has invalid value '{value}'")]
    InvalidEnv {
        /// Variable name.
        name: String,
        /// Offending value.
        value: String,
    },

    /// A setting holds an unusable value.
    #[error("invalid setting {name}: {reason}")]
    InvalidSetting {
        /// Setting name.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The OpenAI provider is selected but no API key was supplied.
    #[error("OPENAI_API_KEY must be set when the openai provider is selected")]
    MissingApiKey,

    /// A profile or the profile table is invalid.
    #[error(transparent)]
    Assistant(#[from] AssistantDomainError),
}

/// Which conversation provider backs the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderKind {
    /// The hosted OpenAI Assistants API.
    #[default]
    OpenAi,
    /// The local in-memory echo provider.
    Memory,
}

impl ProviderKind {
    /// Returns the configuration spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown provider name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown provider '{0}'; expected openai or memory")]
pub struct ParseProviderKindError(pub String);

impl FromStr for ProviderKind {
    type Err = ParseProviderKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "memory" => Ok(Self::Memory),
            _ => Err(ParseProviderKindError(value.to_owned())),
        }
    }
}

/// HTTP listener and CORS settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Origins allowed by the CORS layer.
    pub allowed_origins: Vec<String>,
}

impl ServerSettings {
    /// Returns the `host:port` bind address.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Conversation provider settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Selected provider.
    pub kind: ProviderKind,
    /// API root for the hosted provider.
    pub base_url: String,
    /// Secret key; always present when `kind` is [`ProviderKind::OpenAi`].
    pub api_key: Option<String>,
    /// Upper bound for each provider request.
    pub request_timeout: Duration,
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Configuration file to read.
    pub config_path: Option<Utf8PathBuf>,
    /// Bind host.
    pub host: Option<String>,
    /// Bind port.
    pub port: Option<u16>,
    /// Provider selection.
    pub provider: Option<ProviderKind>,
}

/// Fully resolved gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Listener settings.
    pub server: ServerSettings,
    /// Provider settings.
    pub provider: ProviderSettings,
    /// Run poll deadline and interval.
    pub polling: PollPolicy,
    /// Immutable profile table.
    pub registry: AssistantRegistry,
}

impl GatewayConfig {
    /// Resolves configuration from every layer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed, a
    /// value is malformed, the profile table is invalid, or the OpenAI
    /// provider is selected without an API key.
    pub fn load(overrides: &ConfigOverrides, env: &impl EnvSource) -> Result<Self, ConfigError> {
        let layer = overrides
            .config_path
            .as_deref()
            .map_or_else(|| Ok(FileConfig::default()), file::read_config_file)?;
        Self::from_layers(layer, overrides, env)
    }

    /// Resolves configuration from TOML text instead of a file on disk.
    ///
    /// # Errors
    ///
    /// See [`GatewayConfig::load`].
    pub fn from_toml_str(
        contents: &str,
        overrides: &ConfigOverrides,
        env: &impl EnvSource,
    ) -> Result<Self, ConfigError> {
        let layer = file::parse_config(Utf8Path::new("<inline>"), contents)?;
        Self::from_layers(layer, overrides, env)
    }

    fn from_layers(
        file: FileConfig,
        overrides: &ConfigOverrides,
        env: &impl EnvSource,
    ) -> Result<Self, ConfigError> {
        let server = resolve_server(&file, overrides, env)?;
        let provider = resolve_provider(&file, overrides, env)?;
        let polling = resolve_polling(&file)?;
        let registry = resolve_registry(file, env)?;

        Ok(Self {
            server,
            provider,
            polling,
            registry,
        })
    }
}

fn resolve_server(
    file: &FileConfig,
    overrides: &ConfigOverrides,
    env: &impl EnvSource,
) -> Result<ServerSettings, ConfigError> {
    let env_port = env
        .non_blank("PORT")
        .map(|raw| {
            raw.parse::<u16>().map_err(|_| ConfigError::InvalidEnv {
                name: "PORT".to_owned(),
                value: raw.clone(),
            })
        })
        .transpose()?;

    let port = overrides
        .port
        .or(env_port)
        .or(file.server.port)
        .unwrap_or(defaults::DEFAULT_PORT);

    let host = overrides
        .host
        .clone()
        .or_else(|| env.non_blank("HOST"))
        .or_else(|| file.server.host.clone())
        .unwrap_or_else(|| defaults::DEFAULT_HOST.to_owned());

    let allowed_origins = env
        .non_blank("ALLOWED_ORIGINS")
        .map(|raw| split_list(&raw))
        .or_else(|| file.server.allowed_origins.clone())
        .unwrap_or_else(|| {
            defaults::DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| (*origin).to_owned())
                .collect()
        });

    Ok(ServerSettings {
        host,
        port,
        allowed_origins,
    })
}

fn resolve_provider(
    file: &FileConfig,
    overrides: &ConfigOverrides,
    env: &impl EnvSource,
) -> Result<ProviderSettings, ConfigError> {
    let env_kind = env
        .non_blank("SWITCHBOARD_PROVIDER")
        .map(|raw| {
            raw.parse::<ProviderKind>()
                .map_err(|_| ConfigError::InvalidEnv {
                    name: "SWITCHBOARD_PROVIDER".to_owned(),
                    value: raw.clone(),
                })
        })
        .transpose()?;
    let file_kind = file
        .provider
        .kind
        .as_deref()
        .map(|raw| {
            raw.parse::<ProviderKind>()
                .map_err(|err| ConfigError::InvalidSetting {
                    name: "provider.kind",
                    reason: err.to_string(),
                })
        })
        .transpose()?;
    let kind = overrides
        .provider
        .or(env_kind)
        .or(file_kind)
        .unwrap_or_default();

    let base_url = env
        .non_blank("OPENAI_BASE_URL")
        .or_else(|| file.provider.base_url.clone())
        .unwrap_or_else(|| defaults::DEFAULT_BASE_URL.to_owned());

    let api_key = env.non_blank("OPENAI_API_KEY").or_else(|| {
        file.provider
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_owned)
    });
    if kind == ProviderKind::OpenAi && api_key.is_none() {
        return Err(ConfigError::MissingApiKey);
    }

    let request_timeout = match file.provider.request_timeout_secs {
        Some(0) => {
            return Err(ConfigError::InvalidSetting {
                name: "provider.request_timeout_secs",
                reason: "must be greater than zero".to_owned(),
            });
        }
        Some(secs) => Duration::from_secs(secs),
        None => defaults::DEFAULT_REQUEST_TIMEOUT,
    };

    Ok(ProviderSettings {
        kind,
        base_url,
        api_key,
        request_timeout,
    })
}

fn resolve_polling(file: &FileConfig) -> Result<PollPolicy, ConfigError> {
    let stock = PollPolicy::default();
    let deadline = file
        .polling
        .deadline_secs
        .map_or(stock.deadline(), Duration::from_secs);
    let interval = match file.polling.interval_ms {
        Some(0) => {
            return Err(ConfigError::InvalidSetting {
                name: "polling.interval_ms",
                reason: "must be greater than zero".to_owned(),
            });
        }
        Some(millis) => Duration::from_millis(millis),
        None => stock.interval(),
    };
    Ok(PollPolicy::new(deadline, interval))
}

fn resolve_registry(
    file: FileConfig,
    env: &impl EnvSource,
) -> Result<AssistantRegistry, ConfigError> {
    let configured = match file.assistants {
        Some(entries) => entries
            .into_iter()
            .map(profile_from_entry)
            .collect::<Result<Vec<_>, _>>()?,
        None => defaults::builtin_profiles()?,
    };

    let profiles = configured
        .into_iter()
        .map(|profile| apply_assistant_env(profile, env))
        .collect::<Result<Vec<_>, _>>()?;

    let default_key = AssistantKey::new(
        file.default_assistant
            .unwrap_or_else(|| defaults::DEFAULT_ASSISTANT.to_owned()),
    )?;
    Ok(AssistantRegistry::new(profiles, default_key)?)
}

fn profile_from_entry(entry: AssistantEntry) -> Result<AssistantProfile, AssistantDomainError> {
    Ok(AssistantProfile::new(
        AssistantKey::new(entry.key)?,
        AssistantId::new(entry.assistant_id)?,
        entry.name,
    )?
    .with_welcome_message(entry.welcome_message)
    .with_color(entry.color)
    .with_placeholder(entry.placeholder)
    .with_allowed_domains(entry.allowed_domains)
    .with_requires_auth(entry.requires_auth))
}

fn apply_assistant_env(
    profile: AssistantProfile,
    env: &impl EnvSource,
) -> Result<AssistantProfile, ConfigError> {
    let name = format!("ASSISTANT_{}", profile.key().env_suffix());
    let Some(raw) = env.non_blank(&name) else {
        return Ok(profile);
    };
    let assistant_id =
        AssistantId::new(raw.clone()).map_err(|_| ConfigError::InvalidEnv { name, value: raw })?;
    Ok(profile.with_assistant_id(assistant_id))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
