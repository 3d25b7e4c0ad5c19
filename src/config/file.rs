//! TOML configuration file schema and reader.

use super::ConfigError;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;

/// Top-level layout of the configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub(super) server: ServerSection,
    #[serde(default)]
    pub(super) provider: ProviderSection,
    #[serde(default)]
    pub(super) polling: PollingSection,
    pub(super) default_assistant: Option<String>,
    pub(super) assistants: Option<Vec<AssistantEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct ServerSection {
    pub(super) host: Option<String>,
    pub(super) port: Option<u16>,
    pub(super) allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct ProviderSection {
    pub(super) kind: Option<String>,
    pub(super) base_url: Option<String>,
    pub(super) api_key: Option<String>,
    pub(super) request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct PollingSection {
    pub(super) deadline_secs: Option<u64>,
    pub(super) interval_ms: Option<u64>,
}

/// One `[[assistants]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct AssistantEntry {
    pub(super) key: String,
    pub(super) assistant_id: String,
    pub(super) name: String,
    #[serde(default)]
    pub(super) welcome_message: String,
    #[serde(default)]
    pub(super) color: String,
    #[serde(default)]
    pub(super) placeholder: String,
    #[serde(default)]
    pub(super) allowed_domains: Vec<String>,
    #[serde(default)]
    pub(super) requires_auth: bool,
}

/// Reads and parses the file at `path`.
pub(super) fn read_config_file(path: &Utf8Path) -> Result<FileConfig, ConfigError> {
    let file_name = path.file_name().ok_or_else(|| ConfigError::Read {
        path: path.to_owned(),
        source: std::io::Error::other("path must include a file name"),
    })?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|source| {
        ConfigError::Read {
            path: path.to_owned(),
            source,
        }
    })?;
    let contents = dir
        .read_to_string(file_name)
        .map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
    parse_config(path, &contents)
}

pub(super) fn parse_config(path: &Utf8Path, contents: &str) -> Result<FileConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source: Box::new(source),
    })
}
