//! Run status and the run value returned by the provider.

use super::{RunId, ThreadId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a remote run.
///
/// Only [`RunStatus::Completed`] and [`RunStatus::Failed`] are terminal.
/// Any status string the provider reports beyond the four known ones is kept
/// verbatim in [`RunStatus::Other`] and treated as still in progress.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunStatus {
    /// Accepted by the provider but not yet started.
    Queued,
    /// The assistant is working.
    InProgress,
    /// The assistant produced its reply.
    Completed,
    /// The provider gave up on the run.
    Failed,
    /// A provider-defined status with no special meaning here.
    Other(String),
}

impl RunStatus {
    /// Returns the provider's string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Queued => "queued",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Other(raw) => raw,
        }
    }

    /// Returns `true` once no further transitions can occur.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl From<&str> for RunStatus {
    fn from(value: &str) -> Self {
        match value {
            "queued" => Self::Queued,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for RunStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<RunStatus> for String {
    fn from(status: RunStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run as reported by the provider when it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    id: RunId,
    thread_id: ThreadId,
    status: RunStatus,
}

impl Run {
    /// Creates a run value.
    #[must_use]
    pub const fn new(id: RunId, thread_id: ThreadId, status: RunStatus) -> Self {
        Self {
            id,
            thread_id,
            status,
        }
    }

    /// Returns the run identifier.
    #[must_use]
    pub const fn id(&self) -> &RunId {
        &self.id
    }

    /// Returns the owning thread.
    #[must_use]
    pub const fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    /// Returns the status at creation time.
    #[must_use]
    pub const fn status(&self) -> &RunStatus {
        &self.status
    }
}
