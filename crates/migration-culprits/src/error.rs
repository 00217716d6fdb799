use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] culprits_operations::OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("`{event_name}` events need an event payload; set GITHUB_EVENT_PATH or --event-path")]
    MissingEventPayload { event_name: String },

    #[error("failed to read event payload '{path}'")]
    EventPayloadRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse event payload '{path}'")]
    EventPayloadParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize findings")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write findings to '{path}'")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;
