use std::fs;
use std::path::Path;

use culprits_operations::config::EventSource;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{CliError, Result};

const PULL_REQUEST_EVENT: &str = "pull_request";
const PUSH_EVENT: &str = "push";

#[derive(Debug, Deserialize)]
struct PullRequestEvent {
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    head: BranchPayload,
    base: BranchPayload,
}

#[derive(Debug, Deserialize)]
struct BranchPayload {
    sha: String,
    #[serde(rename = "ref")]
    git_ref: String,
}

#[derive(Debug, Deserialize)]
struct PushEvent {
    before: String,
    after: String,
}

/// Builds the event source from the workflow's event name and payload file.
///
/// Events other than `pull_request` and `push` never read the payload.
pub(crate) fn resolve_event(
    event_name: Option<&str>,
    event_path: Option<&Path>,
    git_ref: &str,
) -> Result<EventSource> {
    match event_name {
        Some(PULL_REQUEST_EVENT) => {
            let event: PullRequestEvent = read_payload(PULL_REQUEST_EVENT, event_path)?;
            Ok(match event.pull_request {
                Some(pr) => EventSource::PullRequest {
                    commit: pr.head.sha,
                    head_ref: pr.head.git_ref,
                    base_ref: pr.base.git_ref,
                    base_sha: pr.base.sha,
                },
                None => EventSource::Unsupported {
                    event_name: PULL_REQUEST_EVENT.to_string(),
                },
            })
        }
        Some(PUSH_EVENT) => {
            let event: PushEvent = read_payload(PUSH_EVENT, event_path)?;
            Ok(EventSource::Push {
                commit: event.after,
                head_ref: git_ref.to_string(),
                before: event.before,
            })
        }
        Some(other) => Ok(EventSource::Unsupported {
            event_name: other.to_string(),
        }),
        None => Ok(EventSource::Unsupported {
            event_name: String::from("(none)"),
        }),
    }
}

fn read_payload<T: DeserializeOwned>(event_name: &str, event_path: Option<&Path>) -> Result<T> {
    let path = event_path.ok_or_else(|| CliError::MissingEventPayload {
        event_name: event_name.to_string(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| CliError::EventPayloadRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CliError::EventPayloadParse {
        path: path.to_path_buf(),
        source,
    })
}
