use std::fs;
use std::path::Path;

use culprits_core::{GroupedChanges, MatchResult};
use culprits_operations::config::ActionConfig;
use culprits_operations::types::{MatchScope, MatchedFindings};
use serde::Serialize;
use tracing::info;

use crate::error::{CliError, Result};

/// Document handed to the downstream reporter.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FindingsDocument<'a> {
    repository: &'a str,
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit: Option<&'a str>,
    scope: &'static str,
    create_new_comment: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    changed_migrations: Option<&'a GroupedChanges>,
    findings: &'a MatchResult,
}

fn render(config: &ActionConfig, matched: &MatchedFindings) -> Result<String> {
    let changed_migrations = match &matched.scope {
        MatchScope::ChangedFiles { grouped, .. } => Some(grouped),
        MatchScope::AllFindings => None,
    };

    let document = FindingsDocument {
        repository: &config.repository,
        event: config.event.name(),
        commit: config.event.commit(),
        scope: matched.scope.label(),
        create_new_comment: config.create_new_comment,
        changed_migrations,
        findings: &matched.result,
    };

    serde_json::to_string_pretty(&document).map_err(CliError::Serialize)
}

/// Writes the findings to `output`, or to stdout when no file is given.
pub(crate) fn write_findings(
    config: &ActionConfig,
    matched: &MatchedFindings,
    output: Option<&Path>,
) -> Result<()> {
    let json = render(config, matched)?;

    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n")).map_err(|source| CliError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
            info!("findings written to \"{}\"", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
