use std::path::Path;

use culprits_core::{GroupedChanges, MatchResult};
use culprits_git::{FileChange, FileStatus};
use tracing::info;

/// Changed paths of one run, bucketed by status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedFiles {
    pub all: Vec<String>,
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub removed: Vec<String>,
    pub renamed: Vec<String>,
    pub added_or_modified: Vec<String>,
}

impl ChangedFiles {
    #[must_use]
    pub fn from_changes(changes: &[FileChange], path_prefix: &str) -> Self {
        let mut files = Self::default();

        for change in changes {
            let path = strip_path_prefix(&change.path, path_prefix);

            match change.status {
                FileStatus::Added => {
                    files.added.push(path.clone());
                    files.added_or_modified.push(path.clone());
                }
                FileStatus::Modified => {
                    files.modified.push(path.clone());
                    files.added_or_modified.push(path.clone());
                }
                FileStatus::Removed => files.removed.push(path.clone()),
                FileStatus::Renamed => files.renamed.push(path.clone()),
            }

            files.all.push(path);
        }

        files
    }

    pub fn log_summary(&self) {
        info!("All: {}", self.all.join(","));
        info!("Added: {}", self.added.join(", "));
        info!("Modified: {}", self.modified.join(", "));
        info!("Removed: {}", self.removed.join(", "));
        info!("Renamed: {}", self.renamed.join(", "));
        info!("Added or modified: {}", self.added_or_modified.join(", "));
    }
}

fn strip_path_prefix(path: &Path, prefix: &str) -> String {
    let path = path.to_string_lossy();
    path.strip_prefix(prefix).unwrap_or(&path).to_string()
}

/// Which findings a run reported on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchScope {
    /// Findings were narrowed to the migrations touched by the change.
    ChangedFiles {
        files: ChangedFiles,
        grouped: GroupedChanges,
    },
    /// Changed files were unavailable or not requested; every finding is kept.
    AllFindings,
}

impl MatchScope {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ChangedFiles { .. } => "changed-files",
            Self::AllFindings => "all-findings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFindings {
    pub scope: MatchScope,
    pub result: MatchResult,
}

#[derive(Debug)]
pub enum ReportOutcome {
    /// No report was found; nothing was matched.
    NoReport,
    Matched(MatchedFindings),
}
