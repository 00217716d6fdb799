use std::path::PathBuf;

/// The event that triggered the run, with the revisions it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    PullRequest {
        commit: String,
        head_ref: String,
        base_ref: String,
        base_sha: String,
    },
    Push {
        commit: String,
        head_ref: String,
        before: String,
    },
    Unsupported {
        event_name: String,
    },
}

impl EventSource {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::PullRequest { .. } => "pull_request",
            Self::Push { .. } => "push",
            Self::Unsupported { event_name } => event_name.as_str(),
        }
    }

    /// Base and head revisions to diff, when the event has them.
    #[must_use]
    pub fn revision_range(&self) -> Option<(&str, &str)> {
        match self {
            Self::PullRequest {
                commit, base_sha, ..
            } => Some((base_sha.as_str(), commit.as_str())),
            Self::Push { commit, before, .. } => Some((before.as_str(), commit.as_str())),
            Self::Unsupported { .. } => None,
        }
    }

    #[must_use]
    pub fn commit(&self) -> Option<&str> {
        match self {
            Self::PullRequest { commit, .. } | Self::Push { commit, .. } => Some(commit.as_str()),
            Self::Unsupported { .. } => None,
        }
    }

    #[must_use]
    pub fn head_ref(&self) -> Option<&str> {
        match self {
            Self::PullRequest { head_ref, .. } | Self::Push { head_ref, .. } => {
                Some(head_ref.as_str())
            }
            Self::Unsupported { .. } => None,
        }
    }

    #[must_use]
    pub fn base_ref(&self) -> Option<&str> {
        match self {
            Self::PullRequest { base_ref, .. } => Some(base_ref.as_str()),
            Self::Push { .. } | Self::Unsupported { .. } => None,
        }
    }
}

/// Settings for one run.
///
/// This is a data transfer object with intentionally public fields for direct access.
#[derive(Debug, Clone)]
pub struct ActionConfig {
    /// `owner/name` of the repository under review.
    pub repository: String,
    /// Checkout root; relative report paths and git discovery start here.
    pub workspace: PathBuf,
    /// Stripped from the front of every changed path before classification.
    pub path_prefix: String,
    pub create_new_comment: bool,
    pub report_only_changed_files: bool,
    pub source_file: PathBuf,
    pub event: EventSource,
}

impl ActionConfig {
    /// Location of the migration report, or `None` when no source file is configured.
    #[must_use]
    pub fn report_path(&self) -> Option<PathBuf> {
        if self.source_file.as_os_str().is_empty() {
            return None;
        }

        if self.source_file.is_absolute() {
            Some(self.source_file.clone())
        } else {
            Some(self.workspace.join(&self.source_file))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(source_file: &str) -> ActionConfig {
        ActionConfig {
            repository: "acme/shop".to_string(),
            workspace: PathBuf::from("/github/workspace"),
            path_prefix: String::new(),
            create_new_comment: false,
            report_only_changed_files: true,
            source_file: PathBuf::from(source_file),
            event: EventSource::Unsupported {
                event_name: "schedule".to_string(),
            },
        }
    }

    #[test]
    fn relative_report_path_resolves_against_workspace() {
        assert_eq!(
            config("reports/migrations.json").report_path(),
            Some(PathBuf::from("/github/workspace/reports/migrations.json"))
        );
    }

    #[test]
    fn absolute_report_path_is_kept() {
        assert_eq!(
            config("/tmp/migrations.json").report_path(),
            Some(PathBuf::from("/tmp/migrations.json"))
        );
    }

    #[test]
    fn empty_source_file_has_no_report_path() {
        assert_eq!(config("").report_path(), None);
    }

    #[test]
    fn pull_request_diffs_base_sha_against_head_commit() {
        let event = EventSource::PullRequest {
            commit: "head-sha".to_string(),
            head_ref: "feature".to_string(),
            base_ref: "main".to_string(),
            base_sha: "base-sha".to_string(),
        };

        assert_eq!(event.revision_range(), Some(("base-sha", "head-sha")));
        assert_eq!(event.commit(), Some("head-sha"));
        assert_eq!(event.head_ref(), Some("feature"));
        assert_eq!(event.base_ref(), Some("main"));
        assert_eq!(event.name(), "pull_request");
    }

    #[test]
    fn push_diffs_before_against_after() {
        let event = EventSource::Push {
            commit: "after".to_string(),
            head_ref: "refs/heads/main".to_string(),
            before: "before".to_string(),
        };

        assert_eq!(event.revision_range(), Some(("before", "after")));
        assert_eq!(event.head_ref(), Some("refs/heads/main"));
        assert_eq!(event.base_ref(), None);
        assert_eq!(event.name(), "push");
    }

    #[test]
    fn unsupported_event_has_no_revisions() {
        let event = EventSource::Unsupported {
            event_name: "workflow_dispatch".to_string(),
        };

        assert_eq!(event.revision_range(), None);
        assert_eq!(event.commit(), None);
        assert_eq!(event.name(), "workflow_dispatch");
    }
}
