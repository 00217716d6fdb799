use std::path::{Path, PathBuf};
use std::sync::Mutex;

use culprits_core::MigrationStatusReport;
use culprits_git::{FileChange, GitError};

use crate::Result;
use crate::traits::{GitProvider, ReportReader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    ChangedFiles { base: String, head: String },
    CommitFiles { head: String },
}

pub struct MockGitProvider {
    changed_files: Vec<FileChange>,
    commit_files: Vec<FileChange>,
    missing_ref: Option<String>,
    calls: Mutex<Vec<GitCall>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            changed_files: Vec::new(),
            commit_files: Vec::new(),
            missing_ref: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_changed_files(mut self, files: Vec<FileChange>) -> Self {
        self.changed_files = files;
        self
    }

    #[must_use]
    pub fn with_commit_files(mut self, files: Vec<FileChange>) -> Self {
        self.commit_files = files;
        self
    }

    /// Makes every lookup fail as if `refspec` could not be resolved.
    #[must_use]
    pub fn with_missing_ref(mut self, refspec: &str) -> Self {
        self.missing_ref = Some(refspec.to_string());
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    fn record(&self, call: GitCall) -> Result<()> {
        self.calls.lock().expect("lock poisoned").push(call);

        match &self.missing_ref {
            Some(refspec) => Err(GitError::RefNotFound {
                refspec: refspec.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn changed_files(
        &self,
        _project_root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Vec<FileChange>> {
        self.record(GitCall::ChangedFiles {
            base: base.to_string(),
            head: head.to_string(),
        })?;
        Ok(self.changed_files.clone())
    }

    fn commit_files(&self, _project_root: &Path, head: &str) -> Result<Vec<FileChange>> {
        self.record(GitCall::CommitFiles {
            head: head.to_string(),
        })?;
        Ok(self.commit_files.clone())
    }
}

pub struct MockReportReader {
    report: Option<MigrationStatusReport>,
    requested: Mutex<Vec<PathBuf>>,
}

impl MockReportReader {
    #[must_use]
    pub fn new(report: MigrationStatusReport) -> Self {
        Self {
            report: Some(report),
            requested: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn missing() -> Self {
        Self {
            report: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.requested.lock().expect("lock poisoned").clone()
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, path: &Path) -> Result<Option<MigrationStatusReport>> {
        self.requested
            .lock()
            .expect("lock poisoned")
            .push(path.to_path_buf());
        Ok(self.report.clone())
    }
}

/// # Panics
///
/// Panics if `value` does not describe a valid report.
#[must_use]
pub fn make_report(value: serde_json::Value) -> MigrationStatusReport {
    serde_json::from_value(value).expect("valid report fixture")
}
