use std::path::Path;

use culprits_git::FileChange;

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or diff fails.
    fn changed_files(&self, project_root: &Path, base: &str, head: &str)
    -> Result<Vec<FileChange>>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or `head` cannot be resolved.
    fn commit_files(&self, project_root: &Path, head: &str) -> Result<Vec<FileChange>>;
}
