mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::{FileChange, FileStatus};

use std::path::Path;

pub type Result<T> = std::result::Result<T, GitError>;

/// Revision id that pushes report as `before` when a branch is created.
pub const NULL_SHA: &str = "0000000000000000000000000000000000000000";

/// Returns true when `sha` is the all-zero sentinel.
#[must_use]
pub fn is_null_sha(sha: &str) -> bool {
    sha == NULL_SHA
}

/// # Errors
///
/// Returns an error if the path is not a git repository or either revision cannot be resolved.
pub fn changed_files(path: &Path, base: &str, head: &str) -> Result<Vec<FileChange>> {
    Repository::open(path)?.changed_files(base, head)
}
