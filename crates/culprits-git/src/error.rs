use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("failed to resolve reference '{refspec}'")]
    RefNotFound { refspec: String },

    #[error("unsupported file status '{status}' for '{path}', expected added, modified, removed or renamed")]
    UnsupportedFileStatus { path: PathBuf, status: String },

    #[error("diff delta has no file path")]
    MissingDeltaPath,
}
