use std::path::PathBuf;

use crate::{FileChange, FileStatus, GitError, Result};

use super::Repository;

impl Repository {
    /// Files that differ between the trees of `base` and `head`, in diff order.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either revision cannot be resolved and
    /// [`GitError::UnsupportedFileStatus`] for deltas other than additions,
    /// modifications, removals and renames.
    pub fn changed_files(&self, base: &str, head: &str) -> Result<Vec<FileChange>> {
        let base_tree = self.resolve_commit(base)?.tree()?;
        let head_tree = self.resolve_commit(head)?.tree()?;

        self.diff_trees(Some(&base_tree), &head_tree)
    }

    /// Files touched by the single commit `head`.
    ///
    /// A root commit is compared against the empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if `head` cannot be resolved and
    /// [`GitError::UnsupportedFileStatus`] for unsupported deltas.
    pub fn commit_files(&self, head: &str) -> Result<Vec<FileChange>> {
        let commit = self.resolve_commit(head)?;

        let parent_tree = if commit.parent_count() > 0 {
            Some(commit.parent(0)?.tree()?)
        } else {
            None
        };

        self.diff_trees(parent_tree.as_ref(), &commit.tree()?)
    }

    fn diff_trees(
        &self,
        base: Option<&git2::Tree<'_>>,
        head: &git2::Tree<'_>,
    ) -> Result<Vec<FileChange>> {
        let mut diff = self.inner.diff_tree_to_tree(base, Some(head), None)?;

        let mut find_opts = git2::DiffFindOptions::new();
        find_opts.renames(true);
        diff.find_similar(Some(&mut find_opts))?;

        diff.deltas().map(|delta| to_file_change(&delta)).collect()
    }

    fn resolve_commit(&self, refspec: &str) -> Result<git2::Commit<'_>> {
        let obj = self
            .inner
            .revparse_single(refspec)
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })?;

        obj.peel_to_commit().map_err(|_| GitError::RefNotFound {
            refspec: refspec.to_string(),
        })
    }
}

fn to_file_change(delta: &git2::DiffDelta<'_>) -> Result<FileChange> {
    let path = delta
        .new_file()
        .path()
        .or_else(|| delta.old_file().path())
        .map(PathBuf::from)
        .ok_or(GitError::MissingDeltaPath)?;

    let status = match delta.status() {
        git2::Delta::Added => FileStatus::Added,
        git2::Delta::Modified => FileStatus::Modified,
        git2::Delta::Deleted => FileStatus::Removed,
        git2::Delta::Renamed => FileStatus::Renamed,
        other => {
            return Err(GitError::UnsupportedFileStatus {
                path,
                status: format!("{other:?}").to_lowercase(),
            });
        }
    };

    let change = FileChange::new(path, status);

    match delta.old_file().path() {
        Some(old_path) if status == FileStatus::Renamed => {
            Ok(change.with_old_path(old_path.to_path_buf()))
        }
        _ => Ok(change),
    }
}
