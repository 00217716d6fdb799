use std::path::Path;

use culprits_git::{FileChange, Repository};

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn changed_files(
        &self,
        project_root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Vec<FileChange>> {
        let repo = Repository::open(project_root)?;
        Ok(repo.changed_files(base, head)?)
    }

    fn commit_files(&self, project_root: &Path, head: &str) -> Result<Vec<FileChange>> {
        let repo = Repository::open(project_root)?;
        Ok(repo.commit_files(head)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OperationError;

    #[test]
    fn outside_a_repository_is_a_git_error() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;

        let result = Git2Provider::new().changed_files(dir.path(), "HEAD~1", "HEAD");

        assert!(matches!(
            result,
            Err(OperationError::Git(
                culprits_git::GitError::NotARepository { .. }
            ))
        ));
        Ok(())
    }
}
