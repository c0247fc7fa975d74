//! Working-tree migration
//!
//! Reconciles the working directory with a target commit's tree. The
//! untracked-file precheck runs before any deletion or overwrite, so a
//! refused switch leaves the working tree, the staging area, and every
//! reference untouched.

use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::inspector::Inspector;
use crate::errors::{GitliteError, Result};

pub struct Migration<'r> {
    repository: &'r Repository,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository) -> Self {
        Self { repository }
    }

    /// Replace the working tree of `current` with the tree of `target`.
    ///
    /// Untracked files that `target` would overwrite abort the switch before
    /// any mutation. Files tracked only by `current` are deleted, every file
    /// of `target` is written out, and the staging area is cleared.
    pub fn safe_switch(&self, current: &Commit, target: &Commit) -> Result<()> {
        let untracked = Inspector::new(self.repository).untracked_files(current)?;
        for name in &untracked {
            if target.tracks(name) {
                return Err(GitliteError::UntrackedInTheWay);
            }
        }

        for name in current.tree().keys() {
            if !target.tracks(name) {
                self.repository.workspace().delete_file(name)?;
            }
        }

        for (name, blob_id) in target.tree() {
            let content = self.repository.database().get_blob(blob_id)?;
            self.repository.workspace().write_file(name, &content)?;
        }

        self.repository.staging_mut().clear()
    }

    /// Overwrite a single working-tree file with its version in a commit.
    /// The staging area is not touched.
    pub fn checkout_file(&self, commit: &Commit, filename: &str) -> Result<()> {
        let blob_id = commit
            .blob_id(filename)
            .ok_or(GitliteError::FileNotInCommit)?;
        let content = self.repository.database().get_blob(blob_id)?;
        self.repository.workspace().write_file(filename, &content)
    }
}
