use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::errors::{GitliteError, Result};

impl Repository {
    /// Switch the working tree and HEAD to another branch.
    pub fn checkout_branch(&self, branch_name: &str) -> Result<()> {
        let target_oid = self
            .refs()
            .read_branch(branch_name)?
            .ok_or(GitliteError::NoSuchBranch)?;

        let current_branch = self.refs().read_head()?;
        if branch_name == current_branch {
            return Err(GitliteError::CurrentBranchCheckout);
        }

        let current_commit = self.head_commit()?;
        let target_commit = self.database().get_commit(&target_oid)?;
        Migration::new(self).safe_switch(&current_commit, &target_commit)?;

        self.refs().set_head(branch_name)
    }

    /// Restore a single file from the current commit.
    pub fn checkout_file_from_head(&self, filename: &str) -> Result<()> {
        let head = self.head_commit()?;
        Migration::new(self).checkout_file(&head, filename)
    }

    /// Restore a single file from the commit a short id resolves to.
    pub fn checkout_file_in_commit(&self, short_id: &str, filename: &str) -> Result<()> {
        let oid = self.resolve(short_id)?;
        let commit = self.database().get_commit(&oid)?;
        Migration::new(self).checkout_file(&commit, filename)
    }
}
