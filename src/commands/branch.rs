use crate::areas::repository::Repository;
use crate::errors::{GitliteError, Result};

impl Repository {
    /// Create a branch pointing at the current commit. HEAD stays put.
    pub fn branch(&self, branch_name: &str) -> Result<()> {
        if self.refs().read_branch(branch_name)?.is_some() {
            return Err(GitliteError::BranchExists);
        }
        let head = self.head_commit_id()?;
        self.refs().set_branch(branch_name, &head)
    }

    /// Delete a branch pointer. The commits it pointed at are kept.
    pub fn rm_branch(&self, branch_name: &str) -> Result<()> {
        if self.refs().read_branch(branch_name)?.is_none() {
            return Err(GitliteError::BranchMissing);
        }
        if branch_name == self.refs().read_head()? {
            return Err(GitliteError::CurrentBranchDelete);
        }
        self.refs().delete_branch(branch_name)
    }
}
