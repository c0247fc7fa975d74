use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::errors::Result;

impl Repository {
    /// Move the current branch to an arbitrary commit, syncing the working
    /// tree to its snapshot.
    pub fn reset(&self, short_id: &str) -> Result<()> {
        let target_oid = self.resolve(short_id)?;
        let target_commit = self.database().get_commit(&target_oid)?;
        let current_commit = self.head_commit()?;

        Migration::new(self).safe_switch(&current_commit, &target_commit)?;

        let current_branch = self.refs().read_head()?;
        self.refs().set_branch(&current_branch, &target_oid)
    }
}
