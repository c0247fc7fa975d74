use crate::areas::repository::Repository;
use crate::errors::{GitliteError, Result};

impl Repository {
    /// Unstage a staged file, or mark a tracked file for removal and delete
    /// it from the working tree.
    pub fn rm(&self, filename: &str) -> Result<()> {
        let mut staging = self.staging_mut();

        if staging.is_staged(filename) {
            staging.unstage(filename);
            return staging.save();
        }

        let head = self.head_commit()?;
        if head.tracks(filename) {
            staging.mark_removed(filename);
            staging.save()?;
            return self.workspace().delete_file(filename);
        }

        Err(GitliteError::NothingToRemove)
    }
}
