use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GitliteError, Result};

impl Repository {
    /// Stage a file for the next commit.
    ///
    /// A file marked for removal is resurrected by unmarking it. A file whose
    /// content matches the current commit is unstaged rather than staged, so
    /// reverting a change also reverts its staging entry.
    pub fn add(&self, filename: &str) -> Result<()> {
        let mut staging = self.staging_mut();

        if staging.is_removed(filename) {
            staging.unmark_removed(filename);
            return staging.save();
        }

        if !self.workspace().exists(filename) {
            return Err(GitliteError::FileMissing);
        }

        let content = self.workspace().read_file(filename)?;
        let blob_id = ObjectId::from_content(&content);

        let head = self.head_commit()?;
        if head.blob_id(filename) == Some(&blob_id) {
            if staging.is_staged(filename) {
                staging.unstage(filename);
                staging.save()?;
            }
            return Ok(());
        }

        self.database().put_blob(content)?;
        staging.stage(filename, blob_id);
        staging.save()
    }
}
