use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::{GitliteError, Result};

impl Repository {
    /// Record the staged changes as a new commit on the current branch.
    ///
    /// The new tree is the current commit's tree with the staged additions
    /// applied and the staged removals deleted. The object is written before
    /// the branch pointer moves, so a crash never leaves the pointer
    /// dangling.
    pub fn commit(&self, message: &str) -> Result<()> {
        if message.is_empty() {
            return Err(GitliteError::EmptyCommitMessage);
        }

        let mut staging = self.staging_mut();
        staging.reload()?;
        if staging.is_empty() {
            return Err(GitliteError::NothingStaged);
        }

        let head = self.head_commit()?;
        let mut tree = head.tree().clone();
        for (filename, blob_id) in staging.added() {
            tree.insert(filename.clone(), blob_id.clone());
        }
        for filename in staging.removed() {
            tree.remove(filename);
        }

        let commit = Commit::new(
            message.to_string(),
            chrono::Utc::now().timestamp(),
            vec![head.id().clone()],
            tree,
        );
        self.database().put_commit(&commit)?;

        let current_branch = self.refs().read_head()?;
        self.refs().set_branch(&current_branch, commit.id())?;

        staging.clear()
    }
}
