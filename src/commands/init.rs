use crate::areas::repository::{Repository, BRANCHES_DIR, OBJECTS_DIR};
use crate::artifacts::objects::commit::Commit;
use crate::errors::{GitliteError, Result};

impl Repository {
    /// Create the control directory with a root commit and a `master` branch
    /// pointing at it.
    pub fn init(&self) -> Result<()> {
        if self.is_initialised() {
            return Err(GitliteError::RepositoryExists);
        }

        let gitlite_path = self.gitlite_path();
        for dir in [
            gitlite_path.clone(),
            gitlite_path.join(OBJECTS_DIR),
            gitlite_path.join(BRANCHES_DIR),
        ] {
            std::fs::create_dir_all(&dir).map_err(GitliteError::io(format!(
                "unable to create directory {}",
                dir.display()
            )))?;
        }

        let root = Commit::root();
        self.database().put_commit(&root)?;
        self.refs().set_branch("master", root.id())?;
        self.refs().set_head("master")?;
        self.staging_mut().clear()
    }
}
