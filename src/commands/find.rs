use crate::areas::repository::Repository;
use crate::errors::{GitliteError, Result};

impl Repository {
    /// Print the id of every commit whose message equals `message` exactly.
    /// Objects that do not parse as commits are skipped.
    pub fn find(&self, message: &str) -> Result<()> {
        let mut found = false;
        for oid in self.database().list_object_ids()? {
            if let Ok(commit) = self.database().get_commit(&oid) {
                if commit.message() == message {
                    self.emit(commit.id().as_ref())?;
                    found = true;
                }
            }
        }

        if found {
            Ok(())
        } else {
            Err(GitliteError::NoSuchMessage)
        }
    }
}
