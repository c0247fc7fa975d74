use crate::areas::repository::Repository;
use crate::artifacts::history::log::{render_log_entry, FirstParentLog};
use crate::errors::Result;

impl Repository {
    /// Print the first-parent history of the current branch, newest first.
    pub fn log(&self) -> Result<()> {
        let head = self.head_commit_id()?;
        for commit in FirstParentLog::new(self.database(), head) {
            self.emit_raw(&render_log_entry(&commit?))?;
        }
        Ok(())
    }

    /// Print every commit in the object store, in no particular order.
    /// Objects that do not parse as commits are skipped.
    pub fn global_log(&self) -> Result<()> {
        for oid in self.database().list_object_ids()? {
            if let Ok(commit) = self.database().get_commit(&oid) {
                self.emit_raw(&render_log_entry(&commit))?;
            }
        }
        Ok(())
    }
}
