//! Working-tree inspector
//!
//! Answers the questions the status report and the safety prechecks share:
//! which files are untracked, and which tracked or staged files have drifted
//! from their recorded content.

use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::ChangeKind;
use crate::errors::Result;
use std::collections::{BTreeMap, BTreeSet};

pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    pub fn new(repository: &'r Repository) -> Self {
        Self { repository }
    }

    /// Files present in the working tree that are neither tracked in
    /// `current` nor staged. These are the files `safe_switch` refuses to
    /// overwrite.
    pub fn untracked_files(&self, current: &Commit) -> Result<BTreeSet<String>> {
        let staging = self.repository.staging();
        Ok(self
            .repository
            .workspace()
            .list_plain_files()?
            .into_iter()
            .filter(|name| !current.tracks(name) && !staging.is_staged(name))
            .collect())
    }

    /// Tracked or staged files whose working-tree content no longer matches
    /// the recorded blob, plus tracked files that vanished without being
    /// marked for removal.
    pub fn modified_files(&self, current: &Commit) -> Result<BTreeMap<String, ChangeKind>> {
        let staging = self.repository.staging();
        let mut changes = BTreeMap::new();

        for (name, blob_id) in current.tree() {
            if self.repository.workspace().exists(name) {
                if self.working_blob_id(name)? != *blob_id && !staging.is_staged(name) {
                    changes.insert(name.clone(), ChangeKind::Modified);
                }
            } else if !staging.is_removed(name) {
                changes.insert(name.clone(), ChangeKind::Deleted);
            }
        }

        for (name, staged_id) in staging.added() {
            if self.repository.workspace().exists(name) {
                if self.working_blob_id(name)? != *staged_id {
                    changes.insert(name.clone(), ChangeKind::Modified);
                }
            } else {
                changes.insert(name.clone(), ChangeKind::Deleted);
            }
        }

        Ok(changes)
    }

    fn working_blob_id(&self, name: &str) -> Result<ObjectId> {
        let content = self.repository.workspace().read_file(name)?;
        Ok(ObjectId::from_content(&content))
    }
}
