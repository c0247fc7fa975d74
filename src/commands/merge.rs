use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::history::split_point::SplitPointFinder;
use crate::artifacts::merge::classify::{classify, conflict_content, MergeAction};
use crate::artifacts::objects::commit::{Commit, Tree};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GitliteError, Result};
use bytes::Bytes;

impl Repository {
    /// Merge another branch into the current one.
    ///
    /// Ancestor relationships short-circuit: a given branch that is already
    /// an ancestor changes nothing, and a current branch that is an ancestor
    /// of the given one fast-forwards. Everything else goes through the
    /// three-way classification, conflicts are materialised as inline
    /// conflict blocks, and a merge commit with both parents is created
    /// either way.
    pub fn merge(&self, branch_name: &str) -> Result<()> {
        let given_oid = self
            .refs()
            .read_branch(branch_name)?
            .ok_or(GitliteError::BranchMissing)?;

        let current_branch = self.refs().read_head()?;
        if branch_name == current_branch {
            return Err(GitliteError::SelfMerge);
        }

        {
            let mut staging = self.staging_mut();
            staging.reload()?;
            if !staging.is_empty() {
                return Err(GitliteError::UncommittedChanges);
            }
        }

        let current_oid = self.head_commit_id()?;
        let finder =
            SplitPointFinder::new(|oid| Ok(self.database().get_commit(oid)?.parents().to_vec()));
        let split_oid = finder.find(Some(&current_oid), Some(&given_oid))?;

        if split_oid.as_ref() == Some(&given_oid) {
            return self.emit("Given branch is an ancestor of the current branch.");
        }

        let current_commit = self.database().get_commit(&current_oid)?;
        let given_commit = self.database().get_commit(&given_oid)?;

        if split_oid.as_ref() == Some(&current_oid) {
            Migration::new(self).safe_switch(&current_commit, &given_commit)?;
            self.refs().set_branch(&current_branch, &given_oid)?;
            return self.emit("Current branch fast-forwarded.");
        }

        let split_tree = match &split_oid {
            Some(oid) => self.database().get_commit(oid)?.tree().clone(),
            None => Tree::new(),
        };
        let plan = classify(&split_tree, current_commit.tree(), given_commit.tree());

        // untracked files the merge would touch abort it before any mutation
        for (filename, given_id) in given_commit.tree() {
            let unchanged = current_commit.blob_id(filename) == Some(given_id);
            if !unchanged
                && !current_commit.tracks(filename)
                && self.workspace().exists(filename)
            {
                return Err(GitliteError::UntrackedInTheWay);
            }
        }

        let mut merged_tree = current_commit.tree().clone();
        let mut conflict_occurred = false;
        {
            let mut staging = self.staging_mut();
            for (filename, action) in &plan {
                match action {
                    MergeAction::TakeGiven(blob_id) => {
                        let content = self.database().get_blob(blob_id)?;
                        self.workspace().write_file(filename, &content)?;
                        merged_tree.insert(filename.clone(), blob_id.clone());
                        staging.stage(filename, blob_id.clone());
                    }
                    MergeAction::Remove => {
                        self.workspace().delete_file(filename)?;
                        merged_tree.remove(filename);
                        staging.mark_removed(filename);
                    }
                    MergeAction::Conflict { current, given } => {
                        conflict_occurred = true;
                        let current_content = self.blob_or_empty(current)?;
                        let given_content = self.blob_or_empty(given)?;
                        let content = conflict_content(&current_content, &given_content);
                        self.workspace().write_file(filename, &content)?;
                        let blob_id = self.database().put_blob(Bytes::from(content))?;
                        merged_tree.insert(filename.clone(), blob_id.clone());
                        staging.stage(filename, blob_id);
                    }
                }
            }
            staging.save()?;
        }

        let merge_commit = Commit::new(
            format!("Merged {} into {}.", branch_name, current_branch),
            chrono::Utc::now().timestamp(),
            vec![current_oid, given_oid],
            merged_tree,
        );
        self.database().put_commit(&merge_commit)?;
        self.refs().set_branch(&current_branch, merge_commit.id())?;
        self.staging_mut().clear()?;

        if conflict_occurred {
            self.emit("Encountered a merge conflict.")?;
        }
        Ok(())
    }

    fn blob_or_empty(&self, blob_id: &Option<ObjectId>) -> Result<Bytes> {
        match blob_id {
            Some(id) => self.database().get_blob(id),
            None => Ok(Bytes::new()),
        }
    }
}
