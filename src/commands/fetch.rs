use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::remote::RemoteRepository;
use crate::errors::{GitliteError, Result};
use std::collections::{HashSet, VecDeque};

impl Repository {
    /// Replicate a remote branch's history into the local object store and
    /// point the tracking branch `<remote>/<branch>` at its head.
    ///
    /// The walk from the remote head follows *every* parent so merge
    /// histories replicate faithfully, and stops descending at commits that
    /// already exist locally (their ancestors are local by invariant).
    pub fn fetch(&self, remote_name: &str, branch_name: &str) -> Result<()> {
        let remote_path = self.remote_registry().resolve(remote_name)?;
        let remote = RemoteRepository::open(&remote_path)?;

        let remote_head = remote
            .refs()
            .read_branch(branch_name)?
            .ok_or(GitliteError::NoSuchRemoteBranch)?;

        let mut missing = Vec::new();
        let mut visited = HashSet::<ObjectId>::new();
        let mut queue = VecDeque::from([remote_head.clone()]);
        while let Some(oid) = queue.pop_front() {
            if !visited.insert(oid.clone()) {
                continue;
            }
            if self.database().contains(&oid) {
                continue;
            }
            let commit = remote.database().get_commit(&oid)?;
            for parent in commit.parents() {
                queue.push_back(parent.clone());
            }
            missing.push(commit);
        }

        // copy oldest first so the local store never holds a commit whose
        // ancestry is absent
        for commit in missing.iter().rev() {
            for blob_id in commit.tree().values() {
                if !self.database().contains(blob_id) {
                    let content = remote.database().get_blob(blob_id)?;
                    self.database().put_blob(content)?;
                }
            }
            self.database().put_commit(commit)?;
        }

        let tracking_branch = format!("{}/{}", remote_name, branch_name);
        self.refs().set_branch(&tracking_branch, &remote_head)
    }

    /// Fetch a remote branch, then merge its tracking branch.
    pub fn pull(&self, remote_name: &str, branch_name: &str) -> Result<()> {
        self.fetch(remote_name, branch_name)?;
        self.merge(&format!("{}/{}", remote_name, branch_name))
    }
}
