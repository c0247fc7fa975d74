use crate::areas::repository::Repository;
use crate::artifacts::remote::RemoteRepository;
use crate::errors::{GitliteError, Result};

impl Repository {
    /// Append the current branch's history to a remote branch.
    ///
    /// Only fast-forwards are allowed: the remote head must appear in the
    /// local first-parent history. Commits between the local head and the
    /// remote head are copied oldest first, each with the blobs it
    /// references, skipping objects the remote already has. The remote
    /// branch pointer moves only after every object has been copied.
    pub fn push(&self, remote_name: &str, branch_name: &str) -> Result<()> {
        let remote_path = self.remote_registry().resolve(remote_name)?;
        let remote = RemoteRepository::open(&remote_path)?;

        let local_head = self.head_commit_id()?;
        let remote_head = remote.refs().read_branch(branch_name)?;

        let mut commits_to_copy = Vec::new();
        let mut found_remote_head = remote_head.is_none();
        let mut cursor = Some(local_head.clone());
        while let Some(oid) = cursor {
            if remote_head.as_ref() == Some(&oid) {
                found_remote_head = true;
                break;
            }
            let commit = self.database().get_commit(&oid)?;
            cursor = commit.first_parent().cloned();
            commits_to_copy.push(commit);
        }
        if !found_remote_head {
            return Err(GitliteError::NonFastForward);
        }

        for commit in commits_to_copy.iter().rev() {
            if remote.database().contains(commit.id()) {
                continue;
            }
            for blob_id in commit.tree().values() {
                if !remote.database().contains(blob_id) {
                    let content = self.database().get_blob(blob_id)?;
                    remote.database().put_blob(content)?;
                }
            }
            remote.database().put_commit(commit)?;
        }

        remote.refs().set_branch(branch_name, &local_head)
    }
}
