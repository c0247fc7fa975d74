use crate::areas::repository::{Repository, REMOTES_FILE};
use crate::artifacts::remote::RemoteRegistry;
use crate::errors::Result;

impl Repository {
    pub(crate) fn remote_registry(&self) -> RemoteRegistry {
        RemoteRegistry::new(self.gitlite_path().join(REMOTES_FILE).into_boxed_path())
    }

    /// Register a remote name for a repository path.
    pub fn add_remote(&self, remote_name: &str, remote_path: &str) -> Result<()> {
        self.remote_registry().add(remote_name, remote_path)
    }

    /// Forget a remote. Objects already fetched from it are kept.
    pub fn rm_remote(&self, remote_name: &str) -> Result<()> {
        self.remote_registry().remove(remote_name)
    }
}
