//! Remotes
//!
//! A remote is a name bound to a filesystem path holding another repository's
//! control directory. The registry persists as one `name SPACE path` line per
//! remote. The sync protocol opens the remote's control directory with the
//! same database and refs types used locally, so push and fetch read and
//! write the remote with the exact on-disk format of the local repository.

use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::repository::{GITLITE_DIR, OBJECTS_DIR};
use crate::errors::{GitliteError, Result};
use derive_new::new;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct RemoteRegistry {
    path: Box<Path>,
}

impl RemoteRegistry {
    /// Load the registry; a missing file means no remotes.
    pub fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.is_file() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(GitliteError::io(format!(
            "unable to read remotes file {}",
            self.path.display()
        )))?;

        Ok(content
            .lines()
            .filter_map(|line| {
                let (name, path) = line.split_once(' ')?;
                if name.is_empty() || path.is_empty() {
                    return None;
                }
                Some((name.to_string(), path.to_string()))
            })
            .collect())
    }

    pub fn add(&self, name: &str, path: &str) -> Result<()> {
        let mut remotes = self.load()?;
        if remotes.contains_key(name) {
            return Err(GitliteError::RemoteExists);
        }
        remotes.insert(name.to_string(), path.to_string());
        self.save(&remotes)
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        let mut remotes = self.load()?;
        if remotes.remove(name).is_none() {
            return Err(GitliteError::NoSuchRemote);
        }
        self.save(&remotes)
    }

    /// Path registered under a remote name.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        self.load()?
            .remove(name)
            .map(PathBuf::from)
            .ok_or(GitliteError::NoSuchRemote)
    }

    fn save(&self, remotes: &BTreeMap<String, String>) -> Result<()> {
        let content = remotes
            .iter()
            .map(|(name, path)| format!("{} {}\n", name, path))
            .collect::<String>();
        std::fs::write(&self.path, content).map_err(GitliteError::io(format!(
            "unable to write remotes file {}",
            self.path.display()
        )))
    }
}

/// Object and reference access to another repository on the local filesystem.
pub struct RemoteRepository {
    database: Database,
    refs: Refs,
}

impl RemoteRepository {
    /// Open the control directory at (or inside) a remote path. The path may
    /// name the control directory itself or the working tree containing it.
    pub fn open(path: &Path) -> Result<Self> {
        let control_dir = if path.ends_with(GITLITE_DIR) {
            path.to_path_buf()
        } else {
            path.join(GITLITE_DIR)
        };
        if !control_dir.is_dir() {
            return Err(GitliteError::RemoteDirMissing);
        }

        Ok(RemoteRepository {
            database: Database::new(control_dir.join(OBJECTS_DIR).into_boxed_path()),
            refs: Refs::new(control_dir.into_boxed_path()),
        })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
