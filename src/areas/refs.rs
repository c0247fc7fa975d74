//! Reference management
//!
//! Branch pointers live as one file per branch under `.gitlite/branches/`,
//! each holding a commit id. HEAD is a plain-text file holding the name of
//! the current branch. Tracking branches created by fetch contain a forward
//! slash (`origin/master`); the slash maps to a nested directory, so listing
//! walks the branches tree and joins path components back with `/`.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GitliteError, Result};
use derive_new::new;
use file_guard::Lock;
use std::collections::BTreeSet;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Refs {
    path: Box<Path>,
}

impl Refs {
    /// Name of the branch HEAD points at.
    pub fn read_head(&self) -> Result<String> {
        let head_path = self.head_path();
        if !head_path.is_file() {
            return Err(GitliteError::RepositoryMissing);
        }
        let head = std::fs::read_to_string(&head_path).map_err(GitliteError::io(format!(
            "failed to read HEAD file at {}",
            head_path.display()
        )))?;
        Ok(head.trim().to_string())
    }

    pub fn set_head(&self, branch_name: &str) -> Result<()> {
        self.write_ref_file(&self.head_path(), branch_name)
    }

    /// Commit id a branch points at, or `None` when the branch does not exist.
    pub fn read_branch(&self, branch_name: &str) -> Result<Option<ObjectId>> {
        let branch_path = self.branch_path(branch_name);
        if !branch_path.is_file() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&branch_path).map_err(GitliteError::io(format!(
            "failed to read branch file at {}",
            branch_path.display()
        )))?;
        Ok(Some(ObjectId::try_parse(content.trim().to_string())?))
    }

    /// Create or overwrite a branch pointer.
    pub fn set_branch(&self, branch_name: &str, oid: &ObjectId) -> Result<()> {
        self.write_ref_file(&self.branch_path(branch_name), oid.as_ref())
    }

    /// Delete a branch pointer file; the commits it pointed at stay.
    pub fn delete_branch(&self, branch_name: &str) -> Result<()> {
        let branch_path = self.branch_path(branch_name);
        std::fs::remove_file(&branch_path).map_err(GitliteError::io(format!(
            "failed to delete branch file at {}",
            branch_path.display()
        )))
    }

    /// Every branch name, with nested tracking branches rendered as
    /// `remote/branch`.
    pub fn list_branches(&self) -> Result<BTreeSet<String>> {
        let branches_path = self.branches_path();
        let mut branches = BTreeSet::new();

        for entry in WalkDir::new(&branches_path).into_iter().flatten() {
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&branches_path)
                .map_err(|_| {
                    GitliteError::CorruptObject(format!(
                        "branch file {} escapes the branches directory",
                        entry.path().display()
                    ))
                })?;
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            branches.insert(name);
        }

        Ok(branches)
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join("HEAD")
    }

    pub fn branches_path(&self) -> PathBuf {
        self.path.join("branches")
    }

    fn branch_path(&self, branch_name: &str) -> PathBuf {
        // a slash in the branch name nests naturally as a subdirectory
        branch_name
            .split('/')
            .fold(self.branches_path(), |path, part| path.join(part))
    }

    fn write_ref_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GitliteError::io(format!(
                "failed to create parent directories for ref file at {}",
                path.display()
            )))?;
        }

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(GitliteError::io(format!(
                "failed to open ref file at {}",
                path.display()
            )))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1).map_err(
            GitliteError::io(format!("failed to lock ref file at {}", path.display())),
        )?;
        lock.deref_mut()
            .write_all(content.as_bytes())
            .map_err(GitliteError::io(format!(
                "failed to write ref file at {}",
                path.display()
            )))?;

        Ok(())
    }
}
