//! Working directory operations
//!
//! The workspace is the user's files under the repository root, excluding the
//! control directory. Listing skips hidden entries (names starting with `.`)
//! and the compiled front-end binary itself.

use crate::errors::{GitliteError, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};

/// Working-tree names never reported by a scan.
const IGNORED_FILES: [&str; 2] = ["gitlite", "gitlite.exe"];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Plain files in the working-tree root, filtered by the scan rules.
    pub fn list_plain_files(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.path).map_err(GitliteError::io(format!(
            "unable to list working directory {}",
            self.path.display()
        )))?;

        let mut files = entries
            .flatten()
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().to_string();
                if name.starts_with('.') || IGNORED_FILES.contains(&name.as_str()) {
                    return None;
                }
                Some(name)
            })
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    pub fn exists(&self, file_name: &str) -> bool {
        self.file_path(file_name).is_file()
    }

    pub fn read_file(&self, file_name: &str) -> Result<Bytes> {
        let file_path = self.file_path(file_name);
        let content = std::fs::read(&file_path).map_err(GitliteError::io(format!(
            "unable to read file {}",
            file_path.display()
        )))?;
        Ok(Bytes::from(content))
    }

    /// Write content to a file, creating parent directories and truncating
    /// any previous content.
    pub fn write_file(&self, file_name: &str, content: &[u8]) -> Result<()> {
        let file_path = self.file_path(file_name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).map_err(GitliteError::io(format!(
                "unable to create directory {}",
                parent.display()
            )))?;
        }
        std::fs::write(&file_path, content).map_err(GitliteError::io(format!(
            "unable to write file {}",
            file_path.display()
        )))
    }

    /// Delete a file if present; deleting an absent file is not an error.
    pub fn delete_file(&self, file_name: &str) -> Result<()> {
        let file_path = self.file_path(file_name);
        if !file_path.is_file() {
            return Ok(());
        }
        std::fs::remove_file(&file_path).map_err(GitliteError::io(format!(
            "unable to delete file {}",
            file_path.display()
        )))
    }

    fn file_path(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }
}
