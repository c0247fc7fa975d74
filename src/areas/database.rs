//! Content-addressed object database
//!
//! Blobs and commits live as plain files in a single flat directory, keyed by
//! their 40-hex digest. Blobs hold raw content bytes; commits hold their
//! canonical text form. Writes are idempotent: an object that already exists
//! under its digest is never rewritten. Readers enumerating the store ignore
//! filenames that are not 40-hex digests.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::{GitliteError, Result};
use bytes::Bytes;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store raw content; returns its digest. Idempotent.
    pub fn put_blob(&self, content: Bytes) -> Result<ObjectId> {
        let blob = Blob::new(content);
        self.write_object(blob.id(), blob.content())?;
        Ok(blob.id().clone())
    }

    /// Load raw blob content by digest.
    pub fn get_blob(&self, id: &ObjectId) -> Result<Bytes> {
        let object_path = self.object_path(id);
        if !object_path.is_file() {
            return Err(GitliteError::ObjectMissing(id.to_string()));
        }
        let content = std::fs::read(&object_path).map_err(GitliteError::io(format!(
            "unable to read object file {}",
            object_path.display()
        )))?;
        Ok(Bytes::from(content))
    }

    /// Store a commit under its id in canonical text form. Idempotent.
    pub fn put_commit(&self, commit: &Commit) -> Result<()> {
        self.write_object(commit.id(), &commit.serialize())
    }

    /// Load and parse a commit by digest.
    pub fn get_commit(&self, id: &ObjectId) -> Result<Commit> {
        let content = self.get_blob(id)?;
        Commit::deserialize(&content)
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.object_path(id).is_file()
    }

    /// Enumerate every object id in the store. Non-digest filenames and
    /// nested directories are skipped.
    pub fn list_object_ids(&self) -> Result<Vec<ObjectId>> {
        let entries = std::fs::read_dir(&self.path).map_err(GitliteError::io(format!(
            "unable to list object directory {}",
            self.path.display()
        )))?;

        let mut ids = entries
            .flatten()
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().to_string();
                if name.len() != OBJECT_ID_LENGTH {
                    return None;
                }
                ObjectId::try_parse(name).ok()
            })
            .collect::<Vec<_>>();
        ids.sort();

        Ok(ids)
    }

    fn object_path(&self, id: &ObjectId) -> PathBuf {
        self.path.join(id.as_ref())
    }

    fn write_object(&self, id: &ObjectId, content: &[u8]) -> Result<()> {
        let object_path = self.object_path(id);
        if object_path.exists() {
            return Ok(());
        }

        std::fs::create_dir_all(&self.path).map_err(GitliteError::io(format!(
            "unable to create object directory {}",
            self.path.display()
        )))?;

        // write through a temp file, then rename, so a crash never leaves a
        // half-written object under its digest
        let temp_path = self.path.join(format!("tmp-obj-{}", std::process::id()));
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(GitliteError::io(format!(
                "unable to open object file {}",
                temp_path.display()
            )))?;
        file.write_all(content).map_err(GitliteError::io(format!(
            "unable to write object file {}",
            temp_path.display()
        )))?;
        drop(file);

        std::fs::rename(&temp_path, &object_path).map_err(GitliteError::io(format!(
            "unable to rename object file to {}",
            object_path.display()
        )))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;

    fn database() -> (TempDir, Database) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let database = Database::new(dir.path().join("objects").into_boxed_path());
        (dir, database)
    }

    #[test]
    fn blob_round_trips() {
        let (_dir, database) = database();
        let id = database.put_blob(Bytes::from_static(b"hello\n")).unwrap();
        assert_eq!(id.as_ref(), "f572d396fae9206628714fb2ce00f72e94f2258f");
        assert_eq!(database.get_blob(&id).unwrap(), Bytes::from_static(b"hello\n"));
    }

    #[test]
    fn put_blob_is_idempotent() {
        let (_dir, database) = database();
        let first = database.put_blob(Bytes::from_static(b"wug")).unwrap();
        let second = database.put_blob(Bytes::from_static(b"wug")).unwrap();
        assert_eq!(first, second);
        assert_eq!(database.list_object_ids().unwrap().len(), 1);
    }

    #[test]
    fn commit_round_trips() {
        let (_dir, database) = database();
        let commit = Commit::root();
        database.put_commit(&commit).unwrap();
        let loaded = database.get_commit(commit.id()).unwrap();
        assert_eq!(loaded, commit);
        assert_eq!(loaded.serialize(), commit.serialize());
    }

    #[test]
    fn missing_object_is_reported() {
        let (_dir, database) = database();
        database.put_blob(Bytes::from_static(b"seed")).unwrap();
        let absent = ObjectId::from_content(b"never stored");
        assert!(matches!(
            database.get_blob(&absent),
            Err(GitliteError::ObjectMissing(_))
        ));
        assert!(matches!(
            database.get_commit(&absent),
            Err(GitliteError::ObjectMissing(_))
        ));
    }

    #[test]
    fn blob_content_is_not_a_commit() {
        let (_dir, database) = database();
        let id = database.put_blob(Bytes::from_static(b"just text\n")).unwrap();
        assert!(matches!(
            database.get_commit(&id),
            Err(GitliteError::CorruptObject(_))
        ));
    }

    #[test]
    fn listing_skips_non_digest_filenames() {
        let (_dir, database) = database();
        database.put_blob(Bytes::from_static(b"content")).unwrap();
        std::fs::write(database.objects_path().join("README"), b"not an object").unwrap();
        std::fs::write(database.objects_path().join("zz".repeat(20)), b"bad hex").unwrap();
        assert_eq!(database.list_object_ids().unwrap().len(), 1);
    }
}
