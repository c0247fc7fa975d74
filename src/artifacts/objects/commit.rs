//! Commit object
//!
//! A commit records a snapshot of the working tree as a map from filename to
//! blob id, together with its message, timestamp, and parent commits.
//!
//! ## Format
//!
//! On disk, exactly five lines in this order:
//!
//! ```text
//! Message:<message>
//! Time:<seconds-since-epoch>
//! Parents:<id>,<id>
//! Merge:<free-form>
//! Blobs:<filename>:<blob-id>,<filename>:<blob-id>
//! ```
//!
//! The `Parents` and `Blobs` lists may be empty. The `Blobs` list iterates in
//! ascending filename order; the commit id is the SHA-1 over message,
//! timestamp, every parent id, and every `(filename, blob-id)` pair in that
//! same order, so serialisation and id computation stay in lockstep.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GitliteError, Result};
use bytes::Bytes;
use std::collections::BTreeMap;

/// Map from working-tree-relative filename to blob id.
pub type Tree = BTreeMap<String, ObjectId>;

/// Message of the root commit created by `init`.
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    message: String,
    timestamp: i64,
    parents: Vec<ObjectId>,
    tree: Tree,
    merge_info: String,
    id: ObjectId,
}

impl Commit {
    /// Create a commit, computing its id from the other fields.
    pub fn new(message: String, timestamp: i64, parents: Vec<ObjectId>, tree: Tree) -> Self {
        let id = Self::compute_id(&message, timestamp, &parents, &tree);
        Commit {
            message,
            timestamp,
            parents,
            tree,
            merge_info: String::new(),
            id,
        }
    }

    /// The unique zero-parent commit every repository starts from.
    pub fn root() -> Self {
        Self::new(ROOT_COMMIT_MESSAGE.to_string(), 0, Vec::new(), Tree::new())
    }

    fn from_parts(
        message: String,
        timestamp: i64,
        parents: Vec<ObjectId>,
        tree: Tree,
        merge_info: String,
    ) -> Self {
        let id = Self::compute_id(&message, timestamp, &parents, &tree);
        Commit {
            message,
            timestamp,
            parents,
            tree,
            merge_info,
            id,
        }
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn first_parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() == 2
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Blob id of a file in this commit's tree, if tracked.
    pub fn blob_id(&self, filename: &str) -> Option<&ObjectId> {
        self.tree.get(filename)
    }

    pub fn tracks(&self, filename: &str) -> bool {
        self.tree.contains_key(filename)
    }

    /// Timestamp rendered for the `Date:` line of log output.
    pub fn formatted_timestamp(&self) -> String {
        chrono::DateTime::<chrono::Utc>::from_timestamp(self.timestamp, 0)
            .map(|dt| dt.format("%a %b %-d %H:%M:%S %Y %z").to_string())
            .unwrap_or_else(|| self.timestamp.to_string())
    }

    /// Serialise to the canonical five-line text form.
    pub fn serialize(&self) -> Bytes {
        let parents = self
            .parents
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        let blobs = self
            .tree
            .iter()
            .map(|(name, id)| format!("{}:{}", name, id))
            .collect::<Vec<_>>()
            .join(",");

        Bytes::from(format!(
            "Message:{}\nTime:{}\nParents:{}\nMerge:{}\nBlobs:{}\n",
            self.message, self.timestamp, parents, self.merge_info, blobs
        ))
    }

    /// Parse the canonical text form. The five keyed lines must appear in
    /// order; anything else is a corrupt object.
    pub fn deserialize(content: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(content)
            .map_err(|_| GitliteError::CorruptObject("commit is not valid UTF-8".to_string()))?;
        let mut lines = text.lines();

        let message = Self::keyed_line(lines.next(), "Message:")?.to_string();

        let timestamp = Self::keyed_line(lines.next(), "Time:")?;
        let timestamp = timestamp.parse::<i64>().map_err(|_| {
            GitliteError::CorruptObject(format!("invalid commit timestamp {:?}", timestamp))
        })?;

        let parents_value = Self::keyed_line(lines.next(), "Parents:")?;
        let parents = parents_value
            .split(',')
            .filter(|part| !part.is_empty())
            .map(|part| ObjectId::try_parse(part.to_string()))
            .collect::<Result<Vec<_>>>()?;

        let merge_info = Self::keyed_line(lines.next(), "Merge:")?.to_string();

        let blobs_value = Self::keyed_line(lines.next(), "Blobs:")?;
        let mut tree = Tree::new();
        for pair in blobs_value.split(',').filter(|part| !part.is_empty()) {
            let (name, id) = pair.split_once(':').ok_or_else(|| {
                GitliteError::CorruptObject(format!("invalid blob entry {:?}", pair))
            })?;
            tree.insert(name.to_string(), ObjectId::try_parse(id.to_string())?);
        }

        Ok(Self::from_parts(
            message, timestamp, parents, tree, merge_info,
        ))
    }

    fn keyed_line<'l>(line: Option<&'l str>, key: &str) -> Result<&'l str> {
        line.and_then(|l| l.strip_prefix(key))
            .ok_or_else(|| GitliteError::CorruptObject(format!("missing {} line", key)))
    }

    fn compute_id(message: &str, timestamp: i64, parents: &[ObjectId], tree: &Tree) -> ObjectId {
        let mut payload = String::new();
        payload.push_str(message);
        payload.push_str(&timestamp.to_string());
        for parent in parents {
            payload.push_str(parent.as_ref());
        }
        for (name, id) in tree {
            payload.push_str(name);
            payload.push_str(id.as_ref());
        }
        ObjectId::from_content(payload.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blob_oid(seed: &str) -> ObjectId {
        ObjectId::from_content(seed.as_bytes())
    }

    #[test]
    fn root_commit_is_deterministic() {
        let a = Commit::root();
        let b = Commit::root();
        assert_eq!(a.id(), b.id());
        assert_eq!(a.message(), "initial commit");
        assert_eq!(a.timestamp(), 0);
        assert!(a.parents().is_empty());
        assert!(a.tree().is_empty());
    }

    #[test]
    fn id_is_independent_of_insertion_order() {
        let mut forward = Tree::new();
        forward.insert("a.txt".to_string(), blob_oid("a"));
        forward.insert("b.txt".to_string(), blob_oid("b"));

        let mut backward = Tree::new();
        backward.insert("b.txt".to_string(), blob_oid("b"));
        backward.insert("a.txt".to_string(), blob_oid("a"));

        let first = Commit::new("same".to_string(), 42, vec![], forward);
        let second = Commit::new("same".to_string(), 42, vec![], backward);
        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn id_changes_with_any_field() {
        let base = Commit::new("msg".to_string(), 7, vec![], Tree::new());
        let other_message = Commit::new("other".to_string(), 7, vec![], Tree::new());
        let other_time = Commit::new("msg".to_string(), 8, vec![], Tree::new());
        let with_parent = Commit::new("msg".to_string(), 7, vec![blob_oid("p")], Tree::new());
        assert_ne!(base.id(), other_message.id());
        assert_ne!(base.id(), other_time.id());
        assert_ne!(base.id(), with_parent.id());
    }

    #[test]
    fn serialization_round_trips_byte_for_byte() {
        let mut tree = Tree::new();
        tree.insert("b.txt".to_string(), blob_oid("b"));
        tree.insert("a.txt".to_string(), blob_oid("a"));
        let commit = Commit::new(
            "add two files".to_string(),
            1_700_000_000,
            vec![Commit::root().id().clone()],
            tree,
        );

        let bytes = commit.serialize();
        let parsed = Commit::deserialize(&bytes).unwrap();
        assert_eq!(parsed, commit);
        assert_eq!(parsed.serialize(), bytes);
    }

    #[test]
    fn merge_commit_round_trips_both_parents() {
        let commit = Commit::new(
            "Merged feat into master.".to_string(),
            1_700_000_001,
            vec![blob_oid("p1"), blob_oid("p2")],
            Tree::new(),
        );
        let parsed = Commit::deserialize(&commit.serialize()).unwrap();
        assert!(parsed.is_merge());
        assert_eq!(parsed.parents(), commit.parents());
        assert_eq!(parsed.id(), commit.id());
    }

    #[test]
    fn deserialize_rejects_blob_content() {
        assert!(Commit::deserialize(b"hello\n").is_err());
        assert!(Commit::deserialize(b"").is_err());
        assert!(Commit::deserialize(b"Message:x\nTime:notanumber\nParents:\nMerge:\nBlobs:\n").is_err());
    }

    #[test]
    fn root_date_is_epoch() {
        assert_eq!(
            Commit::root().formatted_timestamp(),
            "Thu Jan 1 00:00:00 1970 +0000"
        );
    }
}
