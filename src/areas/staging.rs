//! Staging area
//!
//! Tracks the pending additions (filename to blob id) and pending removals
//! (filename) that the next commit will apply on top of the current commit's
//! tree. Both records persist as line-based text files so they survive
//! between invocations.
//!
//! A file is never listed as both added and removed: staging a file clears
//! any removal mark and vice versa.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{GitliteError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

#[derive(Debug)]
pub struct StagingArea {
    staging_path: Box<Path>,
    removed_path: Box<Path>,
    added: BTreeMap<String, ObjectId>,
    removed: BTreeSet<String>,
}

impl StagingArea {
    /// Load the staging area from disk. Missing files mean empty records.
    pub fn load(staging_path: Box<Path>, removed_path: Box<Path>) -> Result<Self> {
        let mut staging = StagingArea {
            staging_path,
            removed_path,
            added: BTreeMap::new(),
            removed: BTreeSet::new(),
        };
        staging.reload()?;
        Ok(staging)
    }

    pub fn stage(&mut self, filename: &str, blob_id: ObjectId) {
        self.removed.remove(filename);
        self.added.insert(filename.to_string(), blob_id);
    }

    pub fn unstage(&mut self, filename: &str) {
        self.added.remove(filename);
    }

    pub fn mark_removed(&mut self, filename: &str) {
        self.added.remove(filename);
        self.removed.insert(filename.to_string());
    }

    pub fn unmark_removed(&mut self, filename: &str) {
        self.removed.remove(filename);
    }

    pub fn is_staged(&self, filename: &str) -> bool {
        self.added.contains_key(filename)
    }

    pub fn is_removed(&self, filename: &str) -> bool {
        self.removed.contains(filename)
    }

    pub fn staged_id(&self, filename: &str) -> Option<&ObjectId> {
        self.added.get(filename)
    }

    pub fn added(&self) -> &BTreeMap<String, ObjectId> {
        &self.added
    }

    pub fn removed(&self) -> &BTreeSet<String> {
        &self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Persist both records.
    pub fn save(&self) -> Result<()> {
        self.write_text(&self.staging_path, &Self::render_added(&self.added))?;
        self.write_text(&self.removed_path, &Self::render_removed(&self.removed))
    }

    /// Replace the in-memory state with whatever is on disk.
    pub fn reload(&mut self) -> Result<()> {
        self.added = Self::parse_added(&self.read_text(&self.staging_path)?);
        self.removed = Self::parse_removed(&self.read_text(&self.removed_path)?);
        Ok(())
    }

    /// Drop every entry and persist the empty state.
    pub fn clear(&mut self) -> Result<()> {
        self.added.clear();
        self.removed.clear();
        self.save()
    }

    /// Parse the added map from its `filename:blob-id` line format. Blank
    /// lines and entries with an empty filename or an invalid id are dropped.
    fn parse_added(content: &str) -> BTreeMap<String, ObjectId> {
        content
            .lines()
            .map(|line| line.trim_end_matches(['\r', '\n']))
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| {
                let (name, id) = line.split_once(':')?;
                if name.is_empty() {
                    return None;
                }
                Some((name.to_string(), ObjectId::try_parse(id.to_string()).ok()?))
            })
            .collect()
    }

    /// Parse the removed set from its one-filename-per-line format.
    fn parse_removed(content: &str) -> BTreeSet<String> {
        content
            .lines()
            .map(|line| line.trim_end_matches(['\r', '\n']))
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect()
    }

    fn render_added(added: &BTreeMap<String, ObjectId>) -> String {
        added
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, id)| format!("{}:{}\n", name, id))
            .collect()
    }

    fn render_removed(removed: &BTreeSet<String>) -> String {
        removed
            .iter()
            .filter(|name| !name.is_empty())
            .map(|name| format!("{}\n", name))
            .collect()
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Ok(String::new());
        }
        std::fs::read_to_string(path).map_err(GitliteError::io(format!(
            "unable to read staging file {}",
            path.display()
        )))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GitliteError::io(format!(
                "unable to create directory {}",
                parent.display()
            )))?;
        }
        std::fs::write(path, content).map_err(GitliteError::io(format!(
            "unable to write staging file {}",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use proptest::prelude::*;

    fn staging_in(dir: &TempDir) -> StagingArea {
        StagingArea::load(
            dir.path().join("staging").into_boxed_path(),
            dir.path().join("removed").into_boxed_path(),
        )
        .expect("failed to load staging area")
    }

    fn oid(seed: &str) -> ObjectId {
        ObjectId::from_content(seed.as_bytes())
    }

    #[test]
    fn starts_empty_without_files() {
        let dir = TempDir::new().unwrap();
        let staging = staging_in(&dir);
        assert!(staging.is_empty());
    }

    #[test]
    fn staging_clears_removal_mark_and_vice_versa() {
        let dir = TempDir::new().unwrap();
        let mut staging = staging_in(&dir);

        staging.mark_removed("a.txt");
        staging.stage("a.txt", oid("a"));
        assert!(staging.is_staged("a.txt"));
        assert!(!staging.is_removed("a.txt"));

        staging.mark_removed("a.txt");
        assert!(!staging.is_staged("a.txt"));
        assert!(staging.is_removed("a.txt"));
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut staging = staging_in(&dir);
        staging.stage("a.txt", oid("a"));
        staging.stage("b.txt", oid("b"));
        staging.mark_removed("gone.txt");
        staging.save().unwrap();

        let reloaded = staging_in(&dir);
        assert_eq!(reloaded.added(), staging.added());
        assert_eq!(reloaded.removed(), staging.removed());
    }

    #[test]
    fn clear_persists_the_empty_state() {
        let dir = TempDir::new().unwrap();
        let mut staging = staging_in(&dir);
        staging.stage("a.txt", oid("a"));
        staging.save().unwrap();
        staging.clear().unwrap();

        let reloaded = staging_in(&dir);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn load_skips_blank_and_malformed_lines() {
        let added = StagingArea::parse_added("a.txt:f572d396fae9206628714fb2ce00f72e94f2258f\n\n   \nno-colon-line\n:f572d396fae9206628714fb2ce00f72e94f2258f\nb.txt:short\n");
        assert_eq!(added.len(), 1);
        assert!(added.contains_key("a.txt"));

        let removed = StagingArea::parse_removed("gone.txt\n\n  \nother.txt\r\n");
        assert_eq!(removed.len(), 2);
        assert!(removed.contains("gone.txt"));
        assert!(removed.contains("other.txt"));
    }

    proptest! {
        #[test]
        fn added_serialisation_round_trips(
            entries in proptest::collection::btree_map("[a-z]{1,12}\\.txt", "[0-9a-f]{40}", 0..8)
        ) {
            let added = entries
                .iter()
                .map(|(name, id)| (name.clone(), ObjectId::try_parse(id.clone()).unwrap()))
                .collect::<BTreeMap<_, _>>();
            let parsed = StagingArea::parse_added(&StagingArea::render_added(&added));
            prop_assert_eq!(parsed, added);
        }

        #[test]
        fn removed_serialisation_round_trips(
            names in proptest::collection::btree_set("[a-z]{1,12}\\.txt", 0..8)
        ) {
            let parsed = StagingArea::parse_removed(&StagingArea::render_removed(&names));
            prop_assert_eq!(parsed, names);
        }
    }
}
