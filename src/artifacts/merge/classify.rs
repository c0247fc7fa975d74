//! Merge classification
//!
//! Classifies every file across the split, current, and given trees, and
//! plans the working-tree and staging mutations a merge must apply. The plan
//! is computed without touching the filesystem so the safety precheck can run
//! before any mutation.
//!
//! For a file with blob ids `s`, `a`, `b` in the split/current/given trees
//! (absent encoded as `None`):
//!
//! - `a == b`: both sides agree, keep the current version
//! - `s == a`: only the given side changed it, take `b` (or delete when `b`
//!   is absent)
//! - `s == b`: only the current side changed it, keep `a`
//! - anything else: conflict

use crate::artifacts::objects::commit::Tree;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};

/// Planned mutation for a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// Write the given side's blob into the working tree and stage it.
    TakeGiven(ObjectId),
    /// Delete the file from the working tree and mark it removed.
    Remove,
    /// Materialise an inline conflict block from both sides.
    Conflict {
        current: Option<ObjectId>,
        given: Option<ObjectId>,
    },
}

/// Per-file actions a three-way merge must apply; files the merge leaves
/// alone have no entry.
pub type MergePlan = BTreeMap<String, MergeAction>;

pub fn classify(split: &Tree, current: &Tree, given: &Tree) -> MergePlan {
    let mut filenames = BTreeSet::new();
    filenames.extend(split.keys());
    filenames.extend(current.keys());
    filenames.extend(given.keys());

    let mut plan = MergePlan::new();
    for filename in filenames {
        let s = split.get(filename);
        let a = current.get(filename);
        let b = given.get(filename);

        if a == b {
            continue;
        }
        if s == a {
            match b {
                Some(blob_id) => {
                    plan.insert(filename.clone(), MergeAction::TakeGiven(blob_id.clone()));
                }
                None => {
                    plan.insert(filename.clone(), MergeAction::Remove);
                }
            }
            continue;
        }
        if s == b {
            continue;
        }
        plan.insert(
            filename.clone(),
            MergeAction::Conflict {
                current: a.cloned(),
                given: b.cloned(),
            },
        );
    }

    plan
}

/// The conflict block written into the working tree for a conflicted file.
/// Absent sides contribute the empty string.
pub fn conflict_content(current: &[u8], given: &[u8]) -> Vec<u8> {
    let mut content = Vec::with_capacity(current.len() + given.len() + 32);
    content.extend_from_slice(b"<<<<<<< HEAD\n");
    content.extend_from_slice(current);
    content.extend_from_slice(b"=======\n");
    content.extend_from_slice(given);
    content.extend_from_slice(b">>>>>>>\n");
    content
}
