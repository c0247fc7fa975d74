//! Split-point discovery for merges
//!
//! The split point of two commits is their latest common ancestor. It is
//! found in two phases:
//!
//! 1. Walk every ancestor of the first commit (all parents, depth-first),
//!    collecting their ids into a set.
//! 2. Breadth-first search from the second commit over all parents; the
//!    first id encountered that is in the set is the split point.
//!
//! When the history contains multiple incomparable common ancestors, the BFS
//! side decides which one wins. The queue enqueues parents in their stored
//! order (first parent before second), so the result is deterministic for a
//! fixed parent order in each commit.
//!
//! The finder takes a parent-loader closure rather than a database handle so
//! it works against any backing store, including the in-memory graphs the
//! tests build.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::collections::{HashSet, VecDeque};

pub struct SplitPointFinder<LoadParentsFn>
where
    LoadParentsFn: Fn(&ObjectId) -> Result<Vec<ObjectId>>,
{
    parent_loader: LoadParentsFn,
}

impl<LoadParentsFn> SplitPointFinder<LoadParentsFn>
where
    LoadParentsFn: Fn(&ObjectId) -> Result<Vec<ObjectId>>,
{
    pub fn new(parent_loader: LoadParentsFn) -> Self {
        Self { parent_loader }
    }

    /// Latest common ancestor of `first` and `second`, or `None` when either
    /// side is absent or the histories share no commit.
    pub fn find(
        &self,
        first: Option<&ObjectId>,
        second: Option<&ObjectId>,
    ) -> Result<Option<ObjectId>> {
        let (first, second) = match (first, second) {
            (Some(first), Some(second)) => (first, second),
            _ => return Ok(None),
        };

        let mut ancestors = HashSet::new();
        let mut stack = vec![first.clone()];
        while let Some(oid) = stack.pop() {
            if !ancestors.insert(oid.clone()) {
                continue;
            }
            for parent in (self.parent_loader)(&oid)? {
                if !ancestors.contains(&parent) {
                    stack.push(parent);
                }
            }
        }

        let mut visited = HashSet::from([second.clone()]);
        let mut queue = VecDeque::from([second.clone()]);
        while let Some(oid) = queue.pop_front() {
            if ancestors.contains(&oid) {
                return Ok(Some(oid));
            }
            for parent in (self.parent_loader)(&oid)? {
                if visited.insert(parent.clone()) {
                    queue.push_back(parent);
                }
            }
        }

        Ok(None)
    }
}
