//! Domain artifacts built on top of the core areas
//!
//! - `objects`: blob and commit types plus object ids
//! - `history`: commit-graph traversal (first-parent log, split point)
//! - `checkout`: working-tree reconciliation with a target commit
//! - `merge`: three-way classification and conflict planning
//! - `remote`: remotes registry and access to a sibling repository
//! - `status`: working-tree inspection for status reporting

pub(crate) mod checkout;
pub(crate) mod history;
pub(crate) mod merge;
pub(crate) mod objects;
pub(crate) mod remote;
pub(crate) mod status;
