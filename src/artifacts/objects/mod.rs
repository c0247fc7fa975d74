//! Object types stored in the object database
//!
//! Two kinds of objects share a flat, content-addressed key space:
//!
//! - `blob`: raw file content, keyed by the SHA-1 of its bytes
//! - `commit`: a snapshot record in a canonical line-based text form
//!
//! Both are identified by an `ObjectId`, a 40-character hexadecimal digest.

pub(crate) mod blob;
pub(crate) mod commit;
pub(crate) mod object_id;

/// Length of a full object id (40 hex characters).
pub const OBJECT_ID_LENGTH: usize = 40;
