//! Blob object
//!
//! A blob is immutable file content plus its digest. The digest is the SHA-1
//! of the raw content bytes, so storage is idempotent: the same content
//! always lands under the same key.

use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    id: ObjectId,
    content: Bytes,
}

impl Blob {
    /// Create a blob from content, computing its id.
    pub fn new(content: Bytes) -> Self {
        let id = ObjectId::from_content(&content);
        Blob { id, content }
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_matches_content_digest() {
        let blob = Blob::new(Bytes::from_static(b"hello\n"));
        assert_eq!(blob.id(), &ObjectId::from_content(b"hello\n"));
    }

    #[test]
    fn same_content_same_id() {
        let a = Blob::new(Bytes::from_static(b"wug"));
        let b = Blob::new(Bytes::from_static(b"wug"));
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn different_content_different_id() {
        let a = Blob::new(Bytes::from_static(b"wug"));
        let b = Blob::new(Bytes::from_static(b"notwug"));
        assert_ne!(a.id(), b.id());
    }
}
