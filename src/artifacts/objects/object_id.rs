//! Object identifier (SHA-1 digest)
//!
//! Object ids are 40-character lowercase hexadecimal strings. A *short id* is
//! any non-empty prefix of an id; resolution against the object store
//! requires the prefix to match exactly one stored id.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::{GitliteError, Result};
use sha1::{Digest, Sha1};

/// A 40-character hexadecimal SHA-1 digest identifying an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object id from a string.
    pub fn try_parse(id: String) -> Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(GitliteError::CorruptObject(format!(
                "invalid object id length {} for {:?}",
                id.len(),
                id
            )));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GitliteError::CorruptObject(format!(
                "invalid object id characters in {:?}",
                id
            )));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Compute the id of a byte sequence (SHA-1, hex-encoded).
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(content);
        let digest = hasher.finalize();
        Self(format!("{digest:x}"))
    }

    /// First seven characters, for Merge: lines in log output.
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    #[test]
    fn hashes_known_content() {
        let oid = ObjectId::from_content(b"hello\n");
        assert_eq!(oid.as_ref(), "f572d396fae9206628714fb2ce00f72e94f2258f");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(ObjectId::try_parse("abc123".to_string()).is_err());
        assert!(ObjectId::try_parse(String::new()).is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(ObjectId::try_parse("z".repeat(40)).is_err());
    }

    #[test]
    fn short_oid_is_seven_characters() {
        let oid = ObjectId::from_content(b"anything");
        assert_eq!(oid.to_short_oid().len(), 7);
        assert!(oid.as_ref().starts_with(&oid.to_short_oid()));
    }

    proptest! {
        #[test]
        fn accepts_any_forty_hex_digits(id in "[0-9a-f]{40}") {
            let parsed = ObjectId::try_parse(id.clone()).unwrap();
            assert_eq!(parsed.as_ref(), id);
        }

        #[test]
        fn digest_is_always_forty_lowercase_hex(content in proptest::collection::vec(proptest::num::u8::ANY, 0..256)) {
            let oid = ObjectId::from_content(&content);
            assert_eq!(oid.as_ref().len(), 40);
            assert!(oid.as_ref().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}
