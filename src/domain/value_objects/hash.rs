//! Content Hash Value Object
//!
//! A validated, immutable hash of file content. Used as the source fingerprint
//! of a component and as the cache-busting hash of a bundle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content hash value object
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Create a new ContentHash from a raw hash string (with or without prefix)
    pub fn new(raw_hash: &str) -> Self {
        if raw_hash.starts_with(Self::PREFIX) {
            Self(raw_hash.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw_hash))
        }
    }

    /// Create a ContentHash by computing SHA-256 of bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        use sha2::{Digest, Sha256};
        let hash = Sha256::digest(bytes);
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    /// Create a ContentHash by computing SHA-256 of a string
    pub fn from_content(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    /// Get the full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// First `len` hex characters, for display
    pub fn short(&self, len: usize) -> &str {
        let hex = self.hex();
        &hex[..len.min(hex.len())]
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContentHash {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<ContentHash> for String {
    fn from(hash: ContentHash) -> Self {
        hash.0
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_adds_prefix_if_missing() {
        let hash = ContentHash::new("abc123");
        assert_eq!(hash.as_str(), "sha256:abc123");
    }

    #[test]
    fn new_keeps_prefix_if_present() {
        let hash = ContentHash::new("sha256:abc123");
        assert_eq!(hash.as_str(), "sha256:abc123");
    }

    #[test]
    fn from_bytes_computes_sha256() {
        let hash = ContentHash::from_bytes(b"hello");
        assert_eq!(
            hash.hex(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn same_content_same_hash() {
        assert_eq!(
            ContentHash::from_content("test"),
            ContentHash::from_content("test")
        );
        assert_ne!(
            ContentHash::from_content("test1"),
            ContentHash::from_content("test2")
        );
    }

    #[test]
    fn short_truncates_hex() {
        let hash = ContentHash::new("abcdef0123");
        assert_eq!(hash.short(4), "abcd");
        assert_eq!(hash.short(100), "abcdef0123");
    }

    #[test]
    fn serializes_as_plain_string() {
        let hash = ContentHash::new("abc");
        assert_eq!(serde_json::to_string(&hash).unwrap(), "\"sha256:abc\"");
        let back: ContentHash = serde_json::from_str("\"sha256:abc\"").unwrap();
        assert_eq!(back, hash);
    }
}
