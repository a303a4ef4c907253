use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::Error;

/// SHA-256 hash used for content addressing
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash([u8; 32]);

impl Hash {
    /// zero hash (useful as sentinel)
    pub const ZERO: Hash = Hash([0u8; 32]);

    /// create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// parse from hex string
    pub fn from_hex(s: &str) -> crate::Result<Self> {
        let bytes = hex::decode(s).map_err(|_| Error::InvalidHashHex(s.to_string()))?;
        if bytes.len() != 32 {
            return Err(Error::InvalidHashHex(s.to_string()));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// get raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", &self.to_hex()[..12])
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// compute the content hash of a byte string
///
/// identical content always yields the identical hash; this is the whole
/// identity scheme for blobs.
pub fn compute_content_hash(content: &[u8]) -> Hash {
    Hash(Sha256::digest(content).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_hex_roundtrip() {
        let original =
            Hash::from_hex("abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789")
                .unwrap();
        let hex = original.to_hex();
        let parsed = Hash::from_hex(&hex).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_hash_invalid_hex() {
        assert!(Hash::from_hex("not valid hex").is_err());
        assert!(Hash::from_hex("abcd").is_err()); // too short
        assert!(Hash::from_hex(
            "abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789ff"
        )
        .is_err()); // too long
    }

    #[test]
    fn test_hash_ordering() {
        let h1 =
            Hash::from_hex("0000000000000000000000000000000000000000000000000000000000000001")
                .unwrap();
        let h2 =
            Hash::from_hex("0000000000000000000000000000000000000000000000000000000000000002")
                .unwrap();
        assert!(h1 < h2);
    }

    #[test]
    fn test_content_hash_determinism() {
        let h1 = compute_content_hash(b"hello");
        let h2 = compute_content_hash(b"hello");
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_content_hash_different_content() {
        let h1 = compute_content_hash(b"hello");
        let h2 = compute_content_hash(b"world");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_content_hash_empty_content() {
        let h = compute_content_hash(b"");
        assert_ne!(h, Hash::ZERO);
    }

    #[test]
    fn test_hash_serde_json() {
        let h =
            Hash::from_hex("abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789")
                .unwrap();
        let json = serde_json::to_string(&h).unwrap();
        assert!(json.contains("abcdef"));
        let parsed: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(h, parsed);
    }
}
