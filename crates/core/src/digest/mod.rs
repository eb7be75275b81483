//! Real Blake3 digests over builder leaves.
//!
//! This module is the genuine counterpart to the display labels in
//! [`crate::derive`]. Nothing here is used to produce those labels.

mod tree;

pub use tree::{tree_digest, verify_proof, DigestProof, DigestTree, Side};

use crate::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 256-bit Blake3 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Digest(pub [u8; 32]);

impl Digest {
    /// Hex string without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First 8 hex characters, for compact display.
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a 64-character hex string, with or without `0x`.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut arr = [0u8; 32];
        hex::decode_to_slice(s, &mut arr)?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest(0x{})", self.short())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Blake3 of arbitrary bytes.
pub fn hash(data: &[u8]) -> Digest {
    Digest(blake3::hash(data).into())
}

/// Blake3 over the concatenation of two digests.
pub fn hash_pair(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(left.as_ref());
    hasher.update(right.as_ref());
    Digest(hasher.finalize().into())
}

/// Digest of a leaf symbol: Blake3 of its letter.
pub fn leaf_digest(symbol: Symbol) -> Digest {
    let mut buf = [0u8; 4];
    hash(symbol.letter().encode_utf8(&mut buf).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_digest_is_hash_of_letter() {
        assert_eq!(leaf_digest(Symbol::A), hash(b"A"));
        assert_ne!(leaf_digest(Symbol::A), leaf_digest(Symbol::B));
    }

    #[test]
    fn test_hash_pair_matches_concatenation() {
        let a = hash(b"left");
        let b = hash(b"right");
        let mut joined = a.0.to_vec();
        joined.extend_from_slice(&b.0);
        assert_eq!(hash_pair(&a, &b), hash(&joined));
        assert_ne!(hash_pair(&a, &b), hash_pair(&b, &a));
    }

    #[test]
    fn test_display_and_parse() {
        let d = hash(b"test");
        let shown = d.to_string();
        assert!(shown.starts_with("0x"));
        assert_eq!(shown.len(), 66);
        assert_eq!(Digest::from_hex(&shown).unwrap(), d);
        assert_eq!(d.short().len(), 8);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(Digest::from_hex("abcd").is_err());
    }
}
