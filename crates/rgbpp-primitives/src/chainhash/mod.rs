//! Anchor-chain transaction id type.
//!
//! Provides a `Hash` type: 32 bytes stored in natural (internal) order and
//! displayed as byte-reversed hex, matching the anchor chain's convention for
//! transaction ids and block hashes.
//!
//! Natural order is what raw transactions, lock args and hashing use.
//! Display order is what explorers and the indexing service print, and what
//! callers pass around as "the txid".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::sha256d;
use crate::hex::{decode_hex, encode_hex};
use crate::PrimitivesError;

/// Size of a Hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Hex length of a Hash without prefix (64 characters).
pub const HASH_HEX_SIZE: usize = HASH_SIZE * 2;

/// A 32-byte anchor-chain hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Hash([u8; HASH_SIZE]);

/// The all-zero hash.
pub const ZERO_HASH: Hash = Hash::new([0u8; HASH_SIZE]);

impl Hash {
    /// Create a Hash from 32 bytes in natural order.
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    /// Create a Hash from a natural-order byte slice.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(Hash)` if the slice is 32 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let arr: [u8; HASH_SIZE] = bytes.try_into().map_err(|_| {
            PrimitivesError::InvalidHash(format!(
                "invalid hash length of {}, want {}",
                bytes.len(),
                HASH_SIZE
            ))
        })?;
        Ok(Hash(arr))
    }

    /// Parse a display-order hex string (optionally `0x`-prefixed).
    ///
    /// The string must hold exactly 64 hex characters; short ids are not
    /// zero-padded since a truncated txid is almost certainly a caller bug.
    ///
    /// # Arguments
    /// * `hex_str` - Display-order hex, as printed by explorers.
    ///
    /// # Returns
    /// The Hash with bytes reversed into natural order.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let mut hash = Self::from_natural_hex(hex_str)?;
        hash.0.reverse();
        Ok(hash)
    }

    /// Parse a natural-order hex string (optionally `0x`-prefixed).
    pub fn from_natural_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = decode_hex(hex_str)?;
        if bytes.len() != HASH_SIZE {
            return Err(PrimitivesError::InvalidHash(format!(
                "expected {} hex characters, got {}",
                HASH_HEX_SIZE,
                bytes.len() * 2
            )));
        }
        Self::from_bytes(&bytes)
    }

    /// Render the natural-order bytes as `0x`-prefixed hex.
    pub fn to_natural_hex(&self) -> String {
        encode_hex(self.0)
    }

    /// Render the display-order bytes as `0x`-prefixed hex.
    pub fn to_display_hex(&self) -> String {
        encode_hex(self.reversed().0)
    }

    /// Return a Hash with the byte order flipped.
    pub fn reversed(&self) -> Self {
        let mut bytes = self.0;
        bytes.reverse();
        Hash(bytes)
    }

    /// Access the natural-order bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Consume the Hash and return its natural-order bytes.
    pub fn into_bytes(self) -> [u8; HASH_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }
}

/// Display the hash as unprefixed byte-reversed hex.
impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ::hex::encode(self.reversed().0))
    }
}

/// Parse display-order hex. Equivalent to `Hash::from_hex`.
impl FromStr for Hash {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_hex(s)
    }
}

/// Serialize as display-order hex, the form used by indexer JSON.
impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute double SHA-256 of the input and return the result as a Hash.
///
/// Applied to a serialized anchor-chain transaction this yields its txid.
pub fn double_hash_h(data: &[u8]) -> Hash {
    Hash(sha256d(data))
}
