//! 256-bit hash values
//!
//! Hashes are kept in internal (wire) byte order. Text form is the conventional
//! reversed "display" order used by block explorers and checkpoint tables.

use crate::error::{HeaderTrustError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const HASH_LEN: usize = 32;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Hash256([u8; HASH_LEN]);

impl Hash256 {
    pub const ZERO: Hash256 = Hash256([0u8; HASH_LEN]);

    pub const fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Hash256(bytes)
    }

    /// Build a hash from a display-order hex literal at compile time.
    ///
    /// Only meant for constant tables: a malformed literal fails const evaluation.
    pub(crate) const fn from_display_hex(literal: &str) -> Self {
        let src = literal.as_bytes();
        assert!(src.len() == HASH_LEN * 2, "hash literal must be 64 hex digits");

        let mut bytes = [0u8; HASH_LEN];
        let mut i = 0;
        while i < HASH_LEN {
            let hi = hex_digit(src[2 * i]);
            let lo = hex_digit(src[2 * i + 1]);
            bytes[HASH_LEN - 1 - i] = (hi << 4) | lo;
            i += 1;
        }
        Hash256(bytes)
    }

    /// Parse a hash given in internal byte order
    pub fn from_internal_hex(s: &str) -> Result<Self> {
        let decoded = hex::decode(s)?;
        let bytes: [u8; HASH_LEN] = decoded.as_slice().try_into().map_err(|_| {
            HeaderTrustError::InvalidHash(format!(
                "expected {} bytes, got {}",
                HASH_LEN,
                decoded.len()
            ))
        })?;
        Ok(Hash256(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    pub fn to_display_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }
}

const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit in hash literal"),
    }
}

impl From<[u8; HASH_LEN]> for Hash256 {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Hash256(bytes)
    }
}

/// Parses display-order hex
impl FromStr for Hash256 {
    type Err = HeaderTrustError;

    fn from_str(s: &str) -> Result<Self> {
        let mut hash = Hash256::from_internal_hex(s)?;
        hash.0.reverse();
        Ok(hash)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_display_hex())
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_display_hex())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
