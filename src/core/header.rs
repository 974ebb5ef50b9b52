//! Block header views
//!
//! `HeaderView` carries the handful of fields the trust checks read. Views are
//! produced by whoever parsed the merkle block; this crate only reads them.

use crate::core::hash::{Hash256, HASH_LEN};
use crate::error::{HeaderTrustError, Result};

/// Length of a serialized block header
pub const HEADER_LEN: usize = 80;

const PREV_BLOCK_OFFSET: usize = 4;
const MERKLE_ROOT_OFFSET: usize = PREV_BLOCK_OFFSET + HASH_LEN;
const TIMESTAMP_OFFSET: usize = MERKLE_ROOT_OFFSET + HASH_LEN;
const BITS_OFFSET: usize = TIMESTAMP_OFFSET + 4;
const NONCE_OFFSET: usize = BITS_OFFSET + 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderView {
    pub height: u32,
    pub block_hash: Hash256,
    pub prev_block: Hash256,
    pub timestamp: u32,
    /// Claimed target in compact form
    pub bits: u32,
}

impl HeaderView {
    pub fn new(
        height: u32,
        block_hash: Hash256,
        prev_block: Hash256,
        timestamp: u32,
        bits: u32,
    ) -> Self {
        HeaderView {
            height,
            block_hash,
            prev_block,
            timestamp,
            bits,
        }
    }
}

/// Fields of a canonical 80-byte header serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFields {
    pub version: u32,
    pub prev_block: Hash256,
    pub merkle_root: Hash256,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl HeaderFields {
    pub fn parse(serialized: &[u8]) -> Result<HeaderFields> {
        let header: &[u8; HEADER_LEN] =
            serialized
                .try_into()
                .map_err(|_| HeaderTrustError::InvalidInputLength {
                    expected: HEADER_LEN,
                    actual: serialized.len(),
                })?;

        Ok(HeaderFields {
            version: read_u32(header, 0),
            prev_block: read_hash(header, PREV_BLOCK_OFFSET),
            merkle_root: read_hash(header, MERKLE_ROOT_OFFSET),
            timestamp: read_u32(header, TIMESTAMP_OFFSET),
            bits: read_u32(header, BITS_OFFSET),
            nonce: read_u32(header, NONCE_OFFSET),
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[..PREV_BLOCK_OFFSET].copy_from_slice(&self.version.to_le_bytes());
        out[PREV_BLOCK_OFFSET..MERKLE_ROOT_OFFSET].copy_from_slice(self.prev_block.as_bytes());
        out[MERKLE_ROOT_OFFSET..TIMESTAMP_OFFSET].copy_from_slice(self.merkle_root.as_bytes());
        out[TIMESTAMP_OFFSET..BITS_OFFSET].copy_from_slice(&self.timestamp.to_le_bytes());
        out[BITS_OFFSET..NONCE_OFFSET].copy_from_slice(&self.bits.to_le_bytes());
        out[NONCE_OFFSET..].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    /// View of this header at `height`, identified by `block_hash`
    pub fn view(&self, height: u32, block_hash: Hash256) -> HeaderView {
        HeaderView::new(
            height,
            block_hash,
            self.prev_block,
            self.timestamp,
            self.bits,
        )
    }

    /// Whether `view` carries this header's linkage fields and `block_hash`
    pub fn describes(&self, view: &HeaderView, block_hash: &Hash256) -> bool {
        view.block_hash == *block_hash
            && view.prev_block == self.prev_block
            && view.timestamp == self.timestamp
            && view.bits == self.bits
    }
}

fn read_u32(header: &[u8; HEADER_LEN], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&header[offset..offset + 4]);
    u32::from_le_bytes(word)
}

fn read_hash(header: &[u8; HEADER_LEN], offset: usize) -> Hash256 {
    let mut bytes = [0u8; HASH_LEN];
    bytes.copy_from_slice(&header[offset..offset + HASH_LEN]);
    Hash256::from_bytes(bytes)
}
