//! Hard-coded checkpoints
//!
//! Checkpoints double as starting points for partial chain downloads. A table
//! is sorted by strictly increasing height and starts at the genesis block.

use crate::core::compact::decode_compact;
use crate::core::hash::Hash256;
use crate::core::header::HeaderView;
use crate::error::Result;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A trusted (height, hash) anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub height: u32,
    pub hash: Hash256,
    pub timestamp: u32,
    /// Target in compact form
    pub target: u32,
}

impl Checkpoint {
    pub(crate) const fn new(height: u32, hash: &str, timestamp: u32, target: u32) -> Checkpoint {
        Checkpoint {
            height,
            hash: Hash256::from_display_hex(hash),
            timestamp,
            target,
        }
    }

    pub fn target_value(&self) -> Result<BigUint> {
        decode_compact(self.target)
    }
}

/// Read-only view over one network's checkpoint table
#[derive(Debug, Clone, Copy)]
pub struct CheckpointStore {
    checkpoints: &'static [Checkpoint],
}

impl CheckpointStore {
    pub const fn new(checkpoints: &'static [Checkpoint]) -> CheckpointStore {
        CheckpointStore { checkpoints }
    }

    /// Highest checkpoint at or below `height`
    pub fn lookup_at_or_before(&self, height: u32) -> Option<&'static Checkpoint> {
        let idx = self.checkpoints.partition_point(|cp| cp.height <= height);
        idx.checked_sub(1).map(|i| &self.checkpoints[i])
    }

    /// Checkpoint at exactly `height`
    pub fn lookup_exact(&self, height: u32) -> Option<&'static Checkpoint> {
        self.checkpoints
            .binary_search_by_key(&height, |cp| cp.height)
            .ok()
            .map(|i| &self.checkpoints[i])
    }

    /// True when a checkpoint pins `header.height` to a different hash.
    ///
    /// Such a header must be rejected whatever the difficulty verifier says.
    pub fn contradicts(&self, header: &HeaderView) -> bool {
        self.lookup_exact(header.height)
            .is_some_and(|cp| cp.hash != header.block_hash)
    }

    pub fn genesis(&self) -> Option<&'static Checkpoint> {
        self.checkpoints.first()
    }

    pub fn latest(&self) -> Option<&'static Checkpoint> {
        self.checkpoints.last()
    }

    pub fn checkpoints(&self) -> &'static [Checkpoint] {
        self.checkpoints
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Checkpoint> {
        self.checkpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

/// Non-empty, starts at genesis, strictly increasing heights
pub(crate) const fn is_well_formed(checkpoints: &[Checkpoint]) -> bool {
    if checkpoints.is_empty() || checkpoints[0].height != 0 {
        return false;
    }
    let mut i = 1;
    while i < checkpoints.len() {
        if checkpoints[i - 1].height >= checkpoints[i].height {
            return false;
        }
        i += 1;
    }
    true
}
