//! Main network difficulty retarget rule
//!
//! This is the collaborator the main network's `FullRetarget` verifier points
//! at. The target is recomputed every `RETARGET_INTERVAL` blocks from the time
//! the previous interval took, limited to a 4x swing in either direction.

use crate::core::compact::{decode_compact, encode_compact};
use crate::core::difficulty::extends;
use crate::core::header::HeaderView;
use num_bigint::BigUint;

pub const RETARGET_INTERVAL: u32 = 2016;
/// Two weeks, in seconds
pub const TARGET_TIMESPAN: i64 = 14 * 24 * 60 * 60;
/// Easiest target the main network allows, in compact form
pub const MAX_PROOF_OF_WORK: u32 = 0x1e0f_ffff;

/// `transition_time` is the timestamp of the block at the last transition boundary
pub fn verify_retarget(
    candidate: &HeaderView,
    previous: Option<&HeaderView>,
    transition_time: u32,
) -> bool {
    let Some(previous) = previous else {
        return false;
    };
    if !extends(candidate, Some(previous)) {
        return false;
    }

    if candidate.height % RETARGET_INTERVAL != 0 {
        return candidate.bits == previous.bits;
    }
    if transition_time == 0 {
        return false;
    }

    match expected_bits(previous, transition_time) {
        Some(expected) => candidate.bits == expected,
        None => false,
    }
}

/// Compact target required at a transition boundary following `previous`
pub fn expected_bits(previous: &HeaderView, transition_time: u32) -> Option<u32> {
    let timespan = (i64::from(previous.timestamp) - i64::from(transition_time))
        .clamp(TARGET_TIMESPAN / 4, TARGET_TIMESPAN * 4);

    let previous_target = decode_compact(previous.bits).ok()?;
    let max_target = decode_compact(MAX_PROOF_OF_WORK).ok()?;

    let mut target = previous_target * BigUint::from(timespan as u64)
        / BigUint::from(TARGET_TIMESPAN as u64);
    if target > max_target {
        target = max_target;
    }
    Some(encode_compact(&target))
}
