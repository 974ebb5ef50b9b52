//! Per-network difficulty verification
//!
//! Each parameter set carries exactly one `DifficultyVerifier`, fixed when the
//! table is built. The verifier is a single decision per header: the only
//! "state" is the predecessor the caller hands in. A `false` answer means
//! "do not extend the trusted chain with this header yet", never a crash.

use crate::core::header::HeaderView;
use std::fmt;

/// Externally supplied retarget rule: `(candidate, previous, transition_time) -> accept`
pub type RetargetCheck = fn(&HeaderView, Option<&HeaderView>, u32) -> bool;

#[derive(Clone, Copy)]
pub enum DifficultyVerifier {
    /// Delegate to a full retarget rule
    FullRetarget(RetargetCheck),
    /// Linkage only: the candidate must directly extend `previous`.
    ///
    /// The claimed target is NOT checked here. This is a relaxed trust mode
    /// kept for the test network only and must not be used elsewhere.
    ChainLinkageOnly,
}

impl DifficultyVerifier {
    pub fn verify(
        &self,
        candidate: &HeaderView,
        previous: Option<&HeaderView>,
        transition_time: u32,
    ) -> bool {
        match self {
            DifficultyVerifier::FullRetarget(check) => {
                check(candidate, previous, transition_time)
            }
            DifficultyVerifier::ChainLinkageOnly => extends(candidate, previous),
        }
    }

    /// Whether this verifier accepts headers without looking at `bits`
    pub fn ignores_claimed_target(&self) -> bool {
        matches!(self, DifficultyVerifier::ChainLinkageOnly)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DifficultyVerifier::FullRetarget(_) => "full-retarget",
            DifficultyVerifier::ChainLinkageOnly => "chain-linkage-only",
        }
    }
}

impl fmt::Debug for DifficultyVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `candidate` names `previous` as its parent and sits exactly one block above it
pub fn extends(candidate: &HeaderView, previous: Option<&HeaderView>) -> bool {
    match previous {
        Some(previous) => {
            candidate.prev_block == previous.block_hash
                && previous.height.checked_add(1) == Some(candidate.height)
        }
        None => false,
    }
}
