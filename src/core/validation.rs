//! Header acceptance
//!
//! Runs the trust checks for one incoming header in a fixed order: the view
//! must describe the serialized bytes, then checkpoint pin, difficulty
//! verifier, proof of work.

use crate::core::hash::Hash256;
use crate::core::header::{HeaderFields, HeaderView};
use crate::core::proof_of_work::ProofOfWork;
use crate::error::Result;
use crate::params::ChainParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVerdict {
    Accepted,
    /// The view's hash, parent, timestamp or bits differ from the serialized header
    HeaderMismatch,
    /// A checkpoint pins this height to a different hash
    CheckpointMismatch { height: u32 },
    /// The network's difficulty verifier said no
    DifficultyRejected,
    /// The identity hash exceeds the target in the header's own bits
    InsufficientProofOfWork,
}

impl HeaderVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, HeaderVerdict::Accepted)
    }
}

pub struct HeaderValidator<'a> {
    params: &'a ChainParams,
}

impl<'a> HeaderValidator<'a> {
    pub fn new(params: &'a ChainParams) -> HeaderValidator<'a> {
        HeaderValidator { params }
    }

    /// `serialized` must be the 80-byte form of `candidate`, and
    /// `candidate.block_hash` its proof-of-work identity hash.
    ///
    /// Rejections come back as a verdict; only malformed input is an error.
    pub fn validate(
        &self,
        candidate: &HeaderView,
        serialized: &[u8],
        previous: Option<&HeaderView>,
        transition_time: u32,
    ) -> Result<HeaderVerdict> {
        let fields = HeaderFields::parse(serialized)?;
        let identity = Hash256::from_bytes(ProofOfWork::pow_hash(serialized)?);
        if !fields.describes(candidate, &identity) {
            return Ok(HeaderVerdict::HeaderMismatch);
        }

        if self.params.checkpoints.contradicts(candidate) {
            return Ok(HeaderVerdict::CheckpointMismatch {
                height: candidate.height,
            });
        }

        if !self
            .params
            .verify_difficulty(candidate, previous, transition_time)
        {
            return Ok(HeaderVerdict::DifficultyRejected);
        }

        let pow = ProofOfWork::new_proof_of_work(serialized)?;
        if !pow.validate() {
            return Ok(HeaderVerdict::InsufficientProofOfWork);
        }

        Ok(HeaderVerdict::Accepted)
    }
}
