//! Proof-of-work identity hash
//!
//! A header's identity hash is SHA-256 over the Groestl-512 digest of its
//! 80-byte serialization. Every call builds fresh hash contexts, so hashing is
//! safe from any number of threads at once.

use crate::core::compact::decode_compact;
use crate::core::hash::Hash256;
use crate::core::header::{HeaderFields, HEADER_LEN};
use crate::error::{HeaderTrustError, Result};
use crate::utils::{groestl512_digest, sha256_digest};
use num_bigint::BigUint;

pub struct ProofOfWork {
    header: [u8; HEADER_LEN],
    target: BigUint,
    bits: u32,
}

impl ProofOfWork {
    /// Bind a serialized header to the target encoded in its own `bits` field
    pub fn new_proof_of_work(header: &[u8]) -> Result<ProofOfWork> {
        let fields = HeaderFields::parse(header)?;
        let target = decode_compact(fields.bits)?;
        Ok(ProofOfWork {
            header: fields.to_bytes(),
            target,
            bits: fields.bits,
        })
    }

    /// Two-stage hash of exactly `HEADER_LEN` bytes
    pub fn pow_hash(input: &[u8]) -> Result<[u8; 32]> {
        let header: &[u8; HEADER_LEN] =
            input
                .try_into()
                .map_err(|_| HeaderTrustError::InvalidInputLength {
                    expected: HEADER_LEN,
                    actual: input.len(),
                })?;
        Ok(two_stage_digest(header))
    }

    /// Digest as a 256-bit integer; the first byte is the least significant
    pub fn hash_to_integer(digest: &[u8; 32]) -> BigUint {
        BigUint::from_bytes_le(digest)
    }

    pub fn identity_hash(&self) -> Hash256 {
        Hash256::from_bytes(two_stage_digest(&self.header))
    }

    /// True iff the identity hash does not exceed the claimed target
    pub fn validate(&self) -> bool {
        let hash = self.identity_hash();
        Self::hash_to_integer(hash.as_bytes()) <= self.target
    }

    pub fn target(&self) -> &BigUint {
        &self.target
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }
}

fn two_stage_digest(header: &[u8; HEADER_LEN]) -> [u8; 32] {
    sha256_digest(&groestl512_digest(header))
}
