//! # SPV Header Trust
//!
//! Decides whether a block header received by a lightweight wallet can be
//! trusted: it belongs to the selected network, links to its predecessor with
//! acceptable difficulty, and carries a valid proof-of-work identity hash.
//!
//! ## Layout
//! - `params/`: the main and test network parameter sets and their checkpoints
//! - `core/`: hashes, header views, compact targets, the proof-of-work hash,
//!   difficulty verifiers and the combined header validator
//! - `config/`: which network the process runs against
//! - `utils/`: SHA-256 and Groestl-512
//! - `cli/`: argument parsing for the inspection binary
//!
//! Everything under `core/` and `params/` is pure and holds no mutable state,
//! so any number of threads can verify, hash and look up checkpoints at once.
//!
//! ## Trust model
//! The main network delegates difficulty checks to a full retarget rule. The
//! test network only checks that a header links to its predecessor and ignores
//! the claimed target; that relaxation is specific to the test network.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod params;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Command, Opt};
pub use config::{Config, Settings, GLOBAL_CONFIG};
pub use crate::core::{
    decode_compact, encode_compact, verify_retarget, DifficultyVerifier, Hash256, HeaderFields,
    HeaderValidator, HeaderVerdict, HeaderView, ProofOfWork, RetargetCheck, HEADER_LEN,
};
pub use error::{HeaderTrustError, Result};
pub use params::{select, ChainParams, Checkpoint, CheckpointStore, Network};
