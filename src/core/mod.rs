//! Header trust core
//!
//! Hash values and header views, the compact target codec, the proof-of-work
//! identity hash, per-network difficulty verification and the combined
//! header validator. Nothing in here performs I/O or keeps mutable state.

pub mod compact;
pub mod difficulty;
pub mod hash;
pub mod header;
pub mod proof_of_work;
pub mod retarget;
pub mod validation;

pub use compact::{decode_compact, encode_compact, MAX_COMPACT};
pub use difficulty::{DifficultyVerifier, RetargetCheck};
pub use hash::Hash256;
pub use header::{HeaderFields, HeaderView, HEADER_LEN};
pub use proof_of_work::ProofOfWork;
pub use retarget::verify_retarget;
pub use validation::{HeaderValidator, HeaderVerdict};
