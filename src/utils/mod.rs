//! Utility functions and helpers
//!
//! The standard hash primitives the proof-of-work pipeline is built from.

pub mod crypto;

pub use crypto::{groestl512_digest, sha256_digest, GROESTL512_LEN, SHA256_LEN};
