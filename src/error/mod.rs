//! Error handling for header verification
//!
//! Rejections of a header are not errors: the difficulty verifier answers with a
//! `bool`, checkpoint lookups with an `Option` and the combined validator with a
//! `HeaderVerdict`. The variants below cover caller bugs and bad configuration.

use std::fmt;

/// Result type alias for header-trust operations
pub type Result<T> = std::result::Result<T, HeaderTrustError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderTrustError {
    /// The proof-of-work hasher was handed something other than a full header
    InvalidInputLength { expected: usize, actual: usize },
    /// Compact "bits" value that is negative or overflows 256 bits
    InvalidCompactTarget(u32),
    /// Malformed 256-bit hash text
    InvalidHash(String),
    /// Unknown network name
    InvalidNetwork(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for HeaderTrustError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderTrustError::InvalidInputLength { expected, actual } => {
                write!(
                    f,
                    "Invalid input length: expected {expected} bytes, got {actual}"
                )
            }
            HeaderTrustError::InvalidCompactTarget(bits) => {
                write!(f, "Invalid compact target: 0x{bits:08x}")
            }
            HeaderTrustError::InvalidHash(msg) => write!(f, "Invalid hash: {msg}"),
            HeaderTrustError::InvalidNetwork(name) => write!(f, "Invalid network: {name}"),
            HeaderTrustError::Config(msg) => write!(f, "Configuration error: {msg}"),
            HeaderTrustError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for HeaderTrustError {}

impl From<std::io::Error> for HeaderTrustError {
    fn from(err: std::io::Error) -> Self {
        HeaderTrustError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for HeaderTrustError {
    fn from(err: toml::de::Error) -> Self {
        HeaderTrustError::Config(err.to_string())
    }
}

impl From<hex::FromHexError> for HeaderTrustError {
    fn from(err: hex::FromHexError) -> Self {
        HeaderTrustError::InvalidHash(err.to_string())
    }
}
