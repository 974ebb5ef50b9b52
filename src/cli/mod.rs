//! Command-line interface
//!
//! Argument parsing for the header inspection tool.

pub mod commands;

pub use commands::{Command, Opt};
