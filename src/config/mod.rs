//! Configuration management
//!
//! Selects which network's parameters the process works with and how loudly it
//! logs. Settings come from defaults, an optional TOML file and the environment.

pub mod settings;

pub use settings::{Config, Settings, GLOBAL_CONFIG};
