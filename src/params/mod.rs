//! Network parameters
//!
//! The two supported networks and their checkpoint tables.

pub mod checkpoints;
pub mod network;

pub use checkpoints::{Checkpoint, CheckpointStore};
pub use network::{
    select, ChainParams, Network, MAINNET_CHECKPOINT_COUNT, TESTNET_CHECKPOINT_COUNT,
};
