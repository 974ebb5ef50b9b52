use crate::params::Network;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "spv-header-trust")]
pub struct Opt {
    #[arg(
        long,
        global = true,
        help = "Network to use (main, test); overrides SPV_NETWORK"
    )]
    pub network: Option<Network>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "params", about = "Print the network's chain parameters")]
    Params,
    #[command(
        name = "hash",
        about = "Compute the proof-of-work identity hash of a header"
    )]
    Hash {
        #[arg(help = "Serialized 80-byte header, hex")]
        header: String,
    },
    #[command(
        name = "checkpoint",
        about = "Find the checkpoint at or before a height"
    )]
    Checkpoint {
        #[arg(help = "Block height")]
        height: u32,
        #[arg(long, help = "Only match a checkpoint at exactly this height")]
        exact: bool,
    },
    #[command(name = "verify", about = "Validate a header against its predecessor")]
    Verify {
        #[arg(help = "Serialized previous header, hex")]
        previous: String,
        #[arg(help = "Height of the previous header")]
        previous_height: u32,
        #[arg(help = "Serialized candidate header, hex")]
        candidate: String,
        #[arg(
            long = "transition-time",
            default_value_t = 0,
            help = "Timestamp of the block at the last difficulty transition"
        )]
        transition_time: u32,
    },
}
