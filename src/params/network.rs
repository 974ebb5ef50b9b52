//! Chain parameters for the supported networks
//!
//! Both parameter sets are process-wide constants. There is no way to build a
//! different main or test set at runtime; callers pick one with [`select`].

use crate::core::difficulty::DifficultyVerifier;
use crate::core::header::HeaderView;
use crate::core::retarget::verify_retarget;
use crate::error::HeaderTrustError;
use crate::params::checkpoints::{is_well_formed, Checkpoint, CheckpointStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Main,
    Test,
}

impl Network {
    pub fn params(self) -> &'static ChainParams {
        select(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
        }
    }
}

impl FromStr for Network {
    type Err = HeaderTrustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Test),
            _ => Err(HeaderTrustError::InvalidNetwork(format!(
                "{s}. Valid options: main, test"
            ))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of one network
#[derive(Debug, Clone, Copy)]
pub struct ChainParams {
    pub network: Network,
    pub dns_seeds: &'static [&'static str],
    pub standard_port: u16,
    pub magic_number: u32,
    pub services: u64,
    pub verifier: DifficultyVerifier,
    pub checkpoints: CheckpointStore,
}

impl ChainParams {
    pub fn verify_difficulty(
        &self,
        candidate: &HeaderView,
        previous: Option<&HeaderView>,
        transition_time: u32,
    ) -> bool {
        self.verifier.verify(candidate, previous, transition_time)
    }

    pub fn lookup_at_or_before(&self, height: u32) -> Option<&'static Checkpoint> {
        self.checkpoints.lookup_at_or_before(height)
    }

    pub fn lookup_exact(&self, height: u32) -> Option<&'static Checkpoint> {
        self.checkpoints.lookup_exact(height)
    }
}

pub fn select(network: Network) -> &'static ChainParams {
    match network {
        Network::Main => &MAINNET_PARAMS,
        Network::Test => &TESTNET_PARAMS,
    }
}

static MAINNET_DNS_SEEDS: [&str; 7] = [
    "useast1.vtconline.org.",
    "vtc.gertjaap.org.",
    "seed.vtc.bryangoodson.org.",
    "seed.orderofthetaco.org.",
    "dnsseed.pknight.ca.",
    "seed.alexturek.org.",
    "vertcoin.mbl.cash.",
];

static TESTNET_DNS_SEEDS: [&str; 6] = [
    "digiexplorer.info",
    "digihash.co",
    "seed.vertcoin.io",
    "seed1.vertcoin.io",
    "seed2.vertcoin.io",
    "seed3.vertcoin.io",
];

pub const MAINNET_CHECKPOINT_COUNT: usize = 9;
pub const TESTNET_CHECKPOINT_COUNT: usize = 2;

#[rustfmt::skip]
const MAINNET_CHECKPOINTS: [Checkpoint; MAINNET_CHECKPOINT_COUNT] = [
    Checkpoint::new(0, "4d96a915f49d40b1e5c2844d1ee2dccb90013a990ccea12c492d22110489f0c4", 1389311371, 0x1e0ffff0),
    Checkpoint::new(24200, "d7ed819858011474c8b0cae4ad0b9bdbb745becc4c386bc22d1220cc5a4d1787", 1390701333, 0x1c130a52),
    Checkpoint::new(65000, "9e673a69c35a423f736ab66f9a195d7c42f979847a729c0f3cef2c0b8b9d0289", 1396856613, 0x1c013819),
    Checkpoint::new(84065, "a904170a5a98109b2909379d9bc03ef97a6b44d5dafbc9084b8699b0cba5aa98", 1399714612, 0x1c010fd5),
    Checkpoint::new(228023, "15c94667a9e941359d2ee6527e2876db1b5e7510a5ded3885ca02e7e0f516b51", 1421367388, 0x1c02bba5),
    Checkpoint::new(346992, "f1714fa4c7990f4b3d472eb22132891ccd3c7ad7208e2d1ab15bde68854fb0ee", 1439188880, 0x1c012830),
    Checkpoint::new(347269, "fa1e592b7ea2aa97c5f20ccd7c40f3aaaeb31d1232c978847a79f28f83b6c22a", 1439231038, 0x1c01bf9c),
    Checkpoint::new(430000, "2f5703cf7b6f956b84fd49948cbf49dc164cfcb5a7b55903b1c4f53bc7851611", 1451641736, 0x1c00a632),
    Checkpoint::new(516999, "572ed47da461743bcae526542053e7bc532de299345e4f51d77786f2870b7b28", 1464732960, 0x1c011edd),
];

#[rustfmt::skip]
const TESTNET_CHECKPOINTS: [Checkpoint; TESTNET_CHECKPOINT_COUNT] = [
    Checkpoint::new(0, "cee8f24feb7a64c8f07916976aa4855decac79b6741a8ec2e32e2747497ad2c9", 1481291250, 0x1e0ffff0),
    Checkpoint::new(10000, "e84a668d907d002e013da912ac2d919e8613f97221ab0505a272b2e8dd6a71d8", 1510280787, 0x1e01aa34),
];

const _: () = assert!(is_well_formed(&MAINNET_CHECKPOINTS));
const _: () = assert!(is_well_formed(&TESTNET_CHECKPOINTS));

static MAINNET_PARAMS: ChainParams = ChainParams {
    network: Network::Main,
    dns_seeds: &MAINNET_DNS_SEEDS,
    standard_port: 5889,
    magic_number: 0xdab5_bffa,
    services: 0,
    verifier: DifficultyVerifier::FullRetarget(verify_retarget),
    checkpoints: CheckpointStore::new(&MAINNET_CHECKPOINTS),
};

// The test network only checks linkage, see `DifficultyVerifier::ChainLinkageOnly`
static TESTNET_PARAMS: ChainParams = ChainParams {
    network: Network::Test,
    dns_seeds: &TESTNET_DNS_SEEDS,
    standard_port: 12025,
    magic_number: 0xdab6_c3fa,
    services: 0,
    verifier: DifficultyVerifier::ChainLinkageOnly,
    checkpoints: CheckpointStore::new(&TESTNET_CHECKPOINTS),
};
