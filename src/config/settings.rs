use crate::error::{HeaderTrustError, Result};
use crate::params::{select, ChainParams, Network};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

const NETWORK_KEY: &str = "SPV_NETWORK";
const CONFIG_PATH_KEY: &str = "SPV_CONFIG";

static DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub network: Network,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            network: Network::Main,
            log_level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Settings> {
        let settings: Settings = toml::from_str(text)?;
        Ok(settings)
    }

    pub fn load_from_file(path: &Path) -> Result<Settings> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| HeaderTrustError::Config(format!("{}: {e}", path.display())))
    }
}

pub struct Config {
    inner: RwLock<Settings>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Defaults, then the file named by `SPV_CONFIG`, then `SPV_NETWORK`
    pub fn new() -> Config {
        let mut settings = Settings::default();

        if let Ok(path) = env::var(CONFIG_PATH_KEY) {
            match Settings::load_from_file(Path::new(&path)) {
                Ok(loaded) => {
                    info!("Loaded configuration from {path}");
                    settings = loaded;
                }
                Err(e) => warn!("Ignoring configuration file {path}: {e}"),
            }
        }

        if let Ok(name) = env::var(NETWORK_KEY) {
            match name.parse::<Network>() {
                Ok(network) => settings.network = network,
                Err(e) => warn!("Ignoring {NETWORK_KEY}: {e}"),
            }
        }

        Config::from_settings(settings)
    }

    pub fn from_settings(settings: Settings) -> Config {
        Config {
            inner: RwLock::new(settings),
        }
    }

    pub fn settings(&self) -> Settings {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get_network(&self) -> Network {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .network
    }

    pub fn set_network(&self, network: Network) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.network = network;
    }

    pub fn get_log_level(&self) -> String {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .log_level
            .clone()
    }

    /// Parameter set of the configured network
    pub fn params(&self) -> &'static ChainParams {
        select(self.get_network())
    }
}
