use std::time::Duration;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::block_engine::{Network, find_region};
use crate::cli::ConnectionArgs;
use crate::searcher::{ClientOptions, DEFAULT_TIP_FLOOR_URL};

pub const DEFAULT_BLOCK_ENGINE_URL: &str = "https://mainnet.block-engine.jito.wtf";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearcherConfig {
    pub network: Network,
    pub block_engine_url: String,
    pub region: Option<String>,
    pub tip_floor_url: String,
    pub max_retries: u32,
    pub timeout_secs: Option<u64>,
}

impl Default for SearcherConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            block_engine_url: DEFAULT_BLOCK_ENGINE_URL.to_string(),
            region: None,
            tip_floor_url: DEFAULT_TIP_FLOOR_URL.to_string(),
            max_retries: 0,
            timeout_secs: None,
        }
    }
}

impl SearcherConfig {
    pub fn main_key_prefix() -> &'static str {
        "searcher"
    }

    /// The block engine to talk to: the configured region's endpoint when a
    /// region is set, `block_engine_url` otherwise.
    pub fn resolve_block_engine_url(&self) -> Result<String> {
        match &self.region {
            Some(name) => find_region(self.network, name)
                .map(|region| region.block_engine_url.to_string())
                .ok_or_else(|| anyhow!("Unknown {} block engine region '{}'", self.network, name)),
            None => Ok(self.block_engine_url.clone()),
        }
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            tip_floor_url: self.tip_floor_url.clone(),
            max_retries: self.max_retries,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn apply_connection(&mut self, args: &ConnectionArgs) {
        if let Some(network) = args.network {
            self.network = network;
        }
        if let Some(block_engine_url) = &args.block_engine_url {
            self.block_engine_url = block_engine_url.clone();
            self.region = None;
        }
        if let Some(region) = &args.region {
            self.region = Some(region.clone());
        }
        if let Some(tip_floor_url) = &args.tip_floor_url {
            self.tip_floor_url = tip_floor_url.clone();
        }
        if let Some(max_retries) = args.max_retries {
            self.max_retries = max_retries;
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.timeout_secs = Some(timeout_secs);
        }
    }
}
