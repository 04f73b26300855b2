//! Directory of the public Jito block engines.
//!
//! Each region runs a block engine (the searcher API), a shred receiver and
//! a relayer. The addresses below are the ones published by Jito Labs.

use std::fmt::Display;
use std::net::{AddrParseError, SocketAddr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(format!("unknown network '{other}', expected mainnet or testnet")),
        }
    }
}

/// Endpoints of one regional block engine deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockEngineRegion {
    pub name: &'static str,
    pub block_engine_url: &'static str,
    pub shred_receiver_addr: &'static str,
    pub relayer_url: &'static str,
}

impl BlockEngineRegion {
    pub fn shred_receiver_socket(&self) -> Result<SocketAddr, AddrParseError> {
        self.shred_receiver_addr.parse()
    }
}

pub const MAINNET_REGIONS: &[BlockEngineRegion] = &[
    BlockEngineRegion {
        name: "Amsterdam",
        block_engine_url: "https://amsterdam.mainnet.block-engine.jito.wtf",
        shred_receiver_addr: "74.118.140.240:1002",
        relayer_url: "http://amsterdam.mainnet.relayer.jito.wtf:8100",
    },
    BlockEngineRegion {
        name: "Frankfurt",
        block_engine_url: "https://frankfurt.mainnet.block-engine.jito.wtf",
        shred_receiver_addr: "145.40.93.84:1002",
        relayer_url: "http://frankfurt.mainnet.relayer.jito.wtf:8100",
    },
    BlockEngineRegion {
        name: "NewYork",
        block_engine_url: "https://ny.mainnet.block-engine.jito.wtf",
        shred_receiver_addr: "141.98.216.96:1002",
        relayer_url: "http://ny.mainnet.relayer.jito.wtf:8100",
    },
    BlockEngineRegion {
        name: "Tokyo",
        block_engine_url: "https://tokyo.mainnet.block-engine.jito.wtf",
        shred_receiver_addr: "202.8.9.160:1002",
        relayer_url: "http://tokyo.mainnet.relayer.jito.wtf:8100",
    },
    BlockEngineRegion {
        name: "SaltLakeCity",
        block_engine_url: "https://slc.mainnet.block-engine.jito.wtf",
        shred_receiver_addr: "64.130.53.8:1002",
        relayer_url: "http://slc.mainnet.relayer.jito.wtf:8100",
    },
];

pub const TESTNET_REGIONS: &[BlockEngineRegion] = &[
    BlockEngineRegion {
        name: "Dallas",
        block_engine_url: "https://dallas.testnet.block-engine.jito.wtf",
        shred_receiver_addr: "147.28.154.132:1002",
        relayer_url: "http://dallas.testnet.relayer.jito.wtf:8100",
    },
    BlockEngineRegion {
        name: "NewYork",
        block_engine_url: "https://ny.testnet.block-engine.jito.wtf",
        shred_receiver_addr: "141.98.216.97:1002",
        relayer_url: "http://nyc.testnet.relayer.jito.wtf:8100",
    },
];

pub fn block_engines(network: Network) -> &'static [BlockEngineRegion] {
    match network {
        Network::Mainnet => MAINNET_REGIONS,
        Network::Testnet => TESTNET_REGIONS,
    }
}

/// Looks up a region by name, ignoring ASCII case.
pub fn find_region(network: Network, name: &str) -> Option<&'static BlockEngineRegion> {
    block_engines(network)
        .iter()
        .find(|region| region.name.eq_ignore_ascii_case(name))
}
