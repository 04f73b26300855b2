pub mod block_engine;
pub mod cli;
pub mod config;
pub mod http;
pub mod log;
pub mod searcher;
pub mod utils;

pub use crate::block_engine::{BlockEngineRegion, Network};
pub use crate::searcher::{
    BundleStatus, BundleStatusesResponse, ClientOptions, SearcherClient, SearcherError, TipFloorStatistics,
    TipPercentile,
};
