//! Bundle lifecycle and tip floor client.
//!
//! - [`SearcherClient`] - bundle/transaction submission, status and tip
//!   account lookups, tip floor statistics
//! - [`SearcherError`] - error returned by every operation
//! - [`extract_result`] - unwraps the `result` member of a JSON-RPC response
//! - [`sol_to_lamports`] - exact SOL to lamport conversion

mod amount;
mod error;
mod extract;
mod searcher_client;
mod types;

pub use amount::{AmountParseError, LAMPORTS_DECIMALS, LAMPORTS_PER_SOL, sol_to_lamports};
pub use error::{Result, SearcherError};
pub use extract::{decode_result, extract_result};
pub use searcher_client::{
    BUNDLES_ENDPOINT, ClientOptions, DEFAULT_TIP_FLOOR_URL, SearcherClient, TIP_FLOOR_ENDPOINT,
    TRANSACTIONS_ENDPOINT,
};
pub use types::{BundleStatus, BundleStatusesResponse, TipFloorStatistics, TipPercentile};
