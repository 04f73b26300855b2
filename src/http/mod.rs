//! HTTP transport for the Jito block engine API.
//!
//! This module owns everything below the JSON level: building the JSON-RPC
//! 2.0 envelope, joining the configured base URL with an endpoint path,
//! sending the request with `reqwest`, checking the status code and decoding
//! the body into a [`serde_json::Value`].
//!
//! # Architecture
//!
//! - `HttpClient` - crate-internal transport used by
//!   [`SearcherClient`](crate::searcher::SearcherClient)
//! - [`TransportError`] - every failure below the JSON level
//! - [`JsonRpcRequest`] - the request envelope
//! - [`join_url`] - base URL + endpoint path joining
//!
//! # Retries
//!
//! The transport sends one request per call. Retries with exponential
//! backoff are available as an opt-in middleware layer, enabled by passing a
//! non-zero `max_retries` when the client is built.

mod error;
pub(crate) mod http_client;
mod types;
mod utils;

pub use error::TransportError;
pub use types::{JSON_RPC_REQUEST_ID, JSON_RPC_VERSION, JsonRpcRequest};
pub use utils::{endpoint_url, join_url};
