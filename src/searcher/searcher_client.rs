// Copyright 2025 The jito-searcher Authors
// SPDX-License-Identifier: BSD-3-Clause

//! High-level client for the Jito block engine searcher API.
//!
//! [`SearcherClient`] is the public surface of the crate: it submits bundles
//! and transactions, looks up bundle statuses and tip accounts on the
//! configured block engine, and reads the tip floor statistics from the
//! separate statistics host.
//!
//! # Example
//!
//! ```rust,no_run
//! use jito_searcher::searcher::SearcherClient;
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = SearcherClient::new("https://mainnet.block-engine.jito.wtf")?;
//!
//! let floors = client.get_tip_floors().await?;
//! println!("p75 tip: {} lamports", floors.landed_tips_lamports_75th_percentile);
//!
//! let bundle_id = client.send_bundle(&["<base58 signed tx>".to_string()]).await?;
//! let statuses = client.get_bundle_statuses(&[bundle_id]).await?;
//! println!("evaluated at slot {}", statuses.context_slot);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use log::{debug, info, warn};
use rand::seq::SliceRandom;
use serde_json::{Value, json};

use super::error::{Result, SearcherError};
use super::extract::decode_result;
use super::types::{BundleStatusesResponse, BundleStatusesResult, TipFloorRecord, TipFloorStatistics};
use crate::http::endpoint_url;
use crate::http::http_client::HttpClient;

/// Default host of the tip floor statistics endpoint.
pub const DEFAULT_TIP_FLOOR_URL: &str = "https://bundles.jito.wtf";

pub const BUNDLES_ENDPOINT: &str = "/api/v1/bundles";
pub const TRANSACTIONS_ENDPOINT: &str = "/api/v1/transactions";
pub const TIP_FLOOR_ENDPOINT: &str = "/api/v1/bundles/tip_floor";

const GET_BUNDLE_STATUSES: &str = "getBundleStatuses";
const GET_TIP_ACCOUNTS: &str = "getTipAccounts";
const SEND_BUNDLE: &str = "sendBundle";
const SEND_TRANSACTION: &str = "sendTransaction";

/// Optional settings for [`SearcherClient::with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Host serving `/api/v1/bundles/tip_floor`.
    pub tip_floor_url: String,
    /// Retries for transient failures. `0` sends every request exactly once.
    pub max_retries: u32,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            tip_floor_url: DEFAULT_TIP_FLOOR_URL.to_string(),
            max_retries: 0,
            timeout: None,
        }
    }
}

/// Client for one block engine.
///
/// The client holds no mutable state, so a single instance can be shared
/// between tasks (for example behind an `Arc`).
pub struct SearcherClient {
    http_client: HttpClient,
    tip_floor_url: String,
}

impl SearcherClient {
    /// Creates a client for the block engine at `block_engine_url`
    /// (e.g. `https://ny.mainnet.block-engine.jito.wtf`).
    ///
    /// # Errors
    ///
    /// Fails if the URL does not parse or the HTTP client cannot be built.
    pub fn new(block_engine_url: &str) -> Result<Self> {
        Self::with_options(block_engine_url, ClientOptions::default())
    }

    /// Creates a client with a custom statistics host, retry count or
    /// timeout.
    pub fn with_options(block_engine_url: &str, options: ClientOptions) -> Result<Self> {
        endpoint_url(&options.tip_floor_url, TIP_FLOOR_ENDPOINT)?;
        let http_client = HttpClient::with_config(block_engine_url, options.max_retries, options.timeout)?;
        Ok(Self {
            http_client,
            tip_floor_url: options.tip_floor_url,
        })
    }

    pub fn block_engine_url(&self) -> &str {
        self.http_client.base_url()
    }

    pub fn tip_floor_url(&self) -> &str {
        &self.tip_floor_url
    }

    /// Returns the status of up to five submitted bundles.
    ///
    /// The five id limit is enforced by the block engine, not here; a longer
    /// list fails with whatever error the block engine returns.
    pub async fn get_bundle_statuses(&self, bundle_ids: &[String]) -> Result<BundleStatusesResponse> {
        debug!(count = bundle_ids.len(); "Requesting bundle statuses");
        let response = self
            .http_client
            .send_rpc(BUNDLES_ENDPOINT, GET_BUNDLE_STATUSES, vec![json!(bundle_ids)])
            .await?;

        let result: BundleStatusesResult = decode_result(response, GET_BUNDLE_STATUSES)?;
        let response = BundleStatusesResponse::from(result);
        debug!(
            context_slot = response.context_slot,
            statuses = response.statuses.len();
            "Bundle statuses received"
        );
        Ok(response)
    }

    /// Returns the accounts that bundle tips must be paid to.
    pub async fn get_tip_accounts(&self) -> Result<Vec<String>> {
        debug!("Requesting tip accounts");
        let response = self
            .http_client
            .send_rpc(BUNDLES_ENDPOINT, GET_TIP_ACCOUNTS, Vec::new())
            .await?;
        decode_result(response, GET_TIP_ACCOUNTS)
    }

    /// Fetches the tip accounts and picks one at random, spreading tips
    /// across the whole set.
    pub async fn get_random_tip_account(&self) -> Result<String> {
        let accounts = self.get_tip_accounts().await?;
        accounts
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(SearcherError::NoTipAccounts)
    }

    /// Submits up to five base-58 encoded, fully signed transactions as one
    /// bundle and returns the bundle id.
    ///
    /// The bundle id is the SHA-256 of the transaction signatures as computed
    /// by the block engine; it is returned as-is.
    pub async fn send_bundle(&self, transactions: &[String]) -> Result<String> {
        info!(target: "searcher", size = transactions.len(); "Submitting bundle");
        let response = self
            .http_client
            .send_rpc(BUNDLES_ENDPOINT, SEND_BUNDLE, vec![json!(transactions)])
            .await?;

        let bundle_id: String = decode_result(response, SEND_BUNDLE)?;
        info!(target: "searcher", bundle_id = &*bundle_id; "Bundle accepted");
        Ok(bundle_id)
    }

    /// Sends one base-58 encoded transaction through the block engine's
    /// `sendTransaction` proxy.
    ///
    /// The block engine forwards the transaction to the leader as a regular
    /// transaction and also wraps it in a bundle with a minimum tip. The
    /// result is the transaction signature.
    pub async fn send_transaction(&self, transaction: &str) -> Result<String> {
        self.send_transaction_to(TRANSACTIONS_ENDPOINT, transaction).await
    }

    /// Like [`send_transaction`](Self::send_transaction), but asks the block
    /// engine to submit the transaction only as a bundle.
    pub async fn send_transaction_bundle_only(&self, transaction: &str) -> Result<String> {
        self.send_transaction_to(&format!("{TRANSACTIONS_ENDPOINT}?bundleOnly=true"), transaction)
            .await
    }

    async fn send_transaction_to(&self, endpoint: &str, transaction: &str) -> Result<String> {
        info!(target: "searcher", endpoint = endpoint; "Submitting transaction");
        let response = self
            .http_client
            .send_rpc(endpoint, SEND_TRANSACTION, vec![Value::from(transaction)])
            .await?;

        let signature: String = decode_result(response, SEND_TRANSACTION)?;
        info!(target: "searcher", signature = &*signature; "Transaction accepted");
        Ok(signature)
    }

    /// Returns the latest tip floor snapshot, amounts converted to lamports.
    ///
    /// The statistics host returns its newest record first; only that record
    /// is read.
    pub async fn get_tip_floors(&self) -> Result<TipFloorStatistics> {
        let url = endpoint_url(&self.tip_floor_url, TIP_FLOOR_ENDPOINT)?;
        let body = self.http_client.get_json(url).await?;

        let records = match body {
            Value::Array(records) => records,
            other => {
                warn!(body:% = other; "Tip floor response is not an array");
                return Err(SearcherError::parse("tip floor response", format!("expected an array, got {other}")));
            },
        };

        let first = records.into_iter().next().ok_or(SearcherError::NoData)?;
        let record: TipFloorRecord =
            serde_json::from_value(first).map_err(|e| SearcherError::parse("tip floor record", e))?;

        let statistics = TipFloorStatistics::from_record(&record)?;
        debug!(
            time = &*record.time,
            p50 = statistics.landed_tips_lamports_50th_percentile,
            p75 = statistics.landed_tips_lamports_75th_percentile;
            "Tip floor received"
        );
        Ok(statistics)
    }
}
