// Copyright 2025 The jito-searcher Authors
// SPDX-License-Identifier: BSD-3-Clause

// Response types for the block engine and tip floor endpoints.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use super::amount::{AmountParseError, sol_to_lamports};
use super::error::{Result, SearcherError};
use crate::utils::timestamp::parse_utc_timestamp;

/// Landing status of one submitted bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleStatus {
    pub bundle_id: String,
    pub transactions: Vec<String>,
    pub slot: u64,
    /// `processed`, `confirmed`, `finalized`, ... as reported upstream.
    pub confirmation_status: String,
    /// On-chain execution error, empty when there is none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub err: Map<String, Value>,
}

/// Answer to a `getBundleStatuses` query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleStatusesResponse {
    /// Slot at which the block engine evaluated the query.
    pub context_slot: u64,
    /// Statuses in the order the block engine returned them.
    pub statuses: Vec<BundleStatus>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RpcContext {
    pub slot: u64,
}

/// `result` member of a `getBundleStatuses` response.
#[derive(Debug, Deserialize)]
pub(crate) struct BundleStatusesResult {
    pub context: RpcContext,
    pub value: Vec<BundleStatus>,
}

impl From<BundleStatusesResult> for BundleStatusesResponse {
    fn from(result: BundleStatusesResult) -> Self {
        Self {
            context_slot: result.context.slot,
            statuses: result.value,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A SOL amount as the tip floor endpoint sends it: decimal text or a JSON
/// number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum SolAmount {
    Text(String),
    Number(Number),
}

impl SolAmount {
    pub fn to_lamports(&self) -> std::result::Result<u64, AmountParseError> {
        match self {
            SolAmount::Text(text) => sol_to_lamports(text),
            SolAmount::Number(number) => sol_to_lamports(&number.to_string()),
        }
    }
}

/// One record of the tip floor endpoint, amounts still in SOL.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TipFloorRecord {
    pub time: String,
    pub landed_tips_25th_percentile: SolAmount,
    pub landed_tips_50th_percentile: SolAmount,
    pub landed_tips_75th_percentile: SolAmount,
    pub landed_tips_95th_percentile: SolAmount,
    pub landed_tips_99th_percentile: SolAmount,
    pub ema_landed_tips_50th_percentile: SolAmount,
}

/// Snapshot of recently landed tips, in lamports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipFloorStatistics {
    pub time: DateTime<Utc>,
    pub landed_tips_lamports_25th_percentile: u64,
    pub landed_tips_lamports_50th_percentile: u64,
    pub landed_tips_lamports_75th_percentile: u64,
    pub landed_tips_lamports_95th_percentile: u64,
    pub landed_tips_lamports_99th_percentile: u64,
    pub ema_landed_tips_lamports_50th_percentile: u64,
}

/// Selects one of the statistics in [`TipFloorStatistics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TipPercentile {
    P25,
    P50,
    P75,
    P95,
    P99,
    Ema50,
}

impl TipPercentile {
    pub const ALL: [TipPercentile; 6] = [
        TipPercentile::P25,
        TipPercentile::P50,
        TipPercentile::P75,
        TipPercentile::P95,
        TipPercentile::P99,
        TipPercentile::Ema50,
    ];
}

impl Display for TipPercentile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TipPercentile::P25 => write!(f, "p25"),
            TipPercentile::P50 => write!(f, "p50"),
            TipPercentile::P75 => write!(f, "p75"),
            TipPercentile::P95 => write!(f, "p95"),
            TipPercentile::P99 => write!(f, "p99"),
            TipPercentile::Ema50 => write!(f, "ema p50"),
        }
    }
}

impl TipFloorStatistics {
    pub(crate) fn from_record(record: &TipFloorRecord) -> Result<Self> {
        let time = parse_utc_timestamp(&record.time).map_err(|e| SearcherError::parse("time", e))?;

        let lamports = |field: &str, amount: &SolAmount| {
            amount.to_lamports().map_err(|e| SearcherError::parse(field, e))
        };

        Ok(Self {
            time,
            landed_tips_lamports_25th_percentile: lamports(
                "landed_tips_25th_percentile",
                &record.landed_tips_25th_percentile,
            )?,
            landed_tips_lamports_50th_percentile: lamports(
                "landed_tips_50th_percentile",
                &record.landed_tips_50th_percentile,
            )?,
            landed_tips_lamports_75th_percentile: lamports(
                "landed_tips_75th_percentile",
                &record.landed_tips_75th_percentile,
            )?,
            landed_tips_lamports_95th_percentile: lamports(
                "landed_tips_95th_percentile",
                &record.landed_tips_95th_percentile,
            )?,
            landed_tips_lamports_99th_percentile: lamports(
                "landed_tips_99th_percentile",
                &record.landed_tips_99th_percentile,
            )?,
            ema_landed_tips_lamports_50th_percentile: lamports(
                "ema_landed_tips_50th_percentile",
                &record.ema_landed_tips_50th_percentile,
            )?,
        })
    }

    pub fn lamports(&self, percentile: TipPercentile) -> u64 {
        match percentile {
            TipPercentile::P25 => self.landed_tips_lamports_25th_percentile,
            TipPercentile::P50 => self.landed_tips_lamports_50th_percentile,
            TipPercentile::P75 => self.landed_tips_lamports_75th_percentile,
            TipPercentile::P95 => self.landed_tips_lamports_95th_percentile,
            TipPercentile::P99 => self.landed_tips_lamports_99th_percentile,
            TipPercentile::Ema50 => self.ema_landed_tips_lamports_50th_percentile,
        }
    }
}
