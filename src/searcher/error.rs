use serde_json::Value;
use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by [`SearcherClient`](super::SearcherClient) operations.
///
/// Nothing is retried or replaced by a default value; every failure is handed
/// straight back to the caller of the operation that hit it.
#[derive(Debug, Error)]
pub enum SearcherError {
    /// The request never produced a JSON document: network failure,
    /// non-success status, undecodable body or invalid URL.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] TransportError),

    /// The response has no `result` member, usually because the block engine
    /// answered with a JSON-RPC error object.
    #[error("Error in {method} response: {response}")]
    Protocol { method: String, response: Value },

    /// The response has a `result` member, but not of the expected shape.
    ///
    /// Like [`Protocol`](Self::Protocol), this is a protocol failure: the
    /// block engine answered, but not with what the method promises. Callers
    /// handling protocol errors should match both variants.
    #[error("Unexpected {method} result: {source}")]
    MalformedResult {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// The tip floor endpoint returned no records.
    #[error("No tip floor data available")]
    NoData,

    /// `getTipAccounts` returned an empty list, so there is no account to
    /// pick a tip recipient from.
    #[error("No tip accounts available")]
    NoTipAccounts,

    /// A timestamp or amount field is not in the expected format.
    #[error("Failed to parse {field}: {reason}")]
    Parse { field: String, reason: String },
}

impl SearcherError {
    pub(crate) fn parse(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearcherError>;
