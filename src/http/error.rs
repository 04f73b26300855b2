//! Error types for the HTTP transport.
//!
//! This module defines [`TransportError`], which covers every way a request
//! to the block engine or the tip statistics host can fail before a JSON
//! document is in hand.

use thiserror::Error;

/// Errors that can occur while sending a request or decoding its body.
///
/// Every variant keeps the underlying cause so callers can log or match on
/// the exact failure.
///
/// # Error Categories
///
/// - **Network errors**: [`RequestFailed`](TransportError::RequestFailed),
///   [`MiddlewareError`](TransportError::MiddlewareError)
/// - **Server errors**: [`ServerError`](TransportError::ServerError)
/// - **Decoding errors**: [`InvalidJson`](TransportError::InvalidJson)
/// - **Client errors**: [`UrlError`](TransportError::UrlError),
///   [`EncodeError`](TransportError::EncodeError)
///
/// # Example
///
/// ```rust,no_run
/// use jito_searcher::http::TransportError;
///
/// fn handle_error(err: TransportError) {
///     match err {
///         TransportError::ServerError { status, body } => {
///             eprintln!("Block engine returned {}: {}", status, body);
///         }
///         TransportError::RequestFailed(e) => {
///             eprintln!("Network error: {}", e);
///         }
///         _ => eprintln!("Other error: {}", err),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request failed due to a network or connection error.
    ///
    /// Connection refused, DNS failure, TLS handshake errors and request
    /// timeouts all end up here.
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// An error occurred in the middleware layer.
    ///
    /// When the retry layer is enabled this may mean every attempt failed.
    #[error("Middleware error: {0}")]
    MiddlewareError(#[from] reqwest_middleware::Error),

    /// The server answered with a non-success HTTP status code.
    #[error("Server error {status}: {body}")]
    ServerError {
        /// The HTTP status code returned by the server.
        status: reqwest::StatusCode,
        /// The response body, which may contain error details.
        body: String,
    },

    /// The response body is not a JSON document.
    #[error("Invalid JSON response: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The request body could not be serialized.
    #[error("JSON serialization error: {0}")]
    EncodeError(#[source] serde_json::Error),

    /// The base URL, or the URL built from it, is not a valid URL.
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),
}
