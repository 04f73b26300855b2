//! URL helpers for the HTTP transport.

use url::Url;

use super::error::TransportError;

/// Joins a base URL and an endpoint path with exactly one `/` between them.
///
/// All trailing slashes of `base` and all leading slashes of `endpoint` are
/// dropped first. Unlike [`Url::join`], any path already present on the base
/// (for example `https://host/api`) is kept.
pub fn join_url(base: &str, endpoint: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), endpoint.trim_start_matches('/'))
}

/// Joins `base` and `endpoint` (see [`join_url`]) and parses the result.
pub fn endpoint_url(base: &str, endpoint: &str) -> Result<Url, TransportError> {
    Ok(Url::parse(&join_url(base, endpoint))?)
}
