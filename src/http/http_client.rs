// Copyright 2025 The jito-searcher Authors
// SPDX-License-Identifier: BSD-3-Clause

use std::time::Duration;

use log::{debug, trace, warn};
use reqwest::Method;
use serde_json::Value;
use url::Url;

use super::error::TransportError;
use super::types::JsonRpcRequest;
use super::utils::endpoint_url;

/// Low-level JSON transport shared by every block engine operation.
///
/// One call to [`send_rpc`](Self::send_rpc) or [`get_json`](Self::get_json)
/// is one HTTP request, unless the caller opted into the retry layer.
pub(crate) struct HttpClient {
    base_url: String,
    client: reqwest_middleware::ClientWithMiddleware,
}

impl HttpClient {
    #[cfg(test)]
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_config(base_url, 0, None)
    }

    /// Builds the client. `max_retries == 0` attaches no retry middleware and
    /// `timeout == None` keeps reqwest's default.
    pub fn with_config(base_url: &str, max_retries: u32, timeout: Option<Duration>) -> Result<Self, TransportError> {
        Url::parse(base_url)?;

        let mut inner_builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            inner_builder = inner_builder.timeout(timeout);
        }
        let inner_client = inner_builder.build()?;

        let mut builder = reqwest_middleware::ClientBuilder::new(inner_client);
        if max_retries > 0 {
            let retry_policy =
                reqwest_retry::policies::ExponentialBackoff::builder().build_with_max_retries(max_retries);
            builder = builder.with(reqwest_retry::RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            client: builder.build(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs a JSON-RPC envelope for `method` to `<base_url>/<endpoint>` and
    /// returns the decoded response body.
    pub async fn send_rpc(&self, endpoint: &str, method: &str, params: Vec<Value>) -> Result<Value, TransportError> {
        let url = endpoint_url(&self.base_url, endpoint)?;
        let request = JsonRpcRequest::new(method, params);
        let body = serde_json::to_vec(&request).map_err(TransportError::EncodeError)?;

        debug!(method = method, url:% = url; "JSON-RPC request");
        self.send_request(Method::POST, url, Some(body)).await
    }

    /// GETs an absolute URL and returns the decoded response body.
    pub async fn get_json(&self, url: Url) -> Result<Value, TransportError> {
        debug!(url:% = url; "GET request");
        self.send_request(Method::GET, url, None).await
    }

    async fn send_request(&self, method: Method, url: Url, body: Option<Vec<u8>>) -> Result<Value, TransportError> {
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.body(body).header("Content-Type", "application/json");
        }

        let resp = req.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".into());
            warn!(status = status.as_u16(); "Request rejected by server");
            return Err(TransportError::ServerError { status, body });
        }

        let text = resp.text().await?;
        trace!(body = &*text; "Response body");
        serde_json::from_str(&text).map_err(TransportError::InvalidJson)
    }
}
