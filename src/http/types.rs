// Copyright 2025 The jito-searcher Authors
// SPDX-License-Identifier: BSD-3-Clause

use serde::Serialize;
use serde_json::Value;

pub const JSON_RPC_VERSION: &str = "2.0";
pub const JSON_RPC_REQUEST_ID: u64 = 1;

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Vec<Value>,
}

impl<'a> JsonRpcRequest<'a> {
    pub fn new(method: &'a str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION,
            id: JSON_RPC_REQUEST_ID,
            method,
            params,
        }
    }
}
