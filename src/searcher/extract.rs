use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{Result, SearcherError};

/// Returns the `result` member of a JSON-RPC response, unchanged.
///
/// Anything without a `result` member, including JSON-RPC error objects and
/// non-object bodies, becomes [`SearcherError::Protocol`] carrying the method
/// name and the full response.
pub fn extract_result(response: Value, method: &str) -> Result<Value> {
    match response {
        Value::Object(mut fields) if fields.contains_key("result") => {
            Ok(fields.remove("result").unwrap_or(Value::Null))
        },
        response => Err(SearcherError::Protocol {
            method: method.to_string(),
            response,
        }),
    }
}

/// Extracts `result` and decodes it into `T`.
pub fn decode_result<T: DeserializeOwned>(response: Value, method: &str) -> Result<T> {
    let result = extract_result(response, method)?;
    serde_json::from_value(result).map_err(|source| SearcherError::MalformedResult {
        method: method.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_is_returned_unchanged() {
        let result = extract_result(json!({"jsonrpc": "2.0", "id": 1, "result": {"a": [1, 2]}}), "m").unwrap();
        assert_eq!(result, json!({"a": [1, 2]}));
    }

    #[test]
    fn null_result_is_still_a_result() {
        assert_eq!(extract_result(json!({"result": null}), "m").unwrap(), Value::Null);
    }

    #[test]
    fn missing_result_names_method_and_embeds_response() {
        let response = json!({"error": {"code": -1, "message": "bad"}});
        let err = extract_result(response.clone(), "getTipAccounts").unwrap_err();

        let message = err.to_string();
        assert!(message.contains("getTipAccounts"));
        assert!(message.contains(&response.to_string()));
        assert!(matches!(err, SearcherError::Protocol { ref method, .. } if method == "getTipAccounts"));
    }

    #[test]
    fn non_object_response_is_protocol_error() {
        let err = extract_result(json!(["result"]), "sendBundle").unwrap_err();
        assert!(matches!(err, SearcherError::Protocol { .. }));
    }

    #[test]
    fn wrong_shape_is_malformed_result() {
        let err = decode_result::<String>(json!({"result": 42}), "sendBundle").unwrap_err();
        assert!(matches!(err, SearcherError::MalformedResult { ref method, .. } if method == "sendBundle"));
    }
}
