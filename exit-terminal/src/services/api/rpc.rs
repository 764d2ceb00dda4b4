//! # JSON-RPC Endpoint
//!
//! Minimal JSON-RPC 2.0 client over reqwest: `eth_call` for read-only
//! contract queries and `eth_gasPrice` for gas estimates. Only the two
//! methods the app needs are wired up.

use ethers_core::types::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::ApiClient;

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

async fn request(client: &ApiClient, method: &str, params: serde_json::Value) -> Result<String, String> {
    let body = RpcRequest {
        jsonrpc: "2.0",
        id: 1,
        method,
        params,
    };

    let response = client
        .client
        .post(client.rpc_url())
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("RPC request failed: {}", response.status()));
    }

    let parsed: RpcResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse RPC response: {}", e))?;

    if let Some(error) = parsed.error {
        return Err(format!("RPC error {}: {}", error.code, error.message));
    }

    parsed
        .result
        .and_then(|value| value.as_str().map(str::to_string))
        .ok_or_else(|| "Empty RPC result".to_string())
}

/// Execute a read-only contract call against the latest block.
pub async fn eth_call(client: &ApiClient, to: Address, data: &Bytes) -> Result<Bytes, String> {
    let result = request(
        client,
        "eth_call",
        json!([{ "to": to, "data": data }, "latest"]),
    )
    .await?;

    result
        .parse::<Bytes>()
        .map_err(|e| format!("Invalid call result: {}", e))
}

/// Current gas price in wei.
pub async fn gas_price(client: &ApiClient) -> Result<U256, String> {
    let result = request(client, "eth_gasPrice", json!([])).await?;
    let digits = result.trim_start_matches("0x");
    U256::from_str_radix(digits, 16).map_err(|e| format!("Invalid gas price: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_params_serialize_to_hex_strings() {
        let to: Address = "0x59C945953C10AbC7f3716a8cECd09b5eb4d865Ca"
            .parse()
            .unwrap();
        let data = Bytes::from(vec![0xcc, 0x2f, 0x84, 0x52]);
        let params = json!([{ "to": to, "data": data }, "latest"]);

        let call = &params[0];
        assert_eq!(
            call["to"],
            "0x59c945953c10abc7f3716a8cecd09b5eb4d865ca"
        );
        assert_eq!(call["data"], "0xcc2f8452");
        assert_eq!(params[1], "latest");
    }

    #[test]
    fn request_body_shape() {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "eth_gasPrice",
            params: json!([]),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["method"], "eth_gasPrice");
        assert!(value["params"].as_array().unwrap().is_empty());
    }
}
