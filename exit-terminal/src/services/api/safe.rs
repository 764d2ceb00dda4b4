//! # Balance Service Endpoint
//!
//! Fetches an account's token holdings with fiat values from the Safe
//! balance service.

use shared::dto::safe::SafeAssets;

use super::client::ApiClient;

/// Get the USD-denominated balance snapshot for an account.
pub async fn get_safe_balances(
    client: &ApiClient,
    chain_id: u64,
    address: &str,
) -> Result<SafeAssets, String> {
    let url = format!(
        "{}/v1/chains/{}/safes/{}/balances/usd",
        ApiClient::gateway_url(),
        chain_id,
        address
    );

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status().is_success() {
        response
            .json::<SafeAssets>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(format!("Failed to fetch balances: {}", response.status()))
    }
}
