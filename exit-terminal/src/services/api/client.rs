//! # API Client
//!
//! Main HTTP client for external service communication.

use async_trait::async_trait;
use ethers_core::types::{Address, Bytes, U256};
use reqwest::Client;
use shared::dto::safe::SafeAssets;

use crate::core::service::SafeService;

/// Base URL of the Safe balance service.
const GATEWAY_BASE_URL: &str = "https://safe-client.safe.global";

/// Public JSON-RPC endpoints per chain, used when `EXIT_RPC_URL` is unset.
const DEFAULT_RPC_URLS: &[(u64, &str)] = &[
    (1, "https://eth.llamarpc.com"),
    (10, "https://mainnet.optimism.io"),
    (100, "https://rpc.gnosischain.com"),
    (137, "https://polygon-rpc.com"),
    (11155111, "https://rpc.sepolia.org"),
];

/// HTTP client for the balance service and the JSON-RPC node.
///
/// Holds a single connection pool for both endpoints. The RPC endpoint is
/// resolved per chain at construction, so attaching an account on another
/// chain means building a fresh client.
pub struct ApiClient {
    pub(crate) client: Client,
    rpc_url: String,
}

impl ApiClient {
    /// Create a client for the given chain.
    ///
    /// Configured with a 10 second timeout to keep the UI responsive when
    /// an endpoint hangs.
    pub fn new(chain_id: u64) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        let rpc_url = std::env::var("EXIT_RPC_URL").unwrap_or_else(|_| {
            DEFAULT_RPC_URLS
                .iter()
                .find(|(id, _)| *id == chain_id)
                .map(|(_, url)| url.to_string())
                .unwrap_or_else(|| DEFAULT_RPC_URLS[0].1.to_string())
        });

        Self { client, rpc_url }
    }

    /// Base URL of the balance service.
    pub(crate) fn gateway_url() -> &'static str {
        GATEWAY_BASE_URL
    }

    /// JSON-RPC endpoint for the client's chain.
    pub(crate) fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait]
impl SafeService for ApiClient {
    async fn safe_balances(&self, chain_id: u64, address: &str) -> Result<SafeAssets, String> {
        crate::services::api::safe::get_safe_balances(self, chain_id, address).await
    }

    async fn eth_call(&self, to: Address, data: Bytes) -> Result<Bytes, String> {
        crate::services::api::rpc::eth_call(self, to, &data).await
    }

    async fn gas_price(&self) -> Result<U256, String> {
        crate::services::api::rpc::gas_price(self).await
    }
}
