//! # Service Trait
//!
//! The seam between async tasks and the network. Tasks and the module
//! detection logic are written against [`SafeService`] so they can run
//! against the real [`ApiClient`](crate::services::api::ApiClient) in the
//! app and against a scripted stub in tests.

use async_trait::async_trait;
use ethers_core::types::{Address, Bytes, U256};
use shared::dto::safe::SafeAssets;

/// Network operations the application depends on.
#[async_trait]
pub trait SafeService: Send + Sync {
    /// Fetch the token holdings of an account from the balance service.
    async fn safe_balances(&self, chain_id: u64, address: &str) -> Result<SafeAssets, String>;

    /// Execute a read-only contract call against the latest block.
    async fn eth_call(&self, to: Address, data: Bytes) -> Result<Bytes, String>;

    /// Current gas price in wei.
    async fn gas_price(&self) -> Result<U256, String>;
}
