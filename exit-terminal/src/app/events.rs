//! # Application Events
//!
//! Event types for async task communication between background tasks and
//! the main thread.

use ethers_core::types::Address;
use shared::dto::safe::SafeAssets;

use crate::services::module::ExitModule;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Exit-module probe finished for an account
    ModuleResult {
        account: Address,
        result: Result<Option<ExitModule>, String>,
    },
    /// Balance snapshot fetched (with gas estimates attached)
    AssetsResult(Result<SafeAssets, String>),
    /// Progress/status message for the notification area
    Loading(String),
}
