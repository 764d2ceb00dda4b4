//! # Module Probe Task
//!
//! Runs the exit-module discovery for an account being attached.

use std::sync::Arc;

use async_channel::Sender;
use ethers_core::types::Address;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::services::module::detect_exit_module;
use crate::utils::runtime::TOKIO_RT;

/// Probe `account` for an exit module and report back via the event
/// channel.
pub(crate) fn detect(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    account: Address,
) {
    let api_client = { state.read().api_client.clone() };
    let Some(api_client) = api_client else {
        warn!("module probe requested without an API client");
        return;
    };

    TOKIO_RT.spawn(async move {
        let _ = event_tx
            .send(AppEvent::Loading(format!(
                "Checking {} for an exit module...",
                crate::utils::address::checksum(&account)
            )))
            .await;

        let result = detect_exit_module(api_client.as_ref(), account)
            .await
            .map_err(|error| error.to_string());

        match &result {
            Ok(Some(module)) => info!(module = ?module.address, "exit module found"),
            Ok(None) => info!(account = ?account, "no exit module enabled"),
            Err(error) => warn!(error = %error, "module probe failed"),
        }

        let _ = event_tx.send(AppEvent::ModuleResult { account, result }).await;
    });
}
