//! # Navigation Handlers
//!
//! Handlers for screen changes, detaching, and outbound links.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::app::state::{AppState, Screen};
use crate::utils::address::{checksum, eip3770_prefix};

/// Switch the active screen.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();
    state.current_screen = screen;
}

/// Detach the current account and return to the attach screen.
pub(crate) fn handle_detach_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    tracing::info!(account = ?state.account, "detaching account");
    state.detach();
}

/// Open the Safe web app for the attached account in the browser, where
/// the exit module can be enabled.
pub(crate) fn handle_open_safe_app(state: Arc<RwLock<AppState>>) {
    let link = {
        let state = state.read();
        state.account.map(|account| {
            let prefix = eip3770_prefix(state.chain_id).unwrap_or("eth");
            format!(
                "https://app.safe.global/apps?safe={}:{}",
                prefix,
                checksum(&account)
            )
        })
    };

    let Some(link) = link else {
        return;
    };

    if let Err(error) = open::that(&link) {
        tracing::warn!(error = %error, link = %link, "failed to open browser");
        let mut state = state.write();
        state
            .pending_notifications
            .push(("error".to_string(), "Could not open the browser".to_string()));
    }
}
