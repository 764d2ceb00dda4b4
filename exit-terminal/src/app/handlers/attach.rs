//! # Attach Handlers
//!
//! Handlers for the account attachment flow.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::services::api::ApiClient;
use crate::utils::address::parse_prefixed_address;

/// Update the account input field.
pub(crate) fn handle_account_input_change(state: Arc<RwLock<AppState>>, value: String) {
    let mut state = state.write();
    state.attach.account_input = value;
    // stale error goes away as soon as the user edits the address
    state.attach.invalid_safe = false;
}

/// Handle attach button click: validate the address, switch chains if the
/// input carries a prefix, and start the module probe.
pub(crate) fn handle_attach_click(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let input = { state.read().attach.account_input.clone() };

    let Some((address, prefixed_chain)) = parse_prefixed_address(&input) else {
        let mut state = state.write();
        state.attach.invalid_safe = true;
        return;
    };

    {
        let mut state = state.write();
        state.attach.loading = true;
        state.attach.invalid_safe = false;

        // a prefixed address names its chain; follow it
        if let Some(chain_id) = prefixed_chain {
            if chain_id != state.chain_id || state.api_client.is_none() {
                state.chain_id = chain_id;
                state.api_client = Some(Arc::new(ApiClient::new(chain_id)));
            }
        } else if state.api_client.is_none() {
            state.api_client = Some(Arc::new(ApiClient::new(state.chain_id)));
        }
    }

    tasks::module::detect(state, event_tx, address);
}
