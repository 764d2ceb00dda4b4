//! # Balance Fetch Task
//!
//! Fetches the attached account's holdings from the balance service and
//! attaches per-token exit gas estimates before handing the snapshot to
//! the event channel.

use std::sync::Arc;

use async_channel::Sender;
use ethers_core::types::U256;
use parking_lot::RwLock;
use tracing::warn;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::SafeService;
use crate::utils::address::checksum;
use crate::utils::runtime::TOKIO_RT;

/// Flat gas-unit estimate for one token transfer inside an exit call.
const TRANSFER_GAS_UNITS: u64 = 60_000;

/// Fetch the holdings snapshot for the attached account.
///
/// A `fetching_assets` flag prevents task pileup when refreshes are
/// requested faster than the service answers.
pub(crate) fn fetch_assets(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let fetch_context = {
        let mut state = state.write();

        if state.dashboard.fetching_assets {
            return;
        }

        let Some(account) = state.account else {
            return;
        };
        let Some(api_client) = state.api_client.clone() else {
            return;
        };

        state.dashboard.fetching_assets = true;
        (api_client, state.chain_id, account)
    }; // lock released here

    let (api_client, chain_id, account) = fetch_context;

    TOKIO_RT.spawn(async move {
        let address = checksum(&account);
        let result = match api_client.safe_balances(chain_id, &address).await {
            Ok(mut assets) => {
                // attach per-token gas estimates; a failed gas-price fetch
                // leaves the zeros from the wire default in place
                match api_client.gas_price().await {
                    Ok(gas_price) => {
                        let per_token = gas_price.saturating_mul(U256::from(TRANSFER_GAS_UNITS));
                        for item in &mut assets.items {
                            item.gas = per_token.to_string();
                        }
                    }
                    Err(error) => {
                        warn!(error = %error, "gas price fetch failed, estimates left at zero");
                    }
                }
                Ok(assets)
            }
            Err(error) => Err(error),
        };

        let _ = event_tx.send(AppEvent::AssetsResult(result)).await;
    });
}
