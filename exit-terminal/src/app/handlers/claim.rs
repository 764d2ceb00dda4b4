//! # Claim Handlers
//!
//! Handlers for the claim input and the exit action.

use std::sync::Arc;

use ethers_core::types::{Address, U256};
use ethers_core::utils::format_units;
use parking_lot::RwLock;

use crate::app::state::AppState;
use crate::claim;
use crate::services::exit::encode_exit;
use crate::services::module::ModuleKind;
use crate::utils::validation::{validate_claim_amount, validate_token_id};

/// Update the claim input, validating as the user types.
pub(crate) fn handle_claim_input_change(state: Arc<RwLock<AppState>>, value: String) {
    let mut state = state.write();

    let error = match &state.exit_module {
        None => None,
        Some(module) => {
            if value.trim().is_empty() {
                None
            } else {
                let result = match module.kind {
                    ModuleKind::Erc20 => validate_claim_amount(
                        &value,
                        module
                            .designated_token_decimals
                            .unwrap_or(claim::rows::CLAIM_RATE_DECIMALS),
                        Some(module.circulating_supply),
                    ),
                    ModuleKind::Erc721 => validate_token_id(&value),
                };
                result.error
            }
        }
    };

    state.dashboard.claim_input = value;
    state.dashboard.claim_error = error;
}

/// Fill the claim input with the full circulating supply (ERC-20 only).
pub(crate) fn handle_max_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let Some(module) = &state.exit_module else {
        return;
    };
    if module.kind != ModuleKind::Erc20 {
        return;
    }

    let decimals = module
        .designated_token_decimals
        .unwrap_or(claim::rows::CLAIM_RATE_DECIMALS);
    let Ok(rendered) = format_units(module.circulating_supply, decimals) else {
        return;
    };
    // plain decimal without trailing zeros
    let trimmed = rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string();
    state.dashboard.claim_input = if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed
    };
    state.dashboard.claim_error = None;
}

/// Build the exit calldata for the current claim and selection.
///
/// The payload is placed on the clipboard for submission by the user's
/// wallet; nothing is sent on-chain from here.
pub(crate) fn handle_exit_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();

    let Some(module) = state.exit_module.clone() else {
        return;
    };

    let amount = match module.kind {
        ModuleKind::Erc20 => claim::parse_claim_amount(
            &state.dashboard.claim_input,
            module
                .designated_token_decimals
                .unwrap_or(claim::rows::CLAIM_RATE_DECIMALS),
        ),
        ModuleKind::Erc721 => U256::from_dec_str(state.dashboard.claim_input.trim()).ok(),
    };
    let Some(amount) = amount else {
        state
            .pending_notifications
            .push(("error".to_string(), "Enter a valid claim amount".to_string()));
        return;
    };

    let tokens: Vec<Address> = state
        .dashboard
        .selected_tokens
        .iter()
        .filter_map(|address| address.parse().ok())
        .collect();
    if tokens.is_empty() {
        state.pending_notifications.push((
            "error".to_string(),
            "Select at least one asset to claim".to_string(),
        ));
        return;
    }

    let calldata = encode_exit(amount, &tokens);
    tracing::info!(
        module = ?module.address,
        tokens = tokens.len(),
        "exit calldata built"
    );

    state.pending_clipboard = Some(calldata.to_string());
    state.pending_notifications.push((
        "success".to_string(),
        format!(
            "Exit data for {} asset(s) copied to clipboard",
            tokens.len()
        ),
    ));
}
