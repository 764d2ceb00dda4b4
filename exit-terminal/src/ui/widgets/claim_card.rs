//! # Claim Card
//!
//! Claim input for the designated token: amount entry (or token id for
//! ERC-721 modules), the derived claim rate, and the exit action.

use ethers_core::utils::format_units;

use crate::app::{App, AppState};
use crate::services::module::ModuleKind;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::utils::address::checksum;
use crate::utils::format::format_balance;

/// Render the claim card for an account with an exit module
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(module) = &state.exit_module else {
        return;
    };

    ui.heading("Claim");
    ui.add_space(4.0);
    forms::render_hint(
        ui,
        "Redeem designated tokens to claim a proportional share of the selected assets.",
        theme,
    );
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        ui.label("Designated token:");
        ui.monospace(shared::utils::truncate_address(&checksum(
            &module.designated_token,
        )));
        let kind = match module.kind {
            ModuleKind::Erc20 => "ERC-20",
            ModuleKind::Erc721 => "ERC-721",
        };
        ui.colored_label(theme.dim, kind);
    });

    let supply = match module.kind {
        ModuleKind::Erc20 => {
            let decimals = module.designated_token_decimals.unwrap_or(18);
            format_units(module.circulating_supply, decimals)
                .ok()
                .and_then(|rendered| rendered.parse::<f64>().ok())
                .map(format_balance)
                .unwrap_or_else(|| "?".to_string())
        }
        ModuleKind::Erc721 => module.circulating_supply.to_string(),
    };
    ui.horizontal(|ui| {
        ui.label("Circulating supply:");
        ui.monospace(supply);
    });
    ui.add_space(10.0);

    let label = match module.kind {
        ModuleKind::Erc20 => "Amount to redeem",
        ModuleKind::Erc721 => "Token id to redeem",
    };
    let mut claim_input = state.dashboard.claim_input.clone();
    ui.horizontal(|ui| {
        let response = forms::render_text_input(ui, label, &mut claim_input, "0", 150.0);
        if response.changed() {
            app.handle_claim_input_change(claim_input.clone());
        }
        if module.kind == ModuleKind::Erc20 && ui.small_button("Max").clicked() {
            app.handle_max_click();
        }
    });

    if let Some(error) = &state.dashboard.claim_error {
        ui.colored_label(theme.error, error);
    }
    ui.add_space(8.0);

    let claim_rate = state.claim_rate();
    ui.horizontal(|ui| {
        ui.label("Claim rate:");
        ui.monospace(format!("{:.4}%", claim_rate * 100.0));
    });

    if let Some(view) = &state.dashboard.view {
        ui.horizontal(|ui| {
            ui.label("Claiming:");
            ui.monospace(format!(
                "{} asset(s), ~${}",
                view.totals.count, view.totals.claimable.fiat
            ));
        });
    }
    ui.add_space(12.0);

    let ready = claim_rate > 0.0
        && state.dashboard.claim_error.is_none()
        && !state.dashboard.selected_tokens.is_empty();
    let button = forms::render_button(
        ui,
        "Exit",
        theme,
        Some(theme.accent.linear_multiply(0.3)),
        Some(egui::vec2(160.0, 28.0)),
    );
    if button.clicked() && ready {
        app.handle_exit_click();
    }
    if !ready {
        forms::render_hint(
            ui,
            "Enter a claim amount and select assets to enable the exit.",
            theme,
        );
    }
}
