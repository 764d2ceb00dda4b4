//! # Exit Dashboard Screen
//!
//! Claim card on the left, assets table on the right. The attached
//! account's holdings refresh in the background; everything rendered here
//! comes from the memoized projection in state.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{assets_table, claim_card, no_module_card, tables};

/// Render the dashboard screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    egui::SidePanel::left("claim_panel")
        .resizable(false)
        .exact_width(300.0)
        .show_inside(ui, |ui| {
            ui.add_space(8.0);
            if state.exit_module.is_some() {
                claim_card::render(ui, state, app, theme);
            } else {
                no_module_card::render(ui, app, theme);
            }
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Assets");
            let selected = state.dashboard.selected_tokens.len();
            let total = state
                .dashboard
                .view
                .as_ref()
                .map(|view| view.rows.len())
                .unwrap_or(0);
            tables::render_stats_summary(ui, &[("Assets", total), ("Selected", selected)]);
        });
        ui.add_space(6.0);
        assets_table::render(ui, state, app, theme);
    });
}
