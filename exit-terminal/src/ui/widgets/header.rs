//! # Header Bar
//!
//! Top bar: app title on the left, attached-account context and actions on
//! the right.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::utils::address::{checksum, eip3770_prefix};

/// Render the header bar
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.colored_label(theme.accent, "EXIT TERMINAL");
        ui.colored_label(theme.dim, state.current_screen.title());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(account) = &state.account {
                if ui.button("Detach").clicked() {
                    app.handle_detach_click();
                }

                if state.current_screen == Screen::Dashboard {
                    let refreshing = state.dashboard.fetching_assets;
                    if refreshing {
                        ui.spinner();
                    } else if ui.button("Refresh").clicked() {
                        app.handle_refresh_click();
                    }

                    if let Some(at) = &state.dashboard.last_assets_update {
                        ui.colored_label(
                            theme.dim,
                            format!("updated {}", at.format("%H:%M:%S")),
                        );
                    }
                }

                let prefix = eip3770_prefix(state.chain_id).unwrap_or("eth");
                ui.monospace(format!(
                    "{}:{}",
                    prefix,
                    shared::utils::truncate_address(&checksum(account))
                ));
            }
        });
    });
}
