//! # Attach Account Screen
//!
//! Entry screen: paste an account address (optionally EIP-3770 prefixed),
//! probe it for an exit module, and move to the dashboard.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, layouts};
use crate::utils::validation::validate_account_input;

/// Render the attach screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    layouts::render_centered(ui, |ui| {
        ui.add_space(80.0);
        ui.heading("Attach an Exit enabled account");
        ui.add_space(8.0);
        ui.label(
            "Once an account is attached, you will be able to select the assets to claim \
             and pull them from it, in proportion to the amount of a designated token you hold.",
        );
        ui.add_space(16.0);

        let mut account_input = state.attach.account_input.clone();
        let response = forms::render_text_input(
            ui,
            "Account address",
            &mut account_input,
            "0x59C945953C10AbC7f3716a8cECd09b5eb4d865Ca",
            360.0,
        );
        if response.changed() {
            app.handle_account_input_change(account_input.clone());
        }
        ui.add_space(12.0);

        let input_valid = validate_account_input(&state.attach.account_input).is_valid;
        let enabled = input_valid && !state.attach.loading;
        let label = if state.attach.loading {
            "Attaching account..."
        } else {
            "Attach Account"
        };
        let button = ui.add_enabled(
            enabled,
            egui::Button::new(label).min_size(egui::vec2(360.0, 30.0)),
        );
        if button.clicked() {
            app.handle_attach_click();
        }
        if state.attach.loading {
            ui.add_space(6.0);
            ui.spinner();
        }

        if state.attach.invalid_safe {
            ui.add_space(12.0);
            ui.colored_label(
                theme.error,
                "The address you entered is not a module-bearing Safe account",
            );
        }
    });
}
