//! # No-Module Card
//!
//! Shown when the attached account has no exit module enabled.

use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render the no-module explainer card
pub fn render(ui: &mut egui::Ui, app: &mut App, theme: &Theme) {
    ui.group(|ui| {
        ui.label("This account does not have the Exit module enabled.");
        ui.add_space(6.0);
        ui.hyperlink_to(
            "Read more about the Exit module here",
            "https://github.com/gnosis/zodiac-module-exit",
        );
    });
    ui.add_space(10.0);

    let button = forms::render_button(
        ui,
        "Add Exit Module",
        theme,
        Some(theme.accent.linear_multiply(0.3)),
        Some(egui::vec2(180.0, 28.0)),
    );
    if button.clicked() {
        app.handle_open_safe_app();
    }
}
