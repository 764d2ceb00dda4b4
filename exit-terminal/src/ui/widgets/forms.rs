//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use crate::ui::theme::Theme;

/// Render a labelled single-line text input.
///
/// Returns the response of the edit widget; callers watch `changed()` and
/// push the new value through a handler rather than mutating state
/// in-place.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    width: f32,
) -> egui::Response {
    ui.label(label);
    ui.add_sized(
        [width, 22.0],
        egui::TextEdit::singleline(value).hint_text(hint),
    )
}

/// Render a styled button with an optional fill color
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    _theme: &Theme,
    fill_color: Option<egui::Color32>,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let mut button = egui::Button::new(text);

    if let Some(color) = fill_color {
        button = button.fill(color);
    }
    if let Some(size) = min_size {
        button = button.min_size(size);
    }

    ui.add(button)
}

/// Render a dimmed hint line
pub fn render_hint(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.colored_label(theme.dim, text);
}
