//! # Layout Helpers

/// Render content horizontally centered with breathing room above
pub fn render_centered<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) {
    ui.vertical_centered(|ui| {
        ui.set_max_width(440.0);
        add_contents(ui);
    });
}
