//! # Assets Table
//!
//! The claimable-assets table: select-all header, one row per token with
//! gas/holding/claimable columns, a sortable claimable column, and the
//! totals footer. Rows and totals come pre-computed from the memoized
//! projection; this widget only renders and dispatches clicks.

use egui::RichText;

use crate::app::{App, AppState};
use crate::claim::SortOrder;
use crate::ui::theme::Theme;
use crate::ui::widgets::tables::{self, TableConfig};

fn amount_text(value: &str, unit: &str, fiat: &str) -> String {
    format!("{} {}  ${}", value, unit, fiat)
}

/// Render the assets table
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let Some(view) = &state.dashboard.view else {
        tables::render_empty_state(ui, "Loading assets...", None, theme);
        return;
    };

    if view.rows.is_empty() {
        if state.dashboard.fetching_assets {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.colored_label(theme.dim, "Loading assets...");
            });
        } else {
            tables::render_empty_state(
                ui,
                "No assets found",
                Some("The attached account holds no claimable tokens"),
                theme,
            );
        }
        return;
    }

    let rows = &view.rows;
    let totals = &view.totals;
    let selected = &state.dashboard.selected_tokens;
    let native_symbol = state
        .dashboard
        .assets
        .native_token()
        .map(|token| token.token_info.symbol.clone())
        .unwrap_or_else(|| "ETH".to_string());

    let config = TableConfig {
        num_columns: 5,
        spacing: [14.0, 8.0],
        striped: true,
        scrollable: true,
    };

    tables::render_table(
        ui,
        "assets_table",
        config,
        theme,
        |ui| {
            // Header row
            let mut all_selected =
                rows.iter().all(|row| selected.contains(&row.address));
            if ui.checkbox(&mut all_selected, "").changed() {
                app.handle_select_all(all_selected);
            }
            ui.colored_label(theme.selected, "Asset");
            ui.colored_label(theme.selected, "Gas cost");
            ui.colored_label(theme.selected, "Holdings");
            let arrow = match state.dashboard.sort {
                SortOrder::Ascending => "^",
                SortOrder::Descending => "v",
            };
            if ui
                .button(RichText::new(format!("Claimable {}", arrow)).color(theme.selected))
                .clicked()
            {
                app.handle_sort_toggle();
            }
            ui.end_row();

            // Data rows; unselected rows render dimmed
            for row in rows {
                let is_selected = selected.iter().any(|address| address == &row.address);
                let text_color = if is_selected { theme.text } else { theme.dim };

                let mut checked = is_selected;
                if ui.checkbox(&mut checked, "").changed() {
                    app.handle_row_click(&row.address);
                }

                if ui
                    .selectable_label(
                        is_selected,
                        RichText::new(&row.symbol).color(text_color),
                    )
                    .clicked()
                {
                    app.handle_row_click(&row.address);
                }

                ui.colored_label(
                    text_color,
                    RichText::new(amount_text(&row.gas.value, "gwei", &row.gas.fiat))
                        .monospace(),
                );
                ui.colored_label(
                    text_color,
                    RichText::new(amount_text(&row.holding.value, &row.symbol, &row.holding.fiat))
                        .monospace(),
                );
                ui.colored_label(
                    text_color,
                    RichText::new(amount_text(
                        &row.claimable.value,
                        &row.symbol,
                        &row.claimable.fiat,
                    ))
                    .monospace(),
                );
                ui.end_row();
            }

            // Totals footer
            ui.colored_label(theme.accent, "Σ");
            ui.colored_label(theme.text, format!("{} tokens", totals.count));
            ui.colored_label(
                theme.text,
                RichText::new(amount_text(&totals.gas.value, "gwei", &totals.gas.fiat))
                    .monospace(),
            );
            ui.colored_label(
                theme.text,
                RichText::new(format!(
                    "~{}",
                    amount_text(&totals.holding.value, &native_symbol, &totals.holding.fiat)
                ))
                .monospace(),
            );
            ui.colored_label(
                theme.text,
                RichText::new(format!(
                    "~{}",
                    amount_text(&totals.claimable.value, &native_symbol, &totals.claimable.fiat)
                ))
                .monospace(),
            );
            ui.end_row();
        },
    );
}
