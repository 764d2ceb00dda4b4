//! # Exit Terminal - Binary Entry
//!
//! Boots tracing, loads the theme configuration, and runs the eframe
//! window around [`App`].

use std::path::Path;

use egui_notify::Toasts;
use tracing_subscriber::EnvFilter;

use exit_terminal::app::{App, Screen};
use exit_terminal::ui::theme::{Theme, ThemeConfig};
use exit_terminal::ui::{screens, widgets};

const CONFIG_PATH: &str = "./exit-terminal-config.json";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = Path::new(CONFIG_PATH);
    let theme_config = ThemeConfig::load_from_file(config_path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme config, using defaults");
        ThemeConfig::default()
    });
    if !config_path.exists() {
        if let Err(e) = theme_config.save_to_file(config_path) {
            tracing::warn!(error = %e, "failed to write default theme config");
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([860.0, 560.0])
            .with_title("Exit Terminal"),
        ..Default::default()
    };

    eframe::run_native(
        "exit-terminal",
        options,
        Box::new(move |cc| {
            let theme = Theme::from_config(&theme_config);
            theme.apply(&cc.egui_ctx);
            Ok(Box::new(ExitTerminalApp::new(theme)))
        }),
    )
}

/// eframe wrapper around the application orchestrator.
struct ExitTerminalApp {
    app: App,
    theme: Theme,
    toasts: Toasts,
}

impl ExitTerminalApp {
    fn new(theme: Theme) -> Self {
        Self {
            app: App::new(),
            theme,
            toasts: Toasts::default(),
        }
    }

    fn drain_side_effects(&mut self, ctx: &egui::Context) {
        if let Some(text) = self.app.take_pending_clipboard() {
            ctx.copy_text(text);
        }

        for (level, message) in self.app.take_notifications() {
            match level.as_str() {
                "success" => {
                    self.toasts.success(message);
                }
                "error" => {
                    self.toasts.error(message);
                }
                _ => {
                    self.toasts.info(message);
                }
            }
        }
    }
}

impl eframe::App for ExitTerminalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        self.drain_side_effects(ctx);

        let state = self.app.state.read().clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            widgets::header::render(ui, &state, &mut self.app, &self.theme);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| match state.current_screen {
            Screen::Attach => screens::attach::render(ui, &state, &mut self.app, &self.theme),
            Screen::Dashboard => screens::dashboard::render(ui, &state, &mut self.app, &self.theme),
        });

        self.toasts.show(ctx);

        // keep draining the event channel while background work is pending
        if state.attach.loading || state.dashboard.fetching_assets {
            ctx.request_repaint_after(std::time::Duration::from_millis(150));
        } else if state.current_screen == Screen::Dashboard {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
