//! # GUI Theme
//!
//! Dark theme with parchment-gold accents for egui. High contrast, flat
//! panels, monospace amounts.

use std::path::Path;

use egui::{Color32, Context, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Serializable theme configuration for persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Near-black background
    pub background: [u8; 3],
    /// Slightly raised panel fill
    pub panel: [u8; 3],
    /// Primary text
    pub text: [u8; 3],
    /// Secondary/dimmed text
    pub dim: [u8; 3],
    /// Parchment gold (primary accent)
    pub accent: [u8; 3],
    /// Highlight for selected rows and headers
    pub selected: [u8; 3],
    /// Success green
    pub success: [u8; 3],
    /// Error red
    pub error: [u8; 3],
    /// Warning amber
    pub warning: [u8; 3],
    /// Panel borders
    pub border: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: [16, 20, 24],
            panel: [24, 30, 36],
            text: [236, 233, 216],
            dim: [140, 138, 125],
            accent: [217, 212, 173],
            selected: [217, 212, 173],
            success: [98, 190, 120],
            error: [224, 84, 84],
            warning: [235, 180, 80],
            border: [58, 62, 58],
        }
    }
}

impl ThemeConfig {
    /// Load theme configuration from a JSON file.
    ///
    /// A missing file yields the default theme.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ThemeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save theme configuration to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Runtime color palette resolved from a [`ThemeConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color32,
    pub panel: Color32,
    pub text: Color32,
    pub dim: Color32,
    pub accent: Color32,
    pub selected: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_config(&ThemeConfig::default())
    }
}

fn color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Theme {
            background: color(config.background),
            panel: color(config.panel),
            text: color(config.text),
            dim: color(config.dim),
            accent: color(config.accent),
            selected: color(config.selected),
            success: color(config.success),
            error: color(config.error),
            warning: color(config.warning),
            border: color(config.border),
        }
    }

    /// Apply the palette to the egui context.
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(self.text);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.panel;
        visuals.extreme_bg_color = self.panel;
        visuals.selection.bg_fill = self.selected.linear_multiply(0.25);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.hyperlink_color = self.accent;
        ctx.set_visuals(visuals);
    }
}
