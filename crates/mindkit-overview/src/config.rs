//! Overview panel configuration and theme.
//!
//! Defaults carry the editor's stock appearance: a pale blue panel with a
//! one-pixel sky-blue indicator outline, 200x150 panel. Stored as JSON next
//! to the rest of the editor preferences.

use std::path::Path;

use serde::{Deserialize, Serialize};

use mindkit_core::{ConfigError, Dimension, Result};

/// Default overview panel width, pixels.
pub const DEFAULT_PANEL_WIDTH: f64 = 200.0;
/// Default overview panel height, pixels.
pub const DEFAULT_PANEL_HEIGHT: f64 = 150.0;

/// Colors and stroke settings for the overview rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewTheme {
    /// Panel background color, `#rrggbb`.
    pub background: String,
    /// Indicator rectangle outline color, `#rrggbb`.
    pub indicator_outline: String,
    /// Indicator outline stroke width, pixels.
    pub outline_width: f64,
    /// Whether the scaled content copy is painted antialiased.
    pub antialias: bool,
}

impl Default for OverviewTheme {
    fn default() -> Self {
        Self {
            background: "#f9fcfe".to_string(),
            indicator_outline: "#44c0ff".to_string(),
            outline_width: 1.0,
            antialias: true,
        }
    }
}

/// Overview widget configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverviewConfig {
    /// Initial panel size; the live size tracks host resize events.
    pub panel: PanelSize,
    /// Rendering theme.
    pub theme: OverviewTheme,
}

/// Panel dimensions, kept as a named pair for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

impl Default for PanelSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_PANEL_WIDTH,
            height: DEFAULT_PANEL_HEIGHT,
        }
    }
}

impl From<PanelSize> for Dimension {
    fn from(size: PanelSize) -> Self {
        Dimension::new(size.width, size.height)
    }
}

impl OverviewConfig {
    /// Loads configuration from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Saves configuration to a JSON file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Parse)?;
        std::fs::write(path, content).map_err(ConfigError::Io)?;
        Ok(())
    }
}

/// Parses a `#rrggbb` hex color into an RGB triplet.
pub fn parse_hex_color(value: &str) -> Result<(u8, u8, u8)> {
    let invalid = || ConfigError::InvalidColor {
        value: value.to_string(),
    };

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 {
        return Err(invalid().into());
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
    Ok((r, g, b))
}
