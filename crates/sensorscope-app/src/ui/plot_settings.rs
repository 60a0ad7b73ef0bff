//! Plot settings and style configuration.

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Display toggles shared by all four panels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotSettings {
    /// Show grid
    #[serde(default = "default_true")]
    pub show_grid: bool,

    /// Show a legend naming each trace
    #[serde(default)]
    pub show_legend: bool,

    /// Trace stroke width in points
    #[serde(default = "default_line_width")]
    pub line_width: f32,
}

fn default_true() -> bool {
    true
}

fn default_line_width() -> f32 {
    1.5
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_legend: false,
            line_width: default_line_width(),
        }
    }
}

/// Convert an RGB triple to an egui color
pub fn to_color32([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plot_settings() {
        let settings = PlotSettings::default();
        assert!(settings.show_grid);
        assert!(!settings.show_legend);
        assert_eq!(settings.line_width, 1.5);
    }

    #[test]
    fn test_plot_settings_serialization() {
        let settings = PlotSettings {
            show_grid: false,
            show_legend: true,
            line_width: 3.0,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: PlotSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, settings);
    }

    #[test]
    fn test_missing_fields_default() {
        let settings: PlotSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, PlotSettings::default());
    }

    #[test]
    fn test_to_color32() {
        assert_eq!(to_color32([255, 0, 0]), Color32::RED);
        assert_eq!(to_color32([0, 0, 0]), Color32::BLACK);
    }
}
