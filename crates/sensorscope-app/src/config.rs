//! Application configuration, read once at startup.

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use sensorscope_core::{ConfigError, SignalConfig};

use crate::ui::PlotSettings;

/// Environment variable naming an optional JSON configuration file
pub const CONFIG_ENV_VAR: &str = "SENSORSCOPE_CONFIG";

/// Signal and display settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub signal: SignalConfig,
    pub plot: PlotSettings,
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.signal.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or use defaults when
    /// the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                info!("Loading configuration from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => {
                info!("Using default configuration");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensorscope_core::SignalError;

    #[test]
    fn test_empty_document_is_default() {
        let config = AppConfig::from_json_str("{}").unwrap();
        assert_eq!(config.signal, SignalConfig::default());
        assert!(config.plot.show_grid);
    }

    #[test]
    fn test_nested_sections() {
        let json = r#"{
            "signal": { "amplitude_position": 55 },
            "plot": { "show_legend": true, "line_width": 2.5 }
        }"#;
        let config = AppConfig::from_json_str(json).unwrap();
        assert_eq!(config.signal.amplitude_position, 55);
        assert_eq!(config.signal.frequency, 5);
        assert!(config.plot.show_legend);
        assert_eq!(config.plot.line_width, 2.5);
    }

    #[test]
    fn test_invalid_signal_section() {
        let err = AppConfig::from_json_str(r#"{ "signal": { "frequency": 80 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(SignalError::FrequencyOutOfRange(80))
        ));
    }
}
