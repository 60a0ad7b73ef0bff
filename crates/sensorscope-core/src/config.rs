//! Signal configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, SignalError};
use crate::model::{
    AMPLITUDE_POSITION_MAX, AMPLITUDE_POSITION_MIN, FREQUENCY_MAX, FREQUENCY_MIN,
};

/// Upper bound on the time base length; convolution is quadratic in it
pub const MAX_SAMPLES: usize = 100_000;

/// Time base, base signal and initial noise settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Number of samples in the time base
    pub samples: usize,

    /// Length of the time base in seconds
    pub duration: f64,

    /// Frequency of the base sinusoid in Hz
    pub base_frequency: f64,

    /// Initial amplitude slider position (amplitude = position / 10)
    pub amplitude_position: u32,

    /// Initial noise frequency in Hz
    pub frequency: u32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            samples: 1000,
            duration: 2.0,
            base_frequency: 10.0,
            amplitude_position: 30,
            frequency: 5,
        }
    }
}

impl SignalConfig {
    pub fn validate(&self) -> Result<(), SignalError> {
        if !(2..=MAX_SAMPLES).contains(&self.samples) {
            return Err(SignalError::InvalidConfig(format!(
                "samples must be in [2, {}], got {}",
                MAX_SAMPLES, self.samples
            )));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(SignalError::InvalidConfig(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }
        if !self.base_frequency.is_finite() {
            return Err(SignalError::InvalidConfig(
                "base_frequency must be finite".to_string(),
            ));
        }
        if !(AMPLITUDE_POSITION_MIN..=AMPLITUDE_POSITION_MAX).contains(&self.amplitude_position) {
            return Err(SignalError::SliderOutOfRange(self.amplitude_position));
        }
        if !(FREQUENCY_MIN..=FREQUENCY_MAX).contains(&self.frequency) {
            return Err(SignalError::FrequencyOutOfRange(self.frequency));
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SignalConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
