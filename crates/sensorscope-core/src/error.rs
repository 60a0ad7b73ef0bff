//! Error types for the signal model and its configuration.

use thiserror::Error;

/// Signal-related errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("Noise amplitude {0} outside [{min}, {max}]", min = crate::model::AMPLITUDE_MIN, max = crate::model::AMPLITUDE_MAX)]
    AmplitudeOutOfRange(f64),

    #[error("Noise frequency {0} Hz outside [{min}, {max}]", min = crate::model::FREQUENCY_MIN, max = crate::model::FREQUENCY_MAX)]
    FrequencyOutOfRange(u32),

    #[error("Amplitude slider position {0} outside [{min}, {max}]", min = crate::model::AMPLITUDE_POSITION_MIN, max = crate::model::AMPLITUDE_POSITION_MAX)]
    SliderOutOfRange(u32),

    #[error("Signal lengths differ: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Operation requires a non-empty signal")]
    EmptySignal,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] SignalError),
}
