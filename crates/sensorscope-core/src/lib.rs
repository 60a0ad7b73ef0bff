//! SensorScope core - synthetic sensor signals and elementary operations
//!
//! A fixed base sinusoid is overlaid with an adjustable noise sinusoid; a
//! working result signal is transformed by add, multiply, same-mode
//! convolution and DFT-magnitude operations.
//!
//! # Example
//!
//! ```
//! use sensorscope_core::{ControlEvent, Operation, Session, SignalConfig};
//!
//! let mut session = Session::new(&SignalConfig::default()).unwrap();
//! session.handle(ControlEvent::FrequencySlider(8)).unwrap();
//! session.handle(ControlEvent::Apply(Operation::Add)).unwrap();
//!
//! assert_eq!(session.frequency_label(), "Noise Frequency (Hz): 8");
//! assert_eq!(session.model().result().len(), 1000);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod figure;
pub mod model;
pub mod ops;
pub mod sensor;
pub mod spectrum;
pub mod waveform;

pub use config::SignalConfig;
pub use controller::{ControlEvent, Session};
pub use error::{ConfigError, SignalError};
pub use figure::{Figure, Panel, PanelKind};
pub use model::{NoiseParams, Operation, SignalModel};
pub use sensor::Sensor;
pub use spectrum::{magnitude_spectrum, Spectrum};
