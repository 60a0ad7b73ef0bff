//! Event dispatch from the controls to the signal model.
//!
//! The GUI only produces [`ControlEvent`]s; [`Session::handle`] maps each
//! one to a transition on the owned [`SignalModel`] and then rebuilds the
//! [`Figure`]. Nothing here depends on a GUI toolkit.

use log::{debug, info};

use crate::config::SignalConfig;
use crate::error::SignalError;
use crate::figure::Figure;
use crate::model::{amplitude_from_position, Operation, SignalModel};
use crate::sensor::Sensor;

/// Input from one of the window's controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// Sensor dropdown changed
    SensorSelected(Sensor),
    /// Amplitude slider moved to a position in `1..=100`
    AmplitudeSlider(u32),
    /// Frequency slider moved to a value in `1..=50`
    FrequencySlider(u32),
    /// Operation or reset button clicked
    Apply(Operation),
}

/// Controller state: the model, control positions and the last figure
#[derive(Debug, Clone)]
pub struct Session {
    model: SignalModel,
    sensor: Sensor,
    amplitude_position: u32,
    figure: Figure,
    render_count: u64,
}

impl Session {
    /// Build the model and the first figure together
    pub fn new(config: &SignalConfig) -> Result<Self, SignalError> {
        let model = SignalModel::new(config)?;
        let figure = Figure::render(&model);
        info!(
            "Session ready: {} samples over {}s, noise {:.1} @ {} Hz",
            model.time().len(),
            config.duration,
            model.noise_params().amplitude(),
            model.noise_params().frequency()
        );

        Ok(Self {
            model,
            sensor: Sensor::default(),
            amplitude_position: config.amplitude_position,
            figure,
            render_count: 1,
        })
    }

    pub fn model(&self) -> &SignalModel {
        &self.model
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn sensor(&self) -> Sensor {
        self.sensor
    }

    pub fn amplitude_position(&self) -> u32 {
        self.amplitude_position
    }

    pub fn frequency(&self) -> u32 {
        self.model.noise_params().frequency()
    }

    /// Number of full renders since creation
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn amplitude_label(&self) -> String {
        format!("Noise Amplitude: {:.1}", self.model.noise_params().amplitude())
    }

    pub fn frequency_label(&self) -> String {
        format!("Noise Frequency (Hz): {}", self.frequency())
    }

    /// Dispatch one event.
    ///
    /// On success the figure is rebuilt, except for sensor selection which
    /// touches no signal. On error the session is unchanged.
    pub fn handle(&mut self, event: ControlEvent) -> Result<(), SignalError> {
        debug!("Dispatching {:?}", event);

        match event {
            ControlEvent::SensorSelected(sensor) => {
                self.sensor = sensor;
                return Ok(());
            }
            ControlEvent::AmplitudeSlider(position) => {
                let amplitude = amplitude_from_position(position)?;
                self.model.set_amplitude(amplitude)?;
                self.amplitude_position = position;
            }
            ControlEvent::FrequencySlider(frequency) => {
                self.model.set_frequency(frequency)?;
            }
            ControlEvent::Apply(op) => {
                self.model.apply(op)?;
            }
        }

        self.render();
        Ok(())
    }

    /// Rebuild all four panels from the model
    pub fn render(&mut self) {
        self.figure = Figure::render(&self.model);
        self.render_count += 1;
    }
}
