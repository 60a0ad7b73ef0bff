//! Signal model: time base, base signal, noise and the working result.

use log::debug;

use crate::config::SignalConfig;
use crate::error::SignalError;
use crate::ops;
use crate::waveform::{linspace, sample_rate, sine_at, sine_wave};

pub const AMPLITUDE_MIN: f64 = 0.1;
pub const AMPLITUDE_MAX: f64 = 10.0;
pub const FREQUENCY_MIN: u32 = 1;
pub const FREQUENCY_MAX: u32 = 50;

/// Amplitude slider positions; amplitude is position / 10
pub const AMPLITUDE_POSITION_MIN: u32 = 1;
pub const AMPLITUDE_POSITION_MAX: u32 = 100;

const AMPLITUDE_POSITION_SCALE: f64 = 10.0;

/// Parameters of the noise sinusoid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    amplitude: f64,
    frequency: u32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            amplitude: 3.0,
            frequency: 5,
        }
    }
}

impl NoiseParams {
    pub fn new(amplitude: f64, frequency: u32) -> Result<Self, SignalError> {
        Ok(Self {
            amplitude: validate_amplitude(amplitude)?,
            frequency: validate_frequency(frequency)?,
        })
    }

    /// Build from raw slider positions
    pub fn from_positions(amplitude_position: u32, frequency: u32) -> Result<Self, SignalError> {
        Self::new(amplitude_from_position(amplitude_position)?, frequency)
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Noise value at an arbitrary time
    pub fn sample(&self, t: f64) -> f64 {
        sine_at(t, self.amplitude, self.frequency as f64)
    }
}

/// Map an amplitude slider position to an amplitude
pub fn amplitude_from_position(position: u32) -> Result<f64, SignalError> {
    if !(AMPLITUDE_POSITION_MIN..=AMPLITUDE_POSITION_MAX).contains(&position) {
        return Err(SignalError::SliderOutOfRange(position));
    }
    Ok(position as f64 / AMPLITUDE_POSITION_SCALE)
}

fn validate_amplitude(amplitude: f64) -> Result<f64, SignalError> {
    // Small slack so position / 10 always lands inside the range
    const EPS: f64 = 1e-9;
    if !amplitude.is_finite() || amplitude < AMPLITUDE_MIN - EPS || amplitude > AMPLITUDE_MAX + EPS {
        return Err(SignalError::AmplitudeOutOfRange(amplitude));
    }
    Ok(amplitude)
}

fn validate_frequency(frequency: u32) -> Result<u32, SignalError> {
    if !(FREQUENCY_MIN..=FREQUENCY_MAX).contains(&frequency) {
        return Err(SignalError::FrequencyOutOfRange(frequency));
    }
    Ok(frequency)
}

/// Transitions on the result signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// result = base + noise
    Add,
    /// result = base * noise
    Multiply,
    /// result = same-mode convolution of base and noise
    Convolve,
    /// result = |DFT(result)|
    Dft,
    /// result = base
    Reset,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Multiply,
        Operation::Convolve,
        Operation::Dft,
        Operation::Reset,
    ];

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Multiply => "Multiply",
            Operation::Convolve => "Convolve",
            Operation::Dft => "Calculate DFT",
            Operation::Reset => "Reset",
        }
    }
}

/// Owned signal state.
///
/// Every buffer is built in [`SignalModel::new`], so there is no window in
/// which the noise or result signal can be read before it exists.
#[derive(Debug, Clone)]
pub struct SignalModel {
    time: Vec<f64>,
    sample_rate: f64,
    base: Vec<f64>,
    noise_params: NoiseParams,
    noise: Vec<f64>,
    result: Vec<f64>,
}

impl SignalModel {
    pub fn new(config: &SignalConfig) -> Result<Self, SignalError> {
        config.validate()?;

        let time = linspace(0.0, config.duration, config.samples);
        let sample_rate = sample_rate(&time).ok_or_else(|| {
            SignalError::InvalidConfig("time base must be strictly increasing".to_string())
        })?;
        let base = sine_wave(&time, 1.0, config.base_frequency);
        let noise_params = NoiseParams::from_positions(config.amplitude_position, config.frequency)?;
        let noise = sine_wave(&time, noise_params.amplitude, noise_params.frequency as f64);
        let result = base.clone();

        Ok(Self {
            time,
            sample_rate,
            base,
            noise_params,
            noise,
            result,
        })
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Samples per second of the time base
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn base(&self) -> &[f64] {
        &self.base
    }

    pub fn noise(&self) -> &[f64] {
        &self.noise
    }

    pub fn result(&self) -> &[f64] {
        &self.result
    }

    pub fn noise_params(&self) -> NoiseParams {
        self.noise_params
    }

    /// Replace the noise parameters and regenerate the noise signal.
    ///
    /// The result signal is left untouched.
    pub fn set_noise(&mut self, params: NoiseParams) {
        self.noise_params = params;
        self.noise = sine_wave(&self.time, params.amplitude, params.frequency as f64);
    }

    pub fn set_amplitude(&mut self, amplitude: f64) -> Result<(), SignalError> {
        let params = NoiseParams::new(amplitude, self.noise_params.frequency)?;
        self.set_noise(params);
        Ok(())
    }

    pub fn set_frequency(&mut self, frequency: u32) -> Result<(), SignalError> {
        let params = NoiseParams::new(self.noise_params.amplitude, frequency)?;
        self.set_noise(params);
        Ok(())
    }

    /// Apply an operation to the result signal
    pub fn apply(&mut self, op: Operation) -> Result<(), SignalError> {
        let next = match op {
            Operation::Add => ops::add(&self.base, &self.noise)?,
            Operation::Multiply => ops::multiply(&self.base, &self.noise)?,
            Operation::Convolve => ops::convolve_same(&self.base, &self.noise)?,
            Operation::Dft => ops::dft_magnitude(&self.result),
            Operation::Reset => self.base.clone(),
        };

        debug!("{:?}: result now {} samples", op, next.len());
        self.result = next;
        Ok(())
    }
}
