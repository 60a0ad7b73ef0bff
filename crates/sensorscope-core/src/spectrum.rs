//! One-sided magnitude spectrum for display.

use num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;

/// Frequency-domain view of a real signal
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    /// Bin center frequencies in Hz, `0..=N/2`
    pub frequencies: Vec<f64>,
    /// Window-normalized magnitude per bin
    pub magnitudes: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequency of the largest bin, if any
    pub fn peak_frequency(&self) -> Option<f64> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| self.frequencies[i])
    }
}

/// Symmetric Hann window of length `n`
pub fn hann_window(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![1.0],
        n => (0..n)
            .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / (n - 1) as f64).cos())
            .collect(),
    }
}

/// Compute the magnitude spectrum of `signal` sampled at `sample_rate` Hz.
///
/// The signal is Hann-windowed and transformed at its own length (no
/// padding); the one-sided magnitudes are divided by the window sum so a
/// pure tone reads as roughly half its amplitude.
///
/// Inputs shorter than two samples produce an empty spectrum.
pub fn magnitude_spectrum(signal: &[f64], sample_rate: f64) -> Spectrum {
    let n = signal.len();
    if n < 2 {
        return Spectrum::default();
    }

    let window = hann_window(n);
    let window_sum: f64 = window.iter().sum();

    let mut buffer: Vec<Complex64> = signal
        .iter()
        .zip(&window)
        .map(|(&x, &w)| Complex64::new(x * w, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    let num_freqs = n / 2 + 1;
    let resolution = sample_rate / n as f64;

    Spectrum {
        frequencies: (0..num_freqs).map(|k| k as f64 * resolution).collect(),
        magnitudes: buffer[..num_freqs]
            .iter()
            .map(|c| c.norm() / window_sum)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::{linspace, sample_rate, sine_wave};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hann_window_shape() {
        let w = hann_window(5);
        assert_abs_diff_eq!(w[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w[2], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w[4], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w[1], w[3], epsilon = 1e-12);
    }

    #[test]
    fn test_spectrum_bins() {
        let time = linspace(0.0, 2.0, 1000);
        let fs = sample_rate(&time).unwrap();
        let spectrum = magnitude_spectrum(&sine_wave(&time, 1.0, 10.0), fs);

        assert_eq!(spectrum.len(), 501);
        assert_abs_diff_eq!(spectrum.frequencies[0], 0.0);
        assert_abs_diff_eq!(spectrum.frequencies[500], fs / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_spectrum_peak_at_tone() {
        let time = linspace(0.0, 2.0, 1000);
        let fs = sample_rate(&time).unwrap();
        let spectrum = magnitude_spectrum(&sine_wave(&time, 1.0, 10.0), fs);

        let resolution = fs / 1000.0;
        let peak = spectrum.peak_frequency().unwrap();
        assert_abs_diff_eq!(peak, 10.0, epsilon = resolution);

        // Unit tone, Hann window normalized by its sum: about 0.5 at the peak
        let max_mag = spectrum.magnitudes.iter().cloned().fold(0.0f64, f64::max);
        assert!(max_mag > 0.4 && max_mag < 0.55, "peak magnitude {max_mag}");
    }

    #[test]
    fn test_spectrum_short_input() {
        assert!(magnitude_spectrum(&[], 100.0).is_empty());
        assert!(magnitude_spectrum(&[1.0], 100.0).is_empty());
        assert_eq!(magnitude_spectrum(&[1.0], 100.0).peak_frequency(), None);
    }
}
