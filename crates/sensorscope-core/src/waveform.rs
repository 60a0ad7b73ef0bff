//! Time base and sinusoid generation.

use std::f64::consts::PI;

/// Evenly spaced samples over `[start, stop]`, both endpoints included.
///
/// A single sample yields `[start]`; zero samples yield an empty vector.
pub fn linspace(start: f64, stop: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    // Pin the last sample so the endpoint is exact
                    if i == n - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Value of `amplitude * sin(2π * frequency * t)`
#[inline]
pub fn sine_at(t: f64, amplitude: f64, frequency: f64) -> f64 {
    amplitude * (2.0 * PI * frequency * t).sin()
}

/// Sample a sinusoid over the given time base
pub fn sine_wave(time: &[f64], amplitude: f64, frequency: f64) -> Vec<f64> {
    time.iter()
        .map(|&t| sine_at(t, amplitude, frequency))
        .collect()
}

/// Sample rate implied by the spacing of the first two samples.
///
/// Returns `None` when the time base has fewer than two samples or is not
/// strictly increasing at its start.
pub fn sample_rate(time: &[f64]) -> Option<f64> {
    match time {
        [t0, t1, ..] if t1 > t0 => Some(1.0 / (t1 - t0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linspace_endpoints() {
        let t = linspace(0.0, 2.0, 1000);
        assert_eq!(t.len(), 1000);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[999], 2.0);
        assert_abs_diff_eq!(t[1] - t[0], 2.0 / 999.0, epsilon = 1e-15);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.5, 1.0, 1), vec![0.5]);
    }

    #[test]
    fn test_sine_at_quarter_period() {
        assert_abs_diff_eq!(sine_at(0.05, 3.0, 5.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sine_at(0.0, 3.0, 5.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_rate() {
        let t = linspace(0.0, 2.0, 1000);
        assert_abs_diff_eq!(sample_rate(&t).unwrap(), 499.5, epsilon = 1e-9);
        assert_eq!(sample_rate(&[1.0]), None);
        assert_eq!(sample_rate(&[1.0, 1.0]), None);
    }
}
