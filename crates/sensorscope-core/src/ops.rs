//! Elementary signal operations.
//!
//! All functions take borrowed slices and return freshly allocated output,
//! so the caller decides which buffer a result replaces.

use num_complex::Complex64;
use rustfft::FftPlanner;

use crate::error::SignalError;

fn check_lengths(a: &[f64], b: &[f64]) -> Result<(), SignalError> {
    if a.len() != b.len() {
        return Err(SignalError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Elementwise sum of two equal-length signals
pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>, SignalError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Elementwise product of two equal-length signals
pub fn multiply(a: &[f64], b: &[f64]) -> Result<Vec<f64>, SignalError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).collect())
}

/// Full linear convolution, length `a.len() + b.len() - 1`
pub fn convolve_full(a: &[f64], b: &[f64]) -> Result<Vec<f64>, SignalError> {
    if a.is_empty() || b.is_empty() {
        return Err(SignalError::EmptySignal);
    }

    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    Ok(out)
}

/// Linear convolution trimmed to the longer input's length.
///
/// The window starts at `(min(n, m) - 1) / 2` in the full convolution, so
/// the output is centered on the full result.
pub fn convolve_same(a: &[f64], b: &[f64]) -> Result<Vec<f64>, SignalError> {
    let full = convolve_full(a, b)?;
    let len = a.len().max(b.len());
    let offset = (a.len().min(b.len()) - 1) / 2;
    Ok(full[offset..offset + len].to_vec())
}

/// Magnitude of every bin of the full complex DFT.
///
/// Output has the same length as the input. An empty input yields an empty
/// output.
pub fn dft_magnitude(signal: &[f64]) -> Vec<f64> {
    if signal.is_empty() {
        return Vec::new();
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(signal.len());

    let mut buffer: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    fft.process(&mut buffer);

    buffer.iter().map(|c| c.norm()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_add_and_multiply() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.5, -1.0, 2.0];
        assert_eq!(add(&a, &b).unwrap(), vec![1.5, 1.0, 5.0]);
        assert_eq!(multiply(&a, &b).unwrap(), vec![0.5, -2.0, 6.0]);
    }

    #[test]
    fn test_length_mismatch() {
        let err = add(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, SignalError::LengthMismatch { left: 2, right: 1 });
        assert!(multiply(&[1.0], &[]).is_err());
    }

    #[test]
    fn test_convolve_full() {
        let out = convolve_full(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]).unwrap();
        assert_eq!(out, vec![0.0, 1.0, 2.5, 4.0, 1.5]);
    }

    #[test]
    fn test_convolve_same_odd_kernel() {
        let out = convolve_same(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5]).unwrap();
        assert_eq!(out, vec![1.0, 2.5, 4.0]);
    }

    #[test]
    fn test_convolve_same_even_kernel() {
        // Full result is [1, 3, 5, 7, 4]; offset (2 - 1) / 2 == 0
        let out = convolve_same(&[1.0, 2.0, 3.0, 4.0], &[1.0, 1.0]).unwrap();
        assert_eq!(out, vec![1.0, 3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_convolve_same_takes_longer_length() {
        let out = convolve_same(&[1.0, 1.0], &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn test_convolve_empty() {
        assert_eq!(convolve_same(&[], &[1.0]), Err(SignalError::EmptySignal));
    }

    #[test]
    fn test_dft_magnitude_impulse_is_flat() {
        let mag = dft_magnitude(&[1.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(mag.len(), 5);
        for m in mag {
            assert_abs_diff_eq!(m, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dft_magnitude_constant() {
        let mag = dft_magnitude(&[2.0; 8]);
        assert_abs_diff_eq!(mag[0], 16.0, epsilon = 1e-12);
        for &m in &mag[1..] {
            assert_abs_diff_eq!(m, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dft_magnitude_empty() {
        assert!(dft_magnitude(&[]).is_empty());
    }
}
