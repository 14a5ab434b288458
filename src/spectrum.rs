// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Spectral diagnostics for encounter traces.

The power spectral density estimator follows Welch's method: the signal
is split into half-overlapping segments of [`SEGMENT_LENGTH`] samples,
each segment has its mean removed and a periodic Hann window applied,
and the averaged, density-normalized periodograms of the segments form
a one-sided estimate. The segment length shrinks to the signal length
when the signal is shorter than one segment. The sampling frequency is
inferred from the median spacing of the time axis, which makes the
helper robust to a stray NaN timestamp.

The FFT itself is delegated to an external numerical library; the
segmentation, windowing, detrending, and normalization choices here are
the contract.

*/

use rustfft::FftPlanner;
use rustfft::num_complex::Complex64;

use super::TWO_PI;

/// The number of samples per Welch segment.
pub const SEGMENT_LENGTH: usize = 128;


/// The element-wise magnitude of a two-component vector sequence.
///
/// The inputs must be index-aligned; mismatched lengths are a caller
/// bug, not a recoverable condition.
pub fn magnitude(x_components: &[f64], y_components: &[f64]) -> Vec<f64> {
    assert_eq!(x_components.len(), y_components.len(),
               "component traces must be index-aligned");

    x_components.iter().zip(y_components)
        .map(|(&x, &y)| (x * x + y * y).sqrt())
        .collect()
}


/// The sampling frequency implied by a time axis: the reciprocal of
/// the median spacing between successive samples.
///
/// NaN spacings are excluded from the median; if nothing remains (an
/// axis with fewer than two samples, or all-NaN spacings) the result
/// is NaN.
pub fn sample_frequency(times: &[f64]) -> f64 {
    let mut deltas: Vec<f64> = times.windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| !d.is_nan())
        .collect();

    if deltas.is_empty() {
        return f64::NAN;
    }

    deltas.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let n = deltas.len();
    let median = if n % 2 == 1 {
        deltas[n / 2]
    } else {
        0.5 * (deltas[n / 2 - 1] + deltas[n / 2])
    };

    1. / median
}


/// Estimate the one-sided power spectral density of a signal with
/// Welch's method.
///
/// `times` supplies the sampling frequency via [`sample_frequency`];
/// `values` is the signal, index-aligned with `times`. Returns
/// `(frequencies, power)` of equal length `nperseg / 2 + 1`, where
/// `nperseg` is [`SEGMENT_LENGTH`] or the signal length, whichever is
/// smaller. Power is in (signal units)^2 per hertz, linear scale;
/// log-log plotting is the caller's business.
pub fn power_spectral_density(times: &[f64], values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    welch(values, sample_frequency(times), SEGMENT_LENGTH)
}


fn hann_window(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 0.5 * (1. - (TWO_PI * i as f64 / n as f64).cos()))
        .collect()
}


fn welch(values: &[f64], fs: f64, segment_length: usize) -> (Vec<f64>, Vec<f64>) {
    let nperseg = segment_length.min(values.len()).max(1);
    let step = nperseg - nperseg / 2;
    let window = hann_window(nperseg);
    let window_power: f64 = window.iter().map(|w| w * w).sum();

    let out_len = nperseg / 2 + 1;
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(nperseg);

    let mut power = vec![0_f64; out_len];
    let mut num_segments = 0;

    let mut start = 0;
    while start + nperseg <= values.len() {
        let segment = &values[start..start + nperseg];

        // Constant detrend: each segment loses its own mean before
        // windowing.
        let mean = segment.iter().sum::<f64>() / nperseg as f64;
        let mut buf: Vec<Complex64> = segment.iter().zip(&window)
            .map(|(&v, &w)| Complex64::new((v - mean) * w, 0.))
            .collect();

        fft.process(&mut buf);

        for i in 0..out_len {
            power[i] += buf[i].norm_sqr();
        }

        num_segments += 1;
        start += step;
    }

    // Density normalization, averaged over segments, with the interior
    // bins doubled to fold the negative frequencies into the one-sided
    // estimate. The Nyquist bin only exists (and only stays single)
    // for an even segment length.
    let scale = 1. / (fs * window_power * num_segments as f64);

    for i in 0..out_len {
        power[i] *= scale;

        if i > 0 && !(nperseg % 2 == 0 && i == out_len - 1) {
            power[i] *= 2.;
        }
    }

    let frequencies = (0..out_len)
        .map(|i| i as f64 * fs / nperseg as f64)
        .collect();

    (frequencies, power)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_hypotenuse() {
        assert_eq!(magnitude(&[3.], &[4.]), vec![5.]);
        assert_eq!(magnitude(&[0., -6.], &[0., 8.]), vec![0., 10.]);
    }

    #[test]
    #[should_panic(expected = "index-aligned")]
    fn test_magnitude_rejects_mismatched_lengths() {
        magnitude(&[1., 2.], &[1.]);
    }

    #[test]
    fn test_sample_frequency_median_spacing() {
        assert_eq!(sample_frequency(&[0., 1., 2., 5.]), 1.);
        assert_approx_eq!(sample_frequency(&[0., 0.25, 0.5, 0.75]), 4., 1e-9);
    }

    #[test]
    fn test_sample_frequency_skips_nan_spacings() {
        assert_eq!(sample_frequency(&[0., 1., f64::NAN, 3.]), 1.);
        assert!(sample_frequency(&[0.]).is_nan());
        assert!(sample_frequency(&[f64::NAN, f64::NAN]).is_nan());
    }

    #[test]
    fn test_psd_output_shape() {
        let times: Vec<f64> = (0..1024).map(|i| i as f64 * 1e-3).collect();
        let values: Vec<f64> = times.iter().map(|&t| (400. * t).sin()).collect();

        let (freqs, power) = power_spectral_density(&times, &values);

        assert_eq!(freqs.len(), SEGMENT_LENGTH / 2 + 1);
        assert_eq!(power.len(), freqs.len());
        assert_eq!(freqs[0], 0.);
    }

    /// A constant signal is pure mean; the per-segment detrend removes
    /// all of it.
    #[test]
    fn test_constant_signal_has_no_power() {
        let times: Vec<f64> = (0..512).map(|i| i as f64 * 0.01).collect();
        let values = vec![7.5; 512];

        let (_, power) = power_spectral_density(&times, &values);

        for &p in &power {
            assert!(p.abs() < 1e-20);
        }
    }

    #[test]
    fn test_tone_peaks_at_its_frequency() {
        // 32 Hz tone sampled at 256 Hz: with 128-sample segments the
        // tone lands exactly on bin 16.
        let fs = 256.;
        let tone = 32.;
        let times: Vec<f64> = (0..2048).map(|i| i as f64 / fs).collect();
        let values: Vec<f64> = times.iter().map(|&t| (TWO_PI * tone * t).sin()).collect();

        let (freqs, power) = power_spectral_density(&times, &values);

        let peak = power.iter().enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap().0;
        assert_approx_eq!(freqs[peak], tone, 1e-9);
    }

    /// Signals shorter than one segment fall back to a single
    /// whole-signal segment.
    #[test]
    fn test_short_signal_shrinks_the_segment() {
        let times: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let values: Vec<f64> = (0..50).map(|i| (i % 5) as f64).collect();

        let (freqs, power) = power_spectral_density(&times, &values);

        assert_eq!(freqs.len(), 50 / 2 + 1);
        assert_eq!(power.len(), freqs.len());
    }

    /// Parseval-style check: for a sine of amplitude 1 the integrated
    /// one-sided density recovers the signal variance of 1/2.
    #[test]
    fn test_density_normalization() {
        let fs = 256.;
        let times: Vec<f64> = (0..4096).map(|i| i as f64 / fs).collect();
        let values: Vec<f64> = times.iter().map(|&t| (TWO_PI * 32. * t).sin()).collect();

        let (freqs, power) = power_spectral_density(&times, &values);

        let df = freqs[1] - freqs[0];
        let total: f64 = power.iter().sum::<f64>() * df;
        assert_approx_eq!(total, 0.5, 0.01);
    }
}
