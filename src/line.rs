/*! A Gaussian line profile for frequency-dependent cross sections.

The profile peaks at `amplitude` when evaluated at `center` and falls
off with the usual `exp(-(x - center)^2 / (2 width^2))` shape. A width
of exactly zero divides by zero and propagates non-finite values; that
degenerate case is deliberately not guarded.

*/

/// Evaluate a Gaussian profile at `x`.
pub fn gaussian(x: f64, amplitude: f64, center: f64, width: f64) -> f64 {
    amplitude * (-(x - center).powi(2) / (2. * width * width)).exp()
}


/// Parameters of a Gaussian absorption line: the peak cross section
/// (cm^2), the line-center frequency, and the Gaussian width, with the
/// latter two in whatever frequency unit the caller's axis uses.
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct GaussianLine {
    amplitude: f64,
    center: f64,
    width: f64,
}

impl GaussianLine {
    /// Create a new line profile.
    pub fn new(amplitude: f64, center: f64, width: f64) -> Self {
        GaussianLine {
            amplitude: amplitude,
            center: center,
            width: width,
        }
    }

    /// The cross section at a single frequency.
    pub fn evaluate(&self, frequency: f64) -> f64 {
        gaussian(frequency, self.amplitude, self.center, self.width)
    }

    /// The cross section at each frequency of an axis, preserving the
    /// axis's order and length.
    pub fn sample(&self, frequencies: &[f64]) -> Vec<f64> {
        frequencies.iter().map(|&f| self.evaluate(f)).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_value_at_center() {
        for &width in &[0.5, 1., 10., -3.] {
            assert_eq!(gaussian(7., 2.5, 7., width), 2.5);
        }
    }

    #[test]
    fn test_symmetry_about_center() {
        let line = GaussianLine::new(1., 50., 10.);
        assert_eq!(line.evaluate(40.), line.evaluate(60.));
        assert_eq!(line.evaluate(0.), line.evaluate(100.));
    }

    #[test]
    fn test_half_width() {
        // One sigma off center the profile reads exp(-1/2).
        let line = GaussianLine::new(3., 0., 4.);
        assert_approx_eq!(line.evaluate(4.), 3. * (-0.5_f64).exp(), 1e-12);
    }

    /// A width of exactly zero divides by zero: NaN on the center
    /// sample, zero (from an underflowed exponential) everywhere else.
    #[test]
    fn test_zero_width_degenerates() {
        assert!(gaussian(5., 1., 5., 0.).is_nan());
        assert_eq!(gaussian(6., 1., 5., 0.), 0.);
    }

    #[test]
    fn test_sample_alignment() {
        let axis: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let line = GaussianLine::new(1., 30., 5.);
        let sigmas = line.sample(&axis);

        assert_eq!(sigmas.len(), axis.len());
        assert_eq!(sigmas[30], 1.);
        assert!(sigmas[0] < 1e-15);
    }
}
