/*! Numerical cores for two classic radiative-process exercises.

The first model propagates specific intensity through a uniform absorbing
and emitting slab by forward-Euler integration of the radiative transfer
equation `dI/dtau = S - I`. A Gaussian line profile can supply a
frequency-dependent cross section, turning the single-ray integration
into an emergent line spectrum.

The second model follows a single electron past a charged nucleus under
the classical Coulomb force, again with a fixed-step Euler scheme, and
estimates the power spectrum of the resulting acceleration trace. That
spectrum is the textbook route to a free-free (bremsstrahlung) emission
profile for a single encounter.

Both integrators are deliberately bare fixed-step schemes: the point is
to expose the raw update rules to experimentation, not to hide them
behind an adaptive solver. Parameter combinations that make a step too
coarse diverge, and degenerate inputs (zero densities, zero line widths,
an electron sitting exactly on the nucleus) propagate IEEE-754
non-finite values through the outputs instead of being guarded.
Interactive front-ends are expected to call into this crate with scalar
parameters and plot the returned traces; the programs under `demos/`
are non-interactive stand-ins for such a caller.

*/

#![deny(missing_docs)]

extern crate rustfft;
#[macro_use] extern crate slog;

#[cfg(test)]
#[macro_use] extern crate assert_approx_eq;

use std::f64;

pub use f64::consts::PI;

/// Two times pi, as an `f64`.
pub const TWO_PI: f64 = 2. * PI;

/// The mass of the electron, in kilograms.
pub const ELECTRON_MASS: f64 = 9.109e-31;

/// The charge of the electron, in coulombs.
pub const ELECTRON_CHARGE: f64 = 1.602e-19;

/// The Coulomb force constant, in newton square meters per square
/// coulomb.
pub const COULOMB_CONSTANT: f64 = 8.987e9;

/// The number of centimeters in one parsec.
pub const CM_PER_PARSEC: f64 = 3.086e18;

/// The number of meters in one Bohr radius.
pub const METERS_PER_BOHR: f64 = 5.29e-11;

/// Convert a length in parsecs to centimeters.
pub fn parsecs_to_cm(parsecs: f64) -> f64 {
    parsecs * CM_PER_PARSEC
}

/// Convert a length in Bohr radii to meters.
pub fn bohr_to_meters(bohr_radii: f64) -> f64 {
    bohr_radii * METERS_PER_BOHR
}

pub mod coulomb;
pub mod line;
pub mod spectrum;
pub mod transfer;

pub use coulomb::{CoulombEncounter, Trajectory};
pub use line::GaussianLine;
pub use spectrum::{magnitude, power_spectral_density, sample_frequency};
pub use transfer::{UniformSlab, column_density, cross_section_for_optical_depth};
