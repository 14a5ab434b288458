// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! Radiative transfer through a uniform slab.

The slab is characterized by a depth (in parsecs), a uniform particle
density (cm^-3), an interaction cross section (cm^2), and a constant
source function. Specific intensity entering one face is marched to the
other face with a forward-Euler discretization of `dI/dtau = S - I`,
using a fixed count of [`DEPTH_STEPS`] steps. The per-step optical-depth
increment is computed once from the cross section, density, and step
size and held constant across the slab.

There is no step-size adaptation and no stability check: parameter
combinations that make the per-step increment large diverge or overflow,
and a zero density propagates non-finite values through the column
density helpers. Both behaviors are intentional.

*/

use slog::Logger;

use super::parsecs_to_cm;

/// The fixed number of Euler steps taken through the slab.
pub const DEPTH_STEPS: usize = 100_000;

/// Compute the column density implied by a slab depth and a uniform
/// particle density.
///
/// The depth is in parsecs and the density in particles per cubic
/// centimeter. A zero density yields an infinite (or, with a zero
/// depth, NaN) column density per IEEE-754 division; no validation is
/// performed.
pub fn column_density(depth_pc: f64, density: f64) -> f64 {
    parsecs_to_cm(depth_pc) / density
}

/// Compute the interaction cross section that produces a given optical
/// depth across a slab of the given depth and density.
pub fn cross_section_for_optical_depth(optical_depth: f64, depth_pc: f64, density: f64) -> f64 {
    optical_depth / column_density(depth_pc, density)
}


/// Parameters of a uniform absorbing and emitting slab. See the
/// module-level documentation for details.
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct UniformSlab {
    depth_pc: f64,
    density: f64,
    cross_section: f64,
    source_function: f64,
}

impl UniformSlab {
    /// Create a new slab of the given depth (parsecs) and uniform
    /// particle density (cm^-3).
    ///
    /// The interaction cross section and the source function both
    /// default to zero, i.e. a transparent, non-emitting medium.
    pub fn new(depth_pc: f64, density: f64) -> Self {
        UniformSlab {
            depth_pc: depth_pc,
            density: density,
            cross_section: 0.,
            source_function: 0.,
        }
    }

    /// Set the interaction cross section of the slab material, in cm^2.
    pub fn cross_section(mut self, cross_section: f64) -> Self {
        self.cross_section = cross_section;
        self
    }

    /// Set the source function of the slab material.
    pub fn source_function(mut self, source_function: f64) -> Self {
        self.source_function = source_function;
        self
    }

    /// The column density implied by this slab's depth and density.
    pub fn column_density(&self) -> f64 {
        column_density(self.depth_pc, self.density)
    }

    /// The cross section that would give this slab the specified
    /// optical depth.
    pub fn cross_section_for_optical_depth(&self, optical_depth: f64) -> f64 {
        cross_section_for_optical_depth(optical_depth, self.depth_pc, self.density)
    }

    /// Propagate a specific intensity through the slab.
    ///
    /// Returns the intensity at each of the `DEPTH_STEPS + 1` sample
    /// points along the line of sight; the first element is
    /// `initial_intensity` itself at the entry face, the last is the
    /// emerging intensity. The full trace is returned so that callers
    /// can inspect how quickly the intensity relaxes toward the source
    /// function.
    pub fn propagate(&self, initial_intensity: f64, log: &Logger) -> Vec<f64> {
        trace!(log, "propagating intensity through slab";
               "depth_pc" => self.depth_pc,
               "density" => self.density,
               "cross_section" => self.cross_section,
               "source_function" => self.source_function,
               "initial_intensity" => initial_intensity,
        );

        let step_size = parsecs_to_cm(self.depth_pc) / DEPTH_STEPS as f64;
        let d_tau = self.cross_section * self.density * step_size;

        let mut intensities = Vec::with_capacity(DEPTH_STEPS + 1);
        intensities.push(initial_intensity);

        for step in 0..DEPTH_STEPS {
            let current = intensities[step];
            intensities.push(current + (self.source_function - current) * d_tau);
        }

        intensities
    }

    /// The intensity emerging from the far face of the slab.
    pub fn final_intensity(&self, initial_intensity: f64, log: &Logger) -> f64 {
        *self.propagate(initial_intensity, log).last().unwrap()
    }

    /// Propagate an intensity through the slab once per frequency
    /// sample, using the matching entry of `cross_sections` each time.
    ///
    /// The result is the emerging intensity at each frequency,
    /// index-aligned with `cross_sections`. Combined with
    /// [`GaussianLine::sample`](::line::GaussianLine::sample) this
    /// produces an emergent line spectrum.
    pub fn emergent_spectrum(&self, cross_sections: &[f64], initial_intensity: f64,
                             log: &Logger) -> Vec<f64> {
        cross_sections.iter()
            .map(|&sigma| self.cross_section(sigma).final_intensity(initial_intensity, log))
            .collect()
    }
}
