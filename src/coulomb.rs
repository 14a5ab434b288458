// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/*! A classical electron-nucleus Coulomb scattering encounter.

The nucleus sits fixed at the origin with a charge of `Z` elementary
charges; the electron starts at `(initial_distance, impact_parameter)`
in meters, moving in the negative-x direction. The equations of motion
are integrated with a fixed-step Euler scheme whose exact update order
matters and is part of the contract:

* the new position comes from the previous position and velocity;
* the new velocity comes from the previous velocity and acceleration;
* the new acceleration is evaluated at the *previous* position, one
  step behind the position it is stored alongside.

The lagged acceleration makes the scheme neither plain forward Euler
nor Euler-Cromer; it is preserved as-is rather than being upgraded to a
symplectic or Runge-Kutta integrator, because every stored trace value
depends on the ordering.

A run ends early only when a newly computed position is exactly the
origin, where the force law divides by zero. Any other close approach
sails through (possibly with violently wrong velocities, which is part
of the fun of a fixed-step scheme).

*/

use slog::Logger;

use spectrum;
use super::{COULOMB_CONSTANT, ELECTRON_CHARGE, ELECTRON_MASS, TWO_PI};


/// The acceleration of an electron at position `(x, y)` (meters)
/// relative to a nucleus of `nucleus_charge` elementary charges fixed
/// at the origin, in meters per second squared.
///
/// At the origin itself the inverse-cube factor divides by zero and
/// the components come back non-finite; the trajectory integrator
/// relies on its collision check rather than a guard here.
pub fn acceleration_at(nucleus_charge: f64, x: f64, y: f64) -> (f64, f64) {
    let r = (x * x + y * y).sqrt();
    let r_cubed = r.powi(3);

    let force_x = -(COULOMB_CONSTANT * nucleus_charge * ELECTRON_CHARGE.powi(2) / r_cubed) * x;
    let force_y = -(COULOMB_CONSTANT * nucleus_charge * ELECTRON_CHARGE.powi(2) / r_cubed) * y;

    (force_x / ELECTRON_MASS, force_y / ELECTRON_MASS)
}


/// The complete trace of one encounter.
///
/// The seven sequences are index-aligned: entry `i` of each describes
/// the electron at `times[i]`. Every run produces a fresh `Trajectory`;
/// nothing is reused or reset between runs.
#[derive(Clone,Debug,PartialEq)]
pub struct Trajectory {
    /// The simulated time of each sample, in seconds.
    pub times: Vec<f64>,

    /// The x coordinate of the electron at each sample, in meters.
    pub x_position: Vec<f64>,

    /// The y coordinate of the electron at each sample, in meters.
    pub y_position: Vec<f64>,

    /// The x velocity of the electron at each sample, in m/s.
    pub x_velocity: Vec<f64>,

    /// The y velocity of the electron at each sample, in m/s.
    pub y_velocity: Vec<f64>,

    /// The x acceleration at each sample, in m/s^2. Entry `i` for
    /// `i >= 1` is evaluated at the position of sample `i - 1`.
    pub x_acceleration: Vec<f64>,

    /// The y acceleration at each sample, in m/s^2, lagged the same
    /// way as `x_acceleration`.
    pub y_acceleration: Vec<f64>,
}

impl Trajectory {
    fn with_capacity(n: usize) -> Self {
        Trajectory {
            times: Vec::with_capacity(n),
            x_position: Vec::with_capacity(n),
            y_position: Vec::with_capacity(n),
            x_velocity: Vec::with_capacity(n),
            y_velocity: Vec::with_capacity(n),
            x_acceleration: Vec::with_capacity(n),
            y_acceleration: Vec::with_capacity(n),
        }
    }

    /// The number of samples in the trace.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the trace contains no samples. A completed run always
    /// contains at least the initial sample.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Whether the run ended by the electron landing exactly on the
    /// nucleus.
    pub fn collided(&self) -> bool {
        match (self.x_position.last(), self.y_position.last()) {
            (Some(&x), Some(&y)) => x == 0. && y == 0.,
            _ => false,
        }
    }

    /// The element-wise magnitude of the acceleration trace, the
    /// input to [`power_spectral_density`](::spectrum::power_spectral_density).
    pub fn acceleration_magnitude(&self) -> Vec<f64> {
        spectrum::magnitude(&self.x_acceleration, &self.y_acceleration)
    }
}


/// Initial conditions for a scattering encounter. See the module-level
/// documentation for the geometry.
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct CoulombEncounter {
    initial_distance: f64,
    initial_velocity: f64,
    impact_parameter: f64,
    nucleus_charge: f64,
}

impl CoulombEncounter {
    /// Set up an encounter.
    ///
    /// `initial_distance` and `impact_parameter` are in meters,
    /// `initial_velocity` in m/s (the electron is fired in the
    /// negative-x direction at this speed), and `nucleus_charge` in
    /// units of the elementary charge.
    pub fn new(initial_distance: f64, initial_velocity: f64, impact_parameter: f64,
               nucleus_charge: f64) -> Self {
        CoulombEncounter {
            initial_distance: initial_distance,
            initial_velocity: initial_velocity,
            impact_parameter: impact_parameter,
            nucleus_charge: nucleus_charge,
        }
    }

    /// The period of a circular orbit at the electron's starting
    /// radius and speed: `2 pi sqrt(d^2 + b^2) / v`.
    ///
    /// A handy timescale for choosing `run_time` and `step_time`; a
    /// few of these covers the interesting part of the encounter.
    pub fn rough_orbit_time(&self) -> f64 {
        let radius = (self.initial_distance.powi(2) + self.impact_parameter.powi(2)).sqrt();
        TWO_PI * radius / self.initial_velocity
    }

    /// Run the encounter and return its full trace.
    ///
    /// The number of steps is `run_time / step_time`, truncated toward
    /// zero. The returned trace holds one more sample than the number
    /// of steps executed; a run ends before the full count only when a
    /// newly computed position is exactly `(0, 0)` (bitwise
    /// floating-point equality, no tolerance), in which case that
    /// colliding sample is the last one recorded.
    pub fn fire(&self, run_time: f64, step_time: f64, log: &Logger) -> Trajectory {
        trace!(log, "firing electron";
               "initial_distance" => self.initial_distance,
               "initial_velocity" => self.initial_velocity,
               "impact_parameter" => self.impact_parameter,
               "nucleus_charge" => self.nucleus_charge,
               "run_time" => run_time,
               "step_time" => step_time,
        );

        let number_of_steps = (run_time / step_time) as usize;
        let mut traj = Trajectory::with_capacity(number_of_steps + 1);

        traj.times.push(0.);
        traj.x_position.push(self.initial_distance);
        traj.y_position.push(self.impact_parameter);
        traj.x_velocity.push(-self.initial_velocity);
        traj.y_velocity.push(0.);

        let (ax0, ay0) = acceleration_at(self.nucleus_charge,
                                         self.initial_distance, self.impact_parameter);
        traj.x_acceleration.push(ax0);
        traj.y_acceleration.push(ay0);

        for step in 1..(number_of_steps + 1) {
            let x = traj.x_position[step - 1];
            let y = traj.y_position[step - 1];
            let vx = traj.x_velocity[step - 1];
            let vy = traj.y_velocity[step - 1];
            let ax = traj.x_acceleration[step - 1];
            let ay = traj.y_acceleration[step - 1];

            let new_x = x + vx * step_time;
            let new_y = y + vy * step_time;
            let new_vx = vx + ax * step_time;
            let new_vy = vy + ay * step_time;

            // The acceleration stored with this sample is evaluated at
            // the position the electron is leaving, not the one it has
            // just reached.
            let (new_ax, new_ay) = acceleration_at(self.nucleus_charge, x, y);

            traj.times.push(step as f64 * step_time);
            traj.x_position.push(new_x);
            traj.y_position.push(new_y);
            traj.x_velocity.push(new_vx);
            traj.y_velocity.push(new_vy);
            traj.x_acceleration.push(new_ax);
            traj.y_acceleration.push(new_ay);

            // Collision sentinel: one more step would divide by zero.
            if new_x == 0. && new_y == 0. {
                break;
            }
        }

        traj
    }
}
