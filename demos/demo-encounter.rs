// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/// Fire one electron past a nucleus and print the spectrum of its
/// acceleration.
///
/// The run time is three times the rough orbital timescale of the
/// starting geometry, sliced into a million steps; these are the same
/// choices an interactive caller would make, so the output here is
/// directly comparable to a plotted session.

extern crate bremslab;
extern crate bremslab_test_support;
extern crate clap;

use bremslab::{CoulombEncounter, bohr_to_meters, power_spectral_density};
use std::time::Instant;

fn main() {
    let matches = clap::App::new("demo-encounter")
        .version("0.1.0")
        .about("Compute the acceleration spectrum of one Coulomb encounter")
        .arg(clap::Arg::with_name("DISTANCE")
             .help("The starting distance along x, in Bohr radii")
             .required(true)
             .index(1))
        .arg(clap::Arg::with_name("IMPACT")
             .help("The impact parameter, in Bohr radii")
             .required(true)
             .index(2))
        .arg(clap::Arg::with_name("VELOCITY")
             .help("The firing speed, in meters per second")
             .required(true)
             .index(3))
        .arg(clap::Arg::with_name("CHARGE")
             .help("The nucleus charge, in elementary charges")
             .required(true)
             .index(4))
        .get_matches();

    let distance = matches.value_of("DISTANCE").unwrap().parse::<f64>().unwrap();
    let impact = matches.value_of("IMPACT").unwrap().parse::<f64>().unwrap();
    let velocity = matches.value_of("VELOCITY").unwrap().parse::<f64>().unwrap();
    let charge = matches.value_of("CHARGE").unwrap().parse::<f64>().unwrap();

    let log = bremslab_test_support::default_log();

    let encounter = CoulombEncounter::new(
        bohr_to_meters(distance),
        velocity,
        bohr_to_meters(impact),
        charge,
    );

    let run_time = 3. * encounter.rough_orbit_time();
    let step_time = run_time * 1e-6;

    let t0 = Instant::now();
    let traj = encounter.fire(run_time, step_time, &log);
    let acc = traj.acceleration_magnitude();
    let (freqs, power) = power_spectral_density(&traj.times, &acc);
    let elapsed = t0.elapsed();
    let ms = elapsed.as_secs() as f64 * 1000. + elapsed.subsec_nanos() as f64 * 1e-6;

    eprintln!("# {} samples over {:.6e} s in {:.1} ms{}",
              traj.len(), traj.times.last().unwrap(), ms,
              if traj.collided() { "; collided with the nucleus" } else { "" });

    println!("freq(lin)\tpower(res)");

    for (&f, &p) in freqs.iter().zip(&power) {
        println!("{:.16e}\t{:.16e}", f, p);
    }
}
