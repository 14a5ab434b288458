// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/// Crank out scattering summaries for random encounter parameters.
///
/// Runs forever, appending one line per encounter to the output file:
/// the sampled parameters, the final speed and direction of the
/// electron, the spectral bin with the most power, and the runtime.

extern crate bremslab;
extern crate bremslab_test_support;
extern crate clap;

use bremslab::{CoulombEncounter, bohr_to_meters, power_spectral_density};
use bremslab_test_support::Sampler;
use std::fs::OpenOptions;
use std::io::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let matches = clap::App::new("crank-out-encounters")
        .version("0.1.0")
        .about("Crank out summaries for random Coulomb encounter parameters")
        .arg(clap::Arg::with_name("OUTFILE")
             .help("The path of the output file to create")
             .required(true)
             .index(1))
        .arg(clap::Arg::with_name("V_MIN")
             .help("The minimum firing speed to generate (m/s)")
             .required(true)
             .index(2))
        .arg(clap::Arg::with_name("V_MAX")
             .help("The maximum firing speed to generate (m/s)")
             .required(true)
             .index(3))
        .arg(clap::Arg::with_name("Z_MIN")
             .help("The minimum nucleus charge to generate")
             .required(true)
             .index(4))
        .arg(clap::Arg::with_name("Z_MAX")
             .help("The maximum nucleus charge to generate")
             .required(true)
             .index(5))
        .get_matches();

    let outfile = PathBuf::from(matches.value_of_os("OUTFILE").unwrap());

    let v_sampler = Sampler::new(
        true,
        matches.value_of("V_MIN").unwrap().parse::<f64>().unwrap(),
        matches.value_of("V_MAX").unwrap().parse::<f64>().unwrap());
    let z_sampler = Sampler::new(
        false,
        matches.value_of("Z_MIN").unwrap().parse::<f64>().unwrap(),
        matches.value_of("Z_MAX").unwrap().parse::<f64>().unwrap());
    let geom_sampler = Sampler::new(true, 1., 1000.);

    let log = bremslab_test_support::default_log();

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(true)
        .open(outfile)
        .unwrap();

    writeln!(file, "# d(log,a0) b(log,a0) v(log) Z(lin) !speed angle peak_freq time_ms")
        .expect("write error");

    loop {
        let distance = geom_sampler.get();
        let impact = geom_sampler.get();
        let velocity = v_sampler.get();
        let charge = z_sampler.get();

        let encounter = CoulombEncounter::new(
            bohr_to_meters(distance),
            velocity,
            bohr_to_meters(impact),
            charge,
        );

        let run_time = 3. * encounter.rough_orbit_time();
        let step_time = run_time * 1e-5;

        let t0 = Instant::now();
        let traj = encounter.fire(run_time, step_time, &log);
        let acc = traj.acceleration_magnitude();
        let (freqs, power) = power_spectral_density(&traj.times, &acc);
        let elapsed = t0.elapsed();
        let ms = elapsed.as_secs() as f64 * 1000. + elapsed.subsec_nanos() as f64 * 1e-6;

        let vx = *traj.x_velocity.last().unwrap();
        let vy = *traj.y_velocity.last().unwrap();
        let final_speed = (vx * vx + vy * vy).sqrt();
        let final_angle = vy.atan2(vx);

        let peak_freq = freqs.iter().zip(&power)
            .fold((0_f64, 0_f64), |best, (&f, &p)| if p > best.1 { (f, p) } else { best })
            .0;

        writeln!(file,
                 "{:.16e}\t{:.16e}\t{:.16e}\t{:.16e}\t{:.16e}\t{:.16e}\t{:.16e}\t{:.16e}",
                 distance, impact, velocity, charge,
                 final_speed, final_angle, peak_freq, ms
        ).expect("write error");
    }
}
