// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/// Time the two fixed-step integrators and the spectral reduction.
///
/// The slab propagation always takes its full 100,000 steps. The
/// encounter benchmarks use a coarser step than the demos so that the
/// benchmarker's many repetitions stay tolerable.

#[macro_use] extern crate bencher;
extern crate bremslab;
#[macro_use] extern crate slog;

use bencher::Bencher;
use bremslab::{CoulombEncounter, UniformSlab, bohr_to_meters, power_spectral_density};


fn discard_log() -> slog::Logger {
    slog::Logger::root(slog::Discard, o!())
}


fn slab_propagate(b: &mut Bencher) {
    let log = discard_log();
    let slab = UniformSlab::new(100., 10.)
        .cross_section(1e-21)
        .source_function(127.);

    b.iter(|| {
        slab.propagate(15., &log)
    });
}

fn encounter_fire(b: &mut Bencher) {
    let log = discard_log();
    let encounter = CoulombEncounter::new(bohr_to_meters(500.), 1e5, bohr_to_meters(250.), 10.);
    let run_time = 3. * encounter.rough_orbit_time();
    let step_time = run_time * 1e-4;

    b.iter(|| {
        encounter.fire(run_time, step_time, &log)
    });
}

fn encounter_psd(b: &mut Bencher) {
    let log = discard_log();
    let encounter = CoulombEncounter::new(bohr_to_meters(500.), 1e5, bohr_to_meters(250.), 10.);
    let run_time = 3. * encounter.rough_orbit_time();
    let step_time = run_time * 1e-4;
    let traj = encounter.fire(run_time, step_time, &log);
    let acc = traj.acceleration_magnitude();

    b.iter(|| {
        power_spectral_density(&traj.times, &acc)
    });
}


benchmark_group!(integrators, slab_propagate, encounter_fire, encounter_psd);
benchmark_main!(integrators);
