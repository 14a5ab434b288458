// Copyright 2018 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the GPL version 3.

/// Propagate an intensity through one canned slab.
///
/// The parameters describe a moderately optically thick cloud, so the
/// emerging intensity lands most of the way from the input toward the
/// source function.

extern crate bremslab;
extern crate bremslab_test_support;

use bremslab::UniformSlab;

fn main() {
    const DEPTH_PC: f64 = 100.;
    const DENSITY: f64 = 10.;
    const CROSS_SECTION: f64 = 1e-21;
    const SOURCE_FUNCTION: f64 = 127.;
    const INITIAL_INTENSITY: f64 = 15.;

    let log = bremslab_test_support::default_log();

    let slab = UniformSlab::new(DEPTH_PC, DENSITY)
        .cross_section(CROSS_SECTION)
        .source_function(SOURCE_FUNCTION);

    let emerging = slab.final_intensity(INITIAL_INTENSITY, &log);

    println!("Column density: {:e}   Emerging intensity: {}",
             slab.column_density(), emerging);
}
