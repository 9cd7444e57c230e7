use std::time::Instant;

use crate::simulation::forces::{Acceleration, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::states::{Body, NVec3, System};

/// Build a deterministic N-body system, no rand needed.
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0e10,
            (i_f * 0.13).cos() * 5.0e10,
            (i_f * 0.07).sin() * 5.0e10,
        );

        bodies.push(Body {
            x,
            v: NVec3::zeros(),
            m: 1.0e24,
            name: format!("body-{i}"),
        });
    }

    System::new(bodies)
}

/// Time one full acceleration pass (the O(N^2) hot path) for growing N.
pub fn bench_gravity() {
    let ns = [50, 100, 200, 400, 800, 1600];
    let gravity = NewtonianGravity;

    for n in ns {
        let sys = make_system(n);
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity
            .accumulate_accels(&sys, &mut out)
            .expect("bench system has no coincident bodies");

        let t0 = Instant::now();
        gravity
            .accumulate_accels(&sys, &mut out)
            .expect("bench system has no coincident bodies");
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, accel pass = {dt:.6} s");
    }
}

/// Time full integration steps for a fixed N.
pub fn bench_step() {
    let n = 400;
    let steps = 100;
    let gravity = NewtonianGravity;
    let mut sys = make_system(n);

    let t0 = Instant::now();
    for _ in 0..steps {
        euler_integrator(&mut sys, &gravity, 1.0)
            .expect("bench system has no coincident bodies");
    }
    let elapsed = t0.elapsed().as_secs_f64();

    println!(
        "N = {n}, {steps} steps in {elapsed:.6} s ({:.1} steps/s)",
        steps as f64 / elapsed
    );
}
