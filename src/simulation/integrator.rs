//! Fixed-step semi-implicit Euler integrator.
//!
//! One force evaluation per step; updates velocities, then positions, then
//! `sys.t` in place. The integrator holds no state of its own.

use super::forces::{Acceleration, CoincidentBodies};
use super::states::{NVec3, System};

/// Advance the system by one step of size `dt` using semi-implicit
/// (symplectic) Euler.
///
/// Phase ordering is load-bearing and must not be reordered:
/// 1. accelerations for every body are computed against the current,
///    not-yet-updated positions (no body may move until all are done,
///    otherwise later bodies would see already-updated earlier ones),
/// 2. `v_{n+1} = v_n + dt * a_n` for every body,
/// 3. `x_{n+1} = x_n + dt * v_{n+1}` using the *updated* velocity.
///
/// Using the new velocity in phase 3 is what makes the step symplectic
/// rather than plain explicit Euler; swapping phases 2 and 3 changes the
/// long-run energy drift direction.
///
/// Fails without mutating anything if two bodies coincide exactly.
pub fn euler_integrator(
    sys: &mut System,
    forces: &dyn Acceleration,
    dt: f64,
) -> Result<(), CoincidentBodies> {
    let n = sys.bodies.len();

    // Snapshot pass: a_n for every body before anything moves.
    let mut accels = vec![NVec3::zeros(); n];
    forces.accumulate_accels(&*sys, &mut accels)?;

    // Kick: v_{n+1} = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.v += dt * *a;
    }

    // Drift with the updated velocity: x_{n+1} = x_n + dt * v_{n+1}
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // Advance time by one full step
    sys.t += dt;

    Ok(())
}
