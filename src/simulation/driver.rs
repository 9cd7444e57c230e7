//! Sampling-driven simulation loop.
//!
//! `run` validates the initial configuration, then repeatedly applies the
//! integrator for a fixed number of steps, snapshotting body positions into
//! a [`Trajectory`] every `sample_interval` steps (step 0, the initial
//! state, included).

use crate::simulation::error::SimulationError;
use crate::simulation::forces::Acceleration;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::RunSettings;
use crate::simulation::states::System;
use crate::simulation::trajectory::Trajectory;

/// Run the simulation to completion, blocking until all steps are done.
///
/// Samples are recorded *before* the step they are tagged with, so a
/// completed run yields exactly `ceil(total_steps / sample_interval)`
/// samples, starting at step 0.
///
/// Side effect: `sys` ends the run holding the final post-integration
/// state. Callers that need the initial state must clone it beforehand.
pub fn run(
    sys: &mut System,
    forces: &dyn Acceleration,
    settings: &RunSettings,
) -> Result<Trajectory, SimulationError> {
    validate(sys, settings)?;

    let names = sys.bodies.iter().map(|b| b.name.clone()).collect();
    let mut trajectory = Trajectory::new(names);

    for step in 0..settings.total_steps {
        if step % settings.sample_interval == 0 {
            trajectory.record(step, &sys.bodies);
        }

        if let Err(pair) = euler_integrator(sys, forces, settings.dt) {
            return Err(SimulationError::DegenerateConfiguration {
                step,
                body_a: pair.a,
                body_b: pair.b,
                partial: trajectory,
            });
        }
    }

    Ok(trajectory)
}

/// Check run settings and body invariants before any state is touched.
fn validate(sys: &System, settings: &RunSettings) -> Result<(), SimulationError> {
    let bad = |reason: String| SimulationError::Configuration { reason };

    if settings.sample_interval == 0 {
        return Err(bad("sample_interval must be at least 1".into()));
    }
    // `!(dt > 0)` also catches NaN
    if !(settings.dt > 0.0) || !settings.dt.is_finite() {
        return Err(bad(format!(
            "dt must be a positive finite number, got {}",
            settings.dt
        )));
    }

    for (i, b) in sys.bodies.iter().enumerate() {
        if !(b.m > 0.0) || !b.m.is_finite() {
            return Err(bad(format!(
                "body {i} ({}) has non-positive mass {}",
                b.name, b.m
            )));
        }
    }

    // Exact coincidence check over all pairs; gravity is undefined at zero
    // separation.
    let n = sys.bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if sys.bodies[i].x == sys.bodies[j].x {
                return Err(bad(format!(
                    "bodies {i} ({}) and {j} ({}) share identical initial coordinates",
                    sys.bodies[i].name, sys.bodies[j].name
                )));
            }
        }
    }

    Ok(())
}
