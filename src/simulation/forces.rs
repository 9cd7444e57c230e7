//! Force / acceleration contributors for the n-body engine.
//!
//! Defines the acceleration trait seam and direct Newtonian gravity.
//! Direct O(N^2) summation is the deliberate scope of this engine: target
//! system sizes are tens of bodies, so no tree approximation is used.

use crate::simulation::states::{System, NVec3};

/// Gravitational constant in SI units (m^3 kg^-1 s^-2).
/// A fixed property of the engine, not a per-run setting.
pub const G: f64 = 6.67408e-11;

/// Exact coincidence of two body positions during force evaluation.
/// Indices refer to the body order of the evaluated system, with `a < b`.
/// Gravity is undefined at zero separation, so evaluation stops here instead
/// of letting an infinity leak into the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoincidentBodies {
    pub a: usize,
    pub b: usize,
}

/// Trait for acceleration sources operating on [`System`].
///
/// This is the extension point for alternative force laws; the engine only
/// ships Newtonian gravity. Implementations must read the system as a
/// snapshot and never mutate it.
pub trait Acceleration {
    /// Instantaneous acceleration of the body at `target` due to every other
    /// body in `sys`. `target` must be a valid index into `sys.bodies`.
    fn acceleration_of(&self, sys: &System, target: usize) -> Result<NVec3, CoincidentBodies>;

    /// Fill `out[i]` with the acceleration of body `i` for all bodies.
    /// `out` must have one slot per body.
    fn accumulate_accels(&self, sys: &System, out: &mut [NVec3]) -> Result<(), CoincidentBodies> {
        for i in 0..sys.bodies.len() {
            out[i] = self.acceleration_of(sys, i)?;
        }
        Ok(())
    }
}

/// Newtonian point-mass gravity, unsoftened.
///
/// Softening is intentionally absent: a zero-separation pair is reported as
/// [`CoincidentBodies`] rather than smoothed over.
pub struct NewtonianGravity;

impl Acceleration for NewtonianGravity {
    fn acceleration_of(&self, sys: &System, target: usize) -> Result<NVec3, CoincidentBodies> {
        let xt = sys.bodies[target].x; // position of the target body

        let mut acc = NVec3::zeros();
        for (j, bj) in sys.bodies.iter().enumerate() {
            if j == target {
                continue;
            }

            // r points from the target toward body j, so the attractive
            // contribution is along +r.
            let r = bj.x - xt;

            // Squared separation |r|^2
            let r2 = r.dot(&r);
            if r2 == 0.0 {
                return Err(CoincidentBodies {
                    a: target.min(j),
                    b: target.max(j),
                });
            }

            // 1 / |r| and 1 / |r|^3
            let inv_r = r2.sqrt().recip();
            let inv_r3 = inv_r * inv_r * inv_r;

            // a += G * m_j * r / |r|^3
            acc += (G * bj.m * inv_r3) * r;
        }

        Ok(acc)
    }
}
