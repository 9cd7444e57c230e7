//! Core state types for the N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` using `NVec3` for position and velocity
//! - `System` holding the list of bodies and the current simulation time `t`
//!
//! Body order is fixed for the duration of a run; the index of a body in
//! `System::bodies` is its identity, both for pairwise force iteration and
//! for aligning trajectory samples with the input configuration.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position (m)
    pub v: NVec3, // velocity (m/s)
    pub m: f64, // mass (kg), must be > 0
    pub name: String, // label carried through to the trajectory
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, order is identity
    pub t: f64, // time (s)
}

impl System {
    /// Build a system at `t = 0` from a list of bodies.
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }
}
