//! Run settings for the simulation driver.
//!
//! `RunSettings` holds the per-run knobs:
//! - fixed integration step size `dt`,
//! - total number of steps,
//! - sampling interval for trajectory snapshots.
//!
//! The gravitational constant is not here on purpose: it is a fixed physical
//! constant of the engine (`forces::G`), not a per-run parameter.

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub dt: f64, // step size (s), fixed for the whole run
    pub total_steps: u64, // number of integration steps to perform
    pub sample_interval: u64, // record a sample every this many steps, >= 1
}
