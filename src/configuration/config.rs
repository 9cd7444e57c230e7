//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`SettingsConfig`] – step size, step count, and sampling interval
//! - [`BodyConfig`]     – initial state for each body
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! settings:
//!   dt: 1000.0            # fixed step size in seconds
//!   total_steps: 80000    # number of integration steps
//!   sample_interval: 1000 # record positions every 1000 steps
//!
//! bodies:
//!   - name: "sun"
//!     x: [ 0.0, 0.0, 0.0 ]        # position (m)
//!     v: [ 0.0, 0.0, 0.0 ]        # velocity (m/s)
//!     m: 2.0e30                   # mass (kg)
//!   - name: "earth"
//!     x: [ 0.0, 1.5e11, 0.0 ]
//!     v: [ 30000.0, 0.0, 0.0 ]
//!     m: 6.0e28
//! ```
//!
//! Note there is no gravitational constant here: `G` is a fixed constant of
//! the engine. The scenario builder maps this configuration into the runtime
//! representation.

use serde::Deserialize;

/// Run-level numerical settings.
#[derive(Deserialize, Debug, Clone)]
pub struct SettingsConfig {
    pub dt: f64,              // fixed time step (s)
    pub total_steps: u64,     // number of integration steps
    pub sample_interval: u64, // snapshot every this many steps, >= 1
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String, // label, carried through to the trajectory output
    pub x: [f64; 3],  // initial position (m)
    pub v: [f64; 3],  // initial velocity (m/s)
    pub m: f64,       // mass (kg), must be > 0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub settings: SettingsConfig, // run-level numerical settings
    pub bodies: Vec<BodyConfig>,  // initial state of the system
}
