//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the driver:
//! - run settings (`RunSettings`)
//! - system state (`System` with bodies at t = 0)
//!
//! Validation happens later, in the driver, so a scenario can always be
//! built; only running it can fail.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::params::RunSettings;
use crate::simulation::states::{Body, NVec3, System};

/// A fully-initialized simulation scenario: settings plus initial state.
pub struct Scenario {
    pub settings: RunSettings,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg
            .bodies
            .into_iter()
            .map(|bc: BodyConfig| Body {
                x: NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
                v: NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
                m: bc.m,
                name: bc.name,
            })
            .collect();

        // Initial system state: bodies at t = 0
        let system = System::new(bodies);

        let settings = RunSettings {
            dt: cfg.settings.dt,
            total_steps: cfg.settings.total_steps,
            sample_interval: cfg.settings.sample_interval,
        };

        Self { settings, system }
    }
}
