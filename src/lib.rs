pub mod benchmark;
pub mod configuration;
pub mod output;
pub mod simulation;

pub use simulation::driver::run;
pub use simulation::error::SimulationError;
pub use simulation::forces::{Acceleration, CoincidentBodies, NewtonianGravity, G};
pub use simulation::integrator::euler_integrator;
pub use simulation::params::RunSettings;
pub use simulation::scenario::Scenario;
pub use simulation::states::{Body, NVec3, System};
pub use simulation::trajectory::{Sample, Trajectory};

pub use configuration::config::{BodyConfig, ScenarioConfig, SettingsConfig};

pub use output::csv::write_csv;

pub use benchmark::benchmark::{bench_gravity, bench_step};
