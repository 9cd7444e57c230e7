//! Error types for simulation runs.
//!
//! Two failure kinds exist, both terminal for the run:
//! - `Configuration`: rejected before any stepping, nothing was mutated.
//! - `DegenerateConfiguration`: two bodies coincided exactly mid-run; the
//!   trajectory recorded up to that point is still valid and travels inside
//!   the error.
//!
//! NaN/overflow from extreme inputs is deliberately not detected; such
//! values propagate into the trajectory for the caller to diagnose.

use thiserror::Error;

use crate::simulation::trajectory::Trajectory;

#[derive(Debug, Error)]
pub enum SimulationError {
    /// Invalid initial state or run settings, caught before the first step.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// Two distinct bodies reached exactly identical coordinates during
    /// force evaluation at `step`. Gravity is undefined at zero separation,
    /// so the run halts rather than propagating infinities.
    #[error("bodies {body_a} and {body_b} coincide exactly at step {step}")]
    DegenerateConfiguration {
        step: u64,
        body_a: usize,
        body_b: usize,
        /// Everything sampled before the failure, still in step order.
        partial: Trajectory,
    },
}

impl SimulationError {
    /// The trajectory recorded before a mid-run failure, if any.
    pub fn partial_trajectory(&self) -> Option<&Trajectory> {
        match self {
            Self::DegenerateConfiguration { partial, .. } => Some(partial),
            Self::Configuration { .. } => None,
        }
    }

    /// Consume the error, keeping the partial trajectory of a mid-run
    /// failure.
    pub fn into_partial_trajectory(self) -> Option<Trajectory> {
        match self {
            Self::DegenerateConfiguration { partial, .. } => Some(partial),
            Self::Configuration { .. } => None,
        }
    }
}
