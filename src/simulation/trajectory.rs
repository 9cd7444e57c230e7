//! Recorded output of a simulation run.
//!
//! A [`Trajectory`] is an append-only sequence of [`Sample`]s, one per
//! sampled step. Body names are stored once on the trajectory since body
//! order never changes within a run; `sample.positions[i]` always refers to
//! the same body as `trajectory.names()[i]`.
//!
//! The trajectory grows only through the driver; once handed to the caller
//! it is read-only.

use crate::simulation::states::{Body, NVec3};

/// One snapshot of all body positions at a given simulated step.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub step: u64,
    pub positions: Vec<NVec3>, // same order as the input body sequence
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    names: Vec<String>,
    samples: Vec<Sample>,
}

impl Trajectory {
    pub(crate) fn new(names: Vec<String>) -> Self {
        Self {
            names,
            samples: Vec::new(),
        }
    }

    /// Append a snapshot of the current body positions.
    pub(crate) fn record(&mut self, step: u64, bodies: &[Body]) {
        self.samples.push(Sample {
            step,
            positions: bodies.iter().map(|b| b.x).collect(),
        });
    }

    /// Body names, in input configuration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All recorded samples, in increasing step order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate every recorded position as `(step, name, position)` rows.
    /// Convenience for consumers that render or serialize the trajectory
    /// at their own pace.
    pub fn rows(&self) -> impl Iterator<Item = (u64, &str, NVec3)> + '_ {
        self.samples.iter().flat_map(move |s| {
            self.names
                .iter()
                .zip(s.positions.iter())
                .map(move |(name, x)| (s.step, name.as_str(), *x))
        })
    }
}
