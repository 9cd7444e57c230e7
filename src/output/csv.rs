//! Pull-based trajectory consumers.
//!
//! The engine hands the caller a finite, already-complete [`Trajectory`];
//! consumers iterate it at their own pace with no coupling to the physical
//! time step. The CSV writer here is the reference consumer: one row per
//! (sample, body), suitable for plotting with any external tool.

use std::io::{self, Write};

use crate::simulation::trajectory::Trajectory;

/// Write the trajectory as CSV with header `step,name,x,y,z`.
/// Rows are ordered by sample, then by body order within each sample.
pub fn write_csv<W: Write>(trajectory: &Trajectory, mut out: W) -> io::Result<()> {
    writeln!(out, "step,name,x,y,z")?;
    for (step, name, x) in trajectory.rows() {
        writeln!(out, "{},{},{},{},{}", step, name, x.x, x.y, x.z)?;
    }
    out.flush()
}
