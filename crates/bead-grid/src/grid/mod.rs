//! Grid geometry and per-cell sampling.
//!
//! Pixel averaging is not done here. The caller area-resizes the source
//! image to exactly [`GridSize`] pixels; [`GridSamples`] then reads one
//! color per cell from that buffer.

mod geometry;
mod samples;

pub use geometry::{bead_size, GridSize, MAX_CELL_SIZE, MIN_BEAD_SIZE, MIN_CELL_SIZE};
pub use samples::GridSamples;
