//! Bead board rendering and color statistics.
//!
//! - [`BeadRenderer`]: walks the grid, resolves colors, builds the scene
//!   and the histogram
//! - [`BeadScene`]: the vector output, serializable to SVG
//! - [`BeadColorEntry`]: one row of the sorted histogram, exportable as CSV

mod histogram;
mod renderer;
mod scene;

pub use histogram::{histogram_csv, percentage, BeadColorEntry, Histogram, CSV_HEADER};
pub use renderer::{BeadRenderer, BeadStats, RenderResult};
pub use scene::{BeadScene, Primitive, BEAD_RADIUS_DIVISOR, BEAD_STROKE, BEAD_STROKE_WIDTH};
