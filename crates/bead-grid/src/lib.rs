//! bead-grid: turn images into bead boards
//!
//! This library converts a downsampled image into a grid of craft beads:
//! each grid cell becomes one bead whose color is either the cell's sampled
//! color or the nearest entry of a caller-supplied palette. The output is a
//! vector scene (one circle per bead) plus a histogram of how many beads of
//! each color are needed.
//!
//! # Pipeline
//!
//! ```text
//! source image  (decoded by the caller)
//!     |
//!     v
//! GridSize::compute(width, height, cell_size)
//!     |
//!     v
//! area resize to cols x rows  (by the caller; does the pixel averaging)
//!     |
//!     v
//! GridSamples  (one RGB triple per cell)
//!     |
//!     v
//! BeadRenderer::render
//!     |-- Palette::closest   (Euclidean RGB, first entry wins ties)
//!     |-- Histogram          (first-seen order, stable sort by count)
//!     v
//! RenderResult { scene, histogram, total_beads, unique_colors, grid }
//! ```
//!
//! Decoding, resizing and rasterizing the scene are left to the caller, so
//! this crate has no dependencies and performs no I/O.
//!
//! # Quick Start
//!
//! ```
//! use bead_grid::{BeadRenderer, GridSamples, GridSize};
//!
//! // A 20x20 image at cell size 10 is a 2x2 grid
//! let grid = GridSize::compute(20, 20, 10);
//! let data = [255, 0, 0, 0, 0, 255, 255, 0, 0, 0, 0, 255];
//! let samples = GridSamples::new(&data, grid);
//!
//! let result = BeadRenderer::new(10).render(&samples, 20, 20);
//! assert_eq!(result.total_beads, 4);
//! assert_eq!(result.unique_colors, 2);
//! assert_eq!(result.histogram[0].percentage, 50.0);
//!
//! let svg = result.scene.to_svg();
//! assert_eq!(svg.matches("<circle").count(), 4);
//! ```
//!
//! # Contract violations
//!
//! A sample buffer whose length does not match its grid, or a zero cell
//! size, is a bug in the caller and panics. Bad user data (malformed hex
//! colors, unusable palette files) is reported through
//! [`ParseColorError`], [`PaletteError`] and [`PaletteImportError`].

pub mod color;
pub mod grid;
pub mod palette;
pub mod render;


pub use color::Rgb;
pub use grid::{bead_size, GridSamples, GridSize, MAX_CELL_SIZE, MIN_BEAD_SIZE, MIN_CELL_SIZE};
pub use palette::{
    export_palette, import_palette, Palette, PaletteEntry, PaletteError, PaletteImportError,
    ParseColorError,
};
pub use render::{
    histogram_csv, percentage, BeadColorEntry, BeadRenderer, BeadScene, BeadStats, Primitive,
    RenderResult,
};
