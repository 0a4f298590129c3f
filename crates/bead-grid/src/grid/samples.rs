//! Per-cell color samples over a downsampled RGB buffer.

use super::geometry::GridSize;
use crate::color::Rgb;

/// A borrowed view of one RGB sample per grid cell.
///
/// The buffer is row-major, 3 bytes per cell, and exactly
/// `cols * rows * 3` long. It is normally produced by area-resizing the
/// source image down to the grid dimensions, so each byte triple is already
/// the mean color of its cell; this type only does the indexing.
#[derive(Debug, Clone, Copy)]
pub struct GridSamples<'a> {
    data: &'a [u8],
    grid: GridSize,
}

impl<'a> GridSamples<'a> {
    /// Wrap a packed RGB buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != grid.cols * grid.rows * 3`. A mismatched
    /// buffer means the resize step produced the wrong dimensions, which is
    /// a caller bug rather than bad input.
    pub fn new(data: &'a [u8], grid: GridSize) -> Self {
        assert_eq!(
            data.len(),
            grid.sample_len(),
            "sample buffer length does not match {}x{} grid",
            grid.cols,
            grid.rows
        );
        Self { data, grid }
    }

    /// Grid dimensions.
    #[inline]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Color sampled for the cell at (`row`, `col`).
    ///
    /// Reads bytes `(row * cols + col) * 3 ..+3`.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the grid.
    #[inline]
    pub fn sample_cell(&self, row: u32, col: u32) -> Rgb {
        assert!(
            row < self.grid.rows && col < self.grid.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.grid.cols,
            self.grid.rows
        );
        let i = (row as usize * self.grid.cols as usize + col as usize) * 3;
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Iterate all cells in row-major order as `(row, col, sample)`.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, Rgb)> + '_ {
        let cols = self.grid.cols;
        self.data.chunks_exact(3).enumerate().map(move |(i, px)| {
            let i = i as u32;
            (i / cols, i % cols, Rgb::new(px[0], px[1], px[2]))
        })
    }
}
