//! Bead board renderer.

use super::histogram::{BeadColorEntry, Histogram};
use super::scene::BeadScene;
use crate::color::Rgb;
use crate::grid::{GridSamples, GridSize};
use crate::palette::Palette;

/// Everything produced by one [`BeadRenderer::render`] call.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Background plus one circle per bead, ready for rasterization.
    pub scene: BeadScene,
    /// Resolved colors, most used first.
    pub histogram: Vec<BeadColorEntry>,
    /// `cols * rows`.
    pub total_beads: usize,
    /// `histogram.len()`.
    pub unique_colors: usize,
    pub grid: GridSize,
}

/// Color usage without a rendered scene, from [`BeadRenderer::analyze`].
#[derive(Debug, Clone)]
pub struct BeadStats {
    pub histogram: Vec<BeadColorEntry>,
    pub total_beads: usize,
    pub unique_colors: usize,
    pub grid: GridSize,
}

/// Turns per-cell samples into a bead board.
///
/// Each cell resolves to a display color: the nearest palette entry when a
/// palette is set, otherwise the sample itself. The renderer is a pure
/// function of its inputs and keeps no state between calls.
///
/// # Example
///
/// ```
/// use bead_grid::{BeadRenderer, GridSamples, GridSize, Palette};
///
/// let grid = GridSize::compute(20, 10, 10);
/// let data = [250, 5, 5, 10, 10, 240];
/// let samples = GridSamples::new(&data, grid);
///
/// let palette =
///     Palette::from_pairs([("#ff0000", Some("Red")), ("#0000ff", Some("Blue"))]).unwrap();
/// let result = BeadRenderer::new(10).palette(Some(&palette)).render(&samples, 20, 10);
///
/// assert_eq!(result.total_beads, 2);
/// assert_eq!(result.histogram[0].label, "Red");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BeadRenderer<'p> {
    cell_size: u32,
    palette: Option<&'p Palette>,
}

impl<'p> BeadRenderer<'p> {
    /// Create a renderer for beads of `cell_size` canvas pixels.
    ///
    /// The size is used as given; clamping to the minimum bead size is the
    /// caller's job (see [`crate::bead_size`]).
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is zero.
    pub fn new(cell_size: u32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        Self {
            cell_size,
            palette: None,
        }
    }

    /// Match every cell against `palette`. `None` keeps raw sampled colors.
    pub fn palette(mut self, palette: Option<&'p Palette>) -> Self {
        self.palette = palette;
        self
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Resolve one sample to `(fill, label)`.
    ///
    /// With a palette, fill is the matched entry's color and label its name.
    /// Without, fill is `rgb(r,g,b)` and label the `#rrggbb` form.
    fn resolve(&self, sample: Rgb) -> (String, String) {
        match self.palette {
            Some(palette) => {
                let entry = palette.closest(sample);
                (entry.rgb().to_hex(), entry.name().to_string())
            }
            None => (sample.to_css(), sample.to_hex()),
        }
    }

    /// Render the board onto a `canvas_width` x `canvas_height` canvas.
    ///
    /// Cells are visited in row-major order; that order fixes both the paint
    /// order of the beads and the tie-break between equally used colors.
    pub fn render(
        &self,
        samples: &GridSamples<'_>,
        canvas_width: u32,
        canvas_height: u32,
    ) -> RenderResult {
        let grid = samples.grid();
        let mut scene = BeadScene::new(canvas_width, canvas_height);
        scene.reserve(grid.cell_count());
        let mut histogram = Histogram::new();

        for (row, col, sample) in samples.cells() {
            let (fill, label) = self.resolve(sample);
            histogram.record(&label, sample);
            scene.push_bead(row, col, self.cell_size, fill);
        }

        let stats = finish(histogram, grid);
        RenderResult {
            scene,
            histogram: stats.histogram,
            total_beads: stats.total_beads,
            unique_colors: stats.unique_colors,
            grid,
        }
    }

    /// Count bead colors without building a scene.
    ///
    /// Produces exactly the histogram [`render`](Self::render) would.
    pub fn analyze(&self, samples: &GridSamples<'_>) -> BeadStats {
        let mut histogram = Histogram::new();
        for (_, _, sample) in samples.cells() {
            let label = match self.palette {
                Some(palette) => palette.closest(sample).name().to_string(),
                None => sample.to_hex(),
            };
            histogram.record(&label, sample);
        }
        finish(histogram, samples.grid())
    }
}

fn finish(histogram: Histogram, grid: GridSize) -> BeadStats {
    debug_assert_eq!(histogram.total(), grid.cell_count());
    let histogram = histogram.into_sorted();
    BeadStats {
        total_beads: grid.cell_count(),
        unique_colors: histogram.len(),
        histogram,
        grid,
    }
}
