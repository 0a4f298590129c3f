use bead_grid::{
    bead_size, BeadRenderer, BeadStats, GridSamples, GridSize, Palette, MAX_CELL_SIZE,
    MIN_CELL_SIZE,
};
use image::RgbImage;
use std::sync::Arc;

use crate::error::{ProcessError, RenderError};
use crate::models::AppConfig;
use crate::rendering::{resize_area, SvgRenderer};
use crate::services::{ImageLoader, ImageSource};

/// A pixelated image, PNG encoded, at the source's dimensions.
#[derive(Debug, Clone)]
pub struct PixelateOutput {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// A rendered bead board plus its color usage.
#[derive(Debug, Clone)]
pub struct BeadPreview {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stats: BeadStats,
}

/// High-level service that loads images and runs the bead pipeline on them
#[derive(Clone)]
pub struct BeadService {
    loader: ImageLoader,
    svg_renderer: Arc<SvgRenderer>,
}

impl BeadService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            loader: ImageLoader::from_config(config),
            svg_renderer: Arc::new(SvgRenderer::new(config.optimize_png)),
        }
    }

    // -----------------------------------------------------------------------
    // Pipeline stages over decoded images
    // -----------------------------------------------------------------------

    /// Shrink to the grid and enlarge back, giving flat square blocks.
    ///
    /// `pixel_size` is clamped to the accepted cell size range.
    pub fn pixelate_image(
        &self,
        image: &RgbImage,
        pixel_size: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let pixel_size = pixel_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        let (width, height) = image.dimensions();
        let grid = GridSize::compute(width, height, pixel_size);

        let small = resize_area(image, grid.cols, grid.rows);
        let restored = resize_area(&small, width, height);

        tracing::debug!(
            width,
            height,
            pixel_size,
            cols = grid.cols,
            rows = grid.rows,
            "Pixelated image"
        );
        self.svg_renderer.encode_rgb(width, height, restored.as_raw())
    }

    /// Render the bead board for `image` and rasterize it at the image's size.
    ///
    /// `pixel_size` is raised to the minimum bead size when smaller.
    pub fn bead_preview_image(
        &self,
        image: &RgbImage,
        pixel_size: u32,
        palette: Option<&Palette>,
    ) -> Result<(Vec<u8>, BeadStats), RenderError> {
        let bead = bead_size(pixel_size);
        let (width, height) = image.dimensions();
        let (small, grid) = downsample(image, bead);
        let samples = GridSamples::new(small.as_raw(), grid);

        let result = BeadRenderer::new(bead)
            .palette(palette)
            .render(&samples, width, height);
        let svg = result.scene.to_svg();

        tracing::debug!(
            bead_size = bead,
            cols = grid.cols,
            rows = grid.rows,
            unique_colors = result.unique_colors,
            svg_bytes = svg.len(),
            "Bead scene built"
        );

        let png = self.svg_renderer.render_to_png(svg.as_bytes(), width, height)?;
        let stats = BeadStats {
            histogram: result.histogram,
            total_beads: result.total_beads,
            unique_colors: result.unique_colors,
            grid,
        };
        Ok((png, stats))
    }

    /// Count bead colors for `image` without rendering. No palette matching.
    pub fn analyze_image(&self, image: &RgbImage, bead_size_px: u32) -> BeadStats {
        let bead = bead_size(bead_size_px);
        let (small, grid) = downsample(image, bead);
        BeadRenderer::new(bead).analyze(&GridSamples::new(small.as_raw(), grid))
    }

    // -----------------------------------------------------------------------
    // Source-to-result operations (blocking)
    // -----------------------------------------------------------------------

    pub fn pixelate_blocking(
        &self,
        source: &ImageSource,
        pixel_size: u32,
    ) -> Result<PixelateOutput, ProcessError> {
        let image = self.loader.load(source)?;
        let png = self.pixelate_image(&image, pixel_size)?;
        Ok(PixelateOutput {
            png,
            width: image.width(),
            height: image.height(),
        })
    }

    pub fn bead_preview_blocking(
        &self,
        source: &ImageSource,
        pixel_size: u32,
        palette: Option<&Palette>,
    ) -> Result<BeadPreview, ProcessError> {
        let image = self.loader.load(source)?;
        let (png, stats) = self.bead_preview_image(&image, pixel_size, palette)?;
        Ok(BeadPreview {
            png,
            width: image.width(),
            height: image.height(),
            stats,
        })
    }

    pub fn analyze_blocking(
        &self,
        source: &ImageSource,
        bead_size_px: u32,
    ) -> Result<BeadStats, ProcessError> {
        let image = self.loader.load(source)?;
        Ok(self.analyze_image(&image, bead_size_px))
    }

    // -----------------------------------------------------------------------
    // Async entry points
    //
    // Fetching, decoding and rendering are blocking and CPU heavy, so each
    // operation runs on the blocking pool.
    // -----------------------------------------------------------------------

    pub async fn pixelate(
        &self,
        source: ImageSource,
        pixel_size: u32,
    ) -> Result<PixelateOutput, ProcessError> {
        let service = self.clone();
        run_blocking(move || service.pixelate_blocking(&source, pixel_size)).await
    }

    pub async fn bead_preview(
        &self,
        source: ImageSource,
        pixel_size: u32,
        palette: Option<Palette>,
    ) -> Result<BeadPreview, ProcessError> {
        let service = self.clone();
        run_blocking(move || service.bead_preview_blocking(&source, pixel_size, palette.as_ref()))
            .await
    }

    pub async fn analyze(
        &self,
        source: ImageSource,
        bead_size_px: u32,
    ) -> Result<BeadStats, ProcessError> {
        let service = self.clone();
        run_blocking(move || service.analyze_blocking(&source, bead_size_px)).await
    }
}

/// Area-resize `image` to one pixel per bead.
fn downsample(image: &RgbImage, bead: u32) -> (RgbImage, GridSize) {
    let grid = GridSize::compute(image.width(), image.height(), bead);
    (resize_area(image, grid.cols, grid.rows), grid)
}

async fn run_blocking<T, F>(f: F) -> Result<T, ProcessError>
where
    F: FnOnce() -> Result<T, ProcessError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ProcessError::Task(e.to_string()))?
}
