use axum::{extract::State, response::Json};
use bead_grid::Palette;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::shared::{
    parse_image_url, png_data_url, validate_cell_size, BeadColor, BeadColorsResponse,
    GridSizeResponse,
};
use crate::error::ApiError;
use crate::models::{build_palette, AppConfig, PaletteColor};
use crate::services::BeadService;

const FAILURE: &str = "Failed to generate bead preview";

/// Request body for a bead preview
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeadPreviewRequest {
    /// `data:` URL or http(s) URL of the source image
    pub image_url: String,
    /// Bead size in source pixels (1-100); values below 5 are drawn at 5
    #[schema(minimum = 1, maximum = 100, example = 10)]
    pub pixel_size: i64,
    /// Colors to match beads against; empty or absent keeps sampled colors
    #[serde(default)]
    pub color_palette: Option<Vec<PaletteColor>>,
    /// Name of a configured palette, used instead of `colorPalette`
    #[serde(default)]
    pub palette_name: Option<String>,
}

/// Rendered bead board with color usage
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeadPreviewResponse {
    /// PNG as a `data:image/png;base64,...` URL
    pub bead_preview_url: String,
    /// Source (and output) width in pixels
    pub width: u32,
    /// Source (and output) height in pixels
    pub height: u32,
    /// Colors, most used first
    pub bead_colors: Vec<BeadColor>,
    pub total_beads: usize,
    pub unique_colors: usize,
    pub grid_size: GridSizeResponse,
}

/// Generate a bead preview
///
/// Samples the image on a grid, one bead per cell, optionally snapping each
/// bead to the nearest palette color, and renders the beads as circles.
#[utoipa::path(
    post,
    path = "/api/bead-preview",
    request_body = BeadPreviewRequest,
    responses(
        (status = 200, description = "Bead preview generated", body = BeadPreviewResponse),
        (status = 400, description = "Invalid pixel size, image URL or palette"),
        (status = 404, description = "Named palette not configured"),
        (status = 422, description = "Image could not be loaded"),
        (status = 500, description = "Rendering failed"),
    ),
    tag = "Images"
)]
pub async fn handle_bead_preview(
    State(service): State<Arc<BeadService>>,
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<BeadPreviewRequest>,
) -> Result<Json<BeadPreviewResponse>, ApiError> {
    let pixel_size = validate_cell_size("pixelSize", request.pixel_size)?;
    let source = parse_image_url(&request.image_url)?;
    let palette = resolve_palette(
        &config,
        request.color_palette.as_deref(),
        request.palette_name.as_deref(),
    )?;

    tracing::info!(
        source = %source.describe(),
        pixel_size,
        palette_size = palette.as_ref().map_or(0, Palette::len),
        "Bead preview requested"
    );

    let preview = service
        .bead_preview(source, pixel_size, palette)
        .await
        .map_err(|e| ApiError::from_process(FAILURE, e))?;

    tracing::info!(
        cols = preview.stats.grid.cols,
        rows = preview.stats.grid.rows,
        unique_colors = preview.stats.unique_colors,
        png_bytes = preview.png.len(),
        "Bead preview complete"
    );

    let stats = BeadColorsResponse::from(&preview.stats);
    Ok(Json(BeadPreviewResponse {
        bead_preview_url: png_data_url(&preview.png),
        width: preview.width,
        height: preview.height,
        bead_colors: stats.bead_colors,
        total_beads: stats.total_beads,
        unique_colors: stats.unique_colors,
        grid_size: stats.grid_size,
    }))
}

/// Pick the palette for a request: inline colors, a configured palette by
/// name, or none. Supplying both is rejected.
fn resolve_palette(
    config: &AppConfig,
    colors: Option<&[PaletteColor]>,
    name: Option<&str>,
) -> Result<Option<Palette>, ApiError> {
    let colors = colors.filter(|c| !c.is_empty());
    match (colors, name) {
        (Some(_), Some(_)) => Err(ApiError::InvalidRequest(
            "colorPalette and paletteName are mutually exclusive".to_string(),
        )),
        (Some(colors), None) => Ok(build_palette(colors)?),
        (None, Some(name)) => {
            let colors = config
                .palette(name)
                .ok_or_else(|| ApiError::PaletteNotFound(name.to_string()))?;
            Ok(build_palette(colors)?)
        }
        (None, None) => Ok(None),
    }
}
