use base64::Engine;
use bead_grid::{BeadColorEntry, BeadStats, GridSize, MAX_CELL_SIZE, MIN_CELL_SIZE};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::ImageSource;

/// One bead color and how often it is used
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BeadColor {
    /// Palette entry name, or `#rrggbb` of the sampled color without a palette
    #[schema(example = "#ff0000")]
    pub hex: String,
    /// First sampled color for this entry
    #[schema(value_type = Vec<u8>, example = json!([255, 0, 0]))]
    pub rgb: [u8; 3],
    /// Number of beads
    pub count: usize,
    /// Share of all beads, in percent, two decimals
    #[schema(example = 50.0)]
    pub percentage: f64,
}

impl From<&BeadColorEntry> for BeadColor {
    fn from(entry: &BeadColorEntry) -> Self {
        Self {
            hex: entry.label.clone(),
            rgb: entry.rgb.to_bytes(),
            count: entry.count,
            percentage: entry.percentage,
        }
    }
}

/// Bead grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct GridSizeResponse {
    pub cols: u32,
    pub rows: u32,
}

impl From<GridSize> for GridSizeResponse {
    fn from(grid: GridSize) -> Self {
        Self {
            cols: grid.cols,
            rows: grid.rows,
        }
    }
}

/// Bead color usage
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeadColorsResponse {
    /// Colors, most used first
    pub bead_colors: Vec<BeadColor>,
    pub total_beads: usize,
    pub unique_colors: usize,
    pub grid_size: GridSizeResponse,
}

impl From<&BeadStats> for BeadColorsResponse {
    fn from(stats: &BeadStats) -> Self {
        Self {
            bead_colors: stats.histogram.iter().map(BeadColor::from).collect(),
            total_beads: stats.total_beads,
            unique_colors: stats.unique_colors,
            grid_size: stats.grid.into(),
        }
    }
}

/// Validate a cell size field from a request.
pub fn validate_cell_size(field: &str, value: i64) -> Result<u32, ApiError> {
    if value < MIN_CELL_SIZE as i64 || value > MAX_CELL_SIZE as i64 {
        return Err(ApiError::InvalidRequest(format!(
            "{field} must be between {MIN_CELL_SIZE} and {MAX_CELL_SIZE}"
        )));
    }
    Ok(value as u32)
}

/// Validate the image reference from a request.
pub fn parse_image_url(url: &str) -> Result<ImageSource, ApiError> {
    ImageSource::parse(url).map_err(|_| {
        ApiError::InvalidRequest("imageUrl must be a data: or http(s) URL".to_string())
    })
}

/// Inline PNG bytes as a `data:` URL.
pub fn png_data_url(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}
