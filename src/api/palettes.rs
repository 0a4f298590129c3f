use axum::{extract::State, response::Json};
use bead_grid::import_palette;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{build_palette, palette_colors, AppConfig, PaletteColor};

/// A configured palette
#[derive(Debug, Serialize, ToSchema)]
pub struct NamedPalette {
    /// Name to pass as `paletteName`
    pub name: String,
    pub colors: Vec<PaletteColor>,
}

/// Configured palettes
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteListResponse {
    pub palettes: Vec<NamedPalette>,
}

/// Parsed palette
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteImportResponse {
    /// Valid entries in file order, names filled in
    pub colors: Vec<PaletteColor>,
}

/// List configured palettes
///
/// Palettes that fail to parse are skipped and logged.
#[utoipa::path(
    get,
    path = "/api/palettes",
    responses(
        (status = 200, description = "Configured palettes", body = PaletteListResponse),
    ),
    tag = "Palettes"
)]
pub async fn handle_list_palettes(
    State(config): State<Arc<AppConfig>>,
) -> Json<PaletteListResponse> {
    let palettes = config
        .palettes
        .iter()
        .filter_map(|(name, colors)| match build_palette(colors) {
            Ok(Some(palette)) => Some(NamedPalette {
                name: name.clone(),
                colors: palette_colors(&palette),
            }),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(palette = %name, error = %e, "Skipping invalid configured palette");
                None
            }
        })
        .collect();

    Json(PaletteListResponse { palettes })
}

/// Import a palette file
///
/// Takes the palette text format: one `hex,name` entry per line, name
/// optional. Lines without a valid `#RRGGBB` color are skipped.
#[utoipa::path(
    post,
    path = "/api/palettes/import",
    request_body(
        content = String,
        content_type = "text/plain",
        description = "Palette file contents"
    ),
    responses(
        (status = 200, description = "Parsed palette", body = PaletteImportResponse),
        (status = 422, description = "No valid colors found"),
    ),
    tag = "Palettes"
)]
pub async fn handle_import_palette(body: String) -> Result<Json<PaletteImportResponse>, ApiError> {
    let palette = import_palette(&body)?;
    tracing::info!(colors = palette.len(), "Palette imported");

    Ok(Json(PaletteImportResponse {
        colors: palette_colors(&palette),
    }))
}
