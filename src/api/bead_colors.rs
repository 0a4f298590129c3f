use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json},
};
use bead_grid::{histogram_csv, BeadStats};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::shared::{parse_image_url, validate_cell_size, BeadColorsResponse};
use crate::error::ApiError;
use crate::services::BeadService;

const FAILURE: &str = "Failed to analyze bead colors";

/// Request body for bead color analysis
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeadColorsRequest {
    /// `data:` URL or http(s) URL of the image, usually an already pixelated one
    pub image_url: String,
    /// Bead size in source pixels (1-100); values below 5 are counted at 5
    #[schema(minimum = 1, maximum = 100, example = 10)]
    pub bead_size: i64,
}

async fn analyze(service: &BeadService, request: BeadColorsRequest) -> Result<BeadStats, ApiError> {
    let bead_size = validate_cell_size("beadSize", request.bead_size)?;
    let source = parse_image_url(&request.image_url)?;

    tracing::info!(source = %source.describe(), bead_size, "Bead color analysis requested");

    let stats = service
        .analyze(source, bead_size)
        .await
        .map_err(|e| ApiError::from_process(FAILURE, e))?;

    tracing::info!(
        cols = stats.grid.cols,
        rows = stats.grid.rows,
        unique_colors = stats.unique_colors,
        "Bead color analysis complete"
    );
    Ok(stats)
}

/// Count bead colors
///
/// Samples the image on the bead grid and counts each exact sampled color.
/// No palette matching and no rendering.
#[utoipa::path(
    post,
    path = "/api/bead-colors",
    request_body = BeadColorsRequest,
    responses(
        (status = 200, description = "Bead color usage", body = BeadColorsResponse),
        (status = 400, description = "Invalid bead size or image URL"),
        (status = 422, description = "Image could not be loaded"),
        (status = 500, description = "Analysis failed"),
    ),
    tag = "Images"
)]
pub async fn handle_bead_colors(
    State(service): State<Arc<BeadService>>,
    Json(request): Json<BeadColorsRequest>,
) -> Result<Json<BeadColorsResponse>, ApiError> {
    let stats = analyze(&service, request).await?;
    Ok(Json(BeadColorsResponse::from(&stats)))
}

/// Export bead color usage as CSV
///
/// Same analysis as `/api/bead-colors`, returned as a CSV table with one row
/// per color, most used first.
#[utoipa::path(
    post,
    path = "/api/bead-colors/csv",
    request_body = BeadColorsRequest,
    responses(
        (status = 200, description = "CSV table", content_type = "text/csv", body = String),
        (status = 400, description = "Invalid bead size or image URL"),
        (status = 422, description = "Image could not be loaded"),
        (status = 500, description = "Analysis failed"),
    ),
    tag = "Images"
)]
pub async fn handle_bead_colors_csv(
    State(service): State<Arc<BeadService>>,
    Json(request): Json<BeadColorsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let stats = analyze(&service, request).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"bead-colors.csv\"",
            ),
        ],
        histogram_csv(&stats.histogram),
    ))
}
