use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::shared::{parse_image_url, png_data_url, validate_cell_size};
use crate::error::ApiError;
use crate::services::BeadService;

const FAILURE: &str = "Failed to pixelate image";

/// Request body for pixelation
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PixelateRequest {
    /// `data:` URL or http(s) URL of the source image
    pub image_url: String,
    /// Block size in source pixels (1-100)
    #[schema(minimum = 1, maximum = 100, example = 10)]
    pub pixel_size: i64,
    /// Original file name, for logging only
    #[serde(default)]
    pub file_name: Option<String>,
}

/// Pixelated image
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PixelateResponse {
    /// PNG as a `data:image/png;base64,...` URL
    pub pixelated_url: String,
    /// Source (and output) width in pixels
    pub width: u32,
    /// Source (and output) height in pixels
    pub height: u32,
}

/// Pixelate an image
///
/// Shrinks the image to one pixel per block with an area filter and enlarges
/// it back to its original size.
#[utoipa::path(
    post,
    path = "/api/pixelate",
    request_body = PixelateRequest,
    responses(
        (status = 200, description = "Pixelated image", body = PixelateResponse),
        (status = 400, description = "Invalid pixel size or image URL"),
        (status = 422, description = "Image could not be loaded"),
        (status = 500, description = "Rendering failed"),
    ),
    tag = "Images"
)]
pub async fn handle_pixelate(
    State(service): State<Arc<BeadService>>,
    Json(request): Json<PixelateRequest>,
) -> Result<Json<PixelateResponse>, ApiError> {
    let pixel_size = validate_cell_size("pixelSize", request.pixel_size)?;
    let source = parse_image_url(&request.image_url)?;

    tracing::info!(
        source = %source.describe(),
        pixel_size,
        file_name = request.file_name.as_deref().unwrap_or("-"),
        "Pixelate requested"
    );

    let output = service
        .pixelate(source, pixel_size)
        .await
        .map_err(|e| ApiError::from_process(FAILURE, e))?;

    tracing::info!(
        width = output.width,
        height = output.height,
        png_bytes = output.png.len(),
        "Pixelate complete"
    );

    Ok(Json(PixelateResponse {
        pixelated_url: png_data_url(&output.png),
        width: output.width,
        height: output.height,
    }))
}
