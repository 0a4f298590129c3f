use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bead_grid::{PaletteError, PaletteImportError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid palette: {0}")]
    InvalidPalette(#[from] PaletteError),

    #[error("Palette not found: {0}")]
    PaletteNotFound(String),

    #[error("Palette import failed: {0}")]
    PaletteImport(#[from] PaletteImportError),

    /// The image could not be obtained or decoded. Carries the
    /// per-operation message only; details go to the log.
    #[error("{0}")]
    Unprocessable(&'static str),

    /// Rendering or task failure. Carries the per-operation message only.
    #[error("{0}")]
    Failed(&'static str),
}

impl ApiError {
    /// Collapse a pipeline failure into the single message shown for
    /// `operation`, logging the underlying cause.
    pub fn from_process(operation: &'static str, err: ProcessError) -> Self {
        tracing::error!(error = %err, operation, "Image processing failed");
        match err {
            ProcessError::Source(_) => ApiError::Unprocessable(operation),
            ProcessError::Render(_) | ProcessError::Task(_) => ApiError::Failed(operation),
        }
    }
}

/// Failure to obtain or decode the input image.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unsupported image source: {0}")]
    UnsupportedSource(String),

    #[error("Malformed data URL")]
    InvalidDataUrl,

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Fetch failed with HTTP status {0}")]
    FetchStatus(u16),

    #[error("Image too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Image dimensions too large: {width}x{height} (max {max} per side)")]
    DimensionsTooLarge { width: u32, height: u32, max: u32 },

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

/// Any failure inside the decode / resize / render pipeline.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Processing task failed: {0}")]
    Task(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidPalette(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::PaletteNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::PaletteImport(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            ApiError::Unprocessable(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            ApiError::Failed(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
