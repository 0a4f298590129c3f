pub mod bead_service;
pub mod image_source;

pub use bead_service::{BeadPreview, BeadService, PixelateOutput};
pub use image_source::{ImageLoader, ImageSource};
