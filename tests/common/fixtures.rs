//! Test fixtures: synthetic images and palettes.

use base64::Engine;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

pub const RED: [u8; 3] = [255, 0, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

/// Left half red, right half blue
pub fn red_blue(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb(RED)
        } else {
            Rgb(BLUE)
        }
    })
}

/// Single color image
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Fully transparent except for an opaque red left half
pub fn half_transparent(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Encode an image as PNG bytes
pub fn png_bytes(image: DynamicImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .expect("Failed to encode PNG");
    buf.into_inner()
}

/// Encode an RGB image as a PNG data URL
pub fn data_url(image: &RgbImage) -> String {
    data_url_from_bytes(&png_bytes(DynamicImage::ImageRgb8(image.clone())))
}

/// Wrap encoded bytes in a PNG data URL
pub fn data_url_from_bytes(bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Contents of a palette file with a blank line and an invalid entry
pub const PALETTE_FILE: &str = "#FF0000,Red\n\nnot a color\n#0000FF\n  #00FF00 , Green  \n";
