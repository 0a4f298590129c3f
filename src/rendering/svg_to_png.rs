use crate::error::RenderError;
use resvg::usvg::{self, Transform};
use std::io::Cursor;
use tiny_skia::Pixmap;

/// Rasterizes bead scenes (as SVG) and encodes RGB pixel data to PNG.
///
/// Output is always 8-bit truecolor PNG. When `optimize` is set the
/// encoded file is re-compressed with oxipng.
pub struct SvgRenderer {
    optimize: bool,
}

impl SvgRenderer {
    pub fn new(optimize: bool) -> Self {
        Self { optimize }
    }

    /// Render an SVG document to a `width` x `height` PNG.
    ///
    /// The document is scaled to fit and centered on a white canvas.
    pub fn render_to_png(
        &self,
        svg_data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize_svg(svg_data, width, height)?;
        let rgb = rgba_to_rgb(pixmap.data());
        self.encode_rgb(width, height, &rgb)
    }

    /// Encode packed 8-bit RGB data as PNG.
    pub fn encode_rgb(
        &self,
        width: u32,
        height: u32,
        rgb: &[u8],
    ) -> Result<Vec<u8>, RenderError> {
        if width == 0 || height == 0 || rgb.len() != width as usize * height as usize * 3 {
            return Err(RenderError::UnsupportedDimensions { width, height });
        }

        let png_bytes = encode_png(width, height, rgb, self.optimize)?;
        if !self.optimize {
            return Ok(png_bytes);
        }

        // Re-compress with oxipng (adaptive filter selection)
        Ok(oxipng::optimize_from_memory(
            &png_bytes,
            &oxipng::Options {
                strip: oxipng::StripChunks::Safe,
                optimize_alpha: false,
                ..Default::default()
            },
        )
        .unwrap_or(png_bytes))
    }

    /// Parse and rasterize SVG to an RGBA pixmap
    fn rasterize_svg(
        &self,
        svg_data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Pixmap, RenderError> {
        let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let svg_size = tree.size();
        let scale_x = width as f32 / svg_size.width();
        let scale_y = height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        let scaled_width = svg_size.width() * scale;
        let scaled_height = svg_size.height() * scale;
        let offset_x = (width as f32 - scaled_width) / 2.0;
        let offset_y = (height as f32 - scaled_height) / 2.0;

        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Drop the alpha channel of premultiplied RGBA data, compositing against white.
fn rgba_to_rgb(rgba_data: &[u8]) -> Vec<u8> {
    rgba_data
        .chunks_exact(4)
        .flat_map(|pixel| {
            let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
            if a == 255 {
                [r, g, b]
            } else {
                // premultiplied: c + white * (1 - a)
                let inv = 255 - a as u16;
                [
                    (r as u16 + inv).min(255) as u8,
                    (g as u16 + inv).min(255) as u8,
                    (b as u16 + inv).min(255) as u8,
                ]
            }
        })
        .collect()
}

/// Encode RGB pixel data as a PNG.
///
/// With `fast` set, compression is minimal since oxipng re-compresses.
fn encode_png(width: u32, height: u32, rgb: &[u8], fast: bool) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        if fast {
            encoder.set_compression(png::Compression::Fast);
            encoder.set_filter(png::FilterType::NoFilter);
        } else {
            encoder.set_compression(png::Compression::Default);
            encoder.set_filter(png::FilterType::Paeth);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
