//! Area-averaging resize.
//!
//! Every output pixel is the mean of the source region it covers, weighted
//! by coverage. Downscaling to the bead grid this way makes each grid sample
//! the average color of its cell; upscaling gives blocky output with blended
//! seams wherever a block boundary falls inside a target pixel.

use image::RgbImage;

/// Per-output-index list of `(source index, weight)`; weights sum to 1.
type AxisWeights = Vec<Vec<(usize, f32)>>;

/// Resize `src` to exactly `width` x `height` with an area (box) filter.
///
/// # Panics
///
/// Panics if the source or the target has a zero dimension.
pub fn resize_area(src: &RgbImage, width: u32, height: u32) -> RgbImage {
    let (src_w, src_h) = src.dimensions();
    assert!(
        src_w > 0 && src_h > 0 && width > 0 && height > 0,
        "cannot resize {src_w}x{src_h} to {width}x{height}"
    );

    if (src_w, src_h) == (width, height) {
        return src.clone();
    }

    let x_weights = axis_weights(src_w, width);
    let y_weights = axis_weights(src_h, height);
    let src_raw = src.as_raw();

    // Horizontal pass: src_h rows of `width` pixels
    let mut horizontal = vec![0f32; width as usize * src_h as usize * 3];
    for y in 0..src_h as usize {
        let src_row = &src_raw[y * src_w as usize * 3..(y + 1) * src_w as usize * 3];
        let out_row = &mut horizontal[y * width as usize * 3..(y + 1) * width as usize * 3];
        for (ox, weights) in x_weights.iter().enumerate() {
            let mut acc = [0f32; 3];
            for &(sx, w) in weights {
                for c in 0..3 {
                    acc[c] += src_row[sx * 3 + c] as f32 * w;
                }
            }
            out_row[ox * 3..ox * 3 + 3].copy_from_slice(&acc);
        }
    }

    // Vertical pass
    let row_len = width as usize * 3;
    let mut out = RgbImage::new(width, height);
    for (out_row, weights) in out.chunks_exact_mut(row_len).zip(&y_weights) {
        for (i, channel) in out_row.iter_mut().enumerate() {
            let v: f32 = weights
                .iter()
                .map(|&(sy, w)| horizontal[sy * row_len + i] * w)
                .sum();
            *channel = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Coverage of each source index by each output index along one axis.
fn axis_weights(src_len: u32, dst_len: u32) -> AxisWeights {
    let scale = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|i| {
            let start = i as f64 * scale;
            let end = ((i + 1) as f64 * scale).min(src_len as f64);
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src_len as usize);
            (first..last)
                .filter_map(|s| {
                    let overlap = end.min((s + 1) as f64) - start.max(s as f64);
                    (overlap > 1e-9).then_some((s, (overlap / (end - start)) as f32))
                })
                .collect()
        })
        .collect()
}
