//! Vector description of a rendered bead board.
//!
//! A [`BeadScene`] is a canvas size plus an ordered list of primitives:
//! a white background rectangle followed by one circle per bead. It can be
//! serialized to SVG for any SVG rasterizer.

use std::fmt::Write as _;

/// Outline drawn around every bead.
pub const BEAD_STROKE: &str = "rgba(0,0,0,0.1)";

/// Width of the bead outline, in canvas pixels.
pub const BEAD_STROKE_WIDTH: f64 = 0.5;

/// Bead radius is the cell size divided by this, leaving a small gap
/// between neighbouring beads.
pub const BEAD_RADIUS_DIVISOR: f64 = 2.2;

/// A drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Opaque filled rectangle with no outline.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    /// Filled circle with the thin translucent bead outline.
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
    },
}

/// Canvas dimensions and primitives, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct BeadScene {
    width: u32,
    height: u32,
    primitives: Vec<Primitive>,
}

impl BeadScene {
    /// Start a scene with the white background already painted.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            primitives: vec![Primitive::Rect {
                x: 0.0,
                y: 0.0,
                width: width as f64,
                height: height as f64,
                fill: "white".to_string(),
            }],
        }
    }

    /// Preallocate room for `additional` more primitives.
    pub fn reserve(&mut self, additional: usize) {
        self.primitives.reserve(additional);
    }

    /// Append the bead for cell (`row`, `col`).
    ///
    /// Centered in its cell at `(col * size + size / 2, row * size + size / 2)`
    /// with radius `size / 2.2`.
    pub fn push_bead(&mut self, row: u32, col: u32, cell_size: u32, fill: String) {
        let size = cell_size as f64;
        self.primitives.push(Primitive::Circle {
            cx: col as f64 * size + size / 2.0,
            cy: row as f64 * size + size / 2.0,
            r: size / BEAD_RADIUS_DIVISOR,
            fill,
        });
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of bead circles (excludes the background).
    pub fn bead_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .count()
    }

    /// Serialize to a standalone SVG document.
    ///
    /// # Example
    ///
    /// ```
    /// use bead_grid::BeadScene;
    ///
    /// let mut scene = BeadScene::new(10, 10);
    /// scene.push_bead(0, 0, 10, "#ff0000".to_string());
    /// let svg = scene.to_svg();
    /// assert!(svg.starts_with("<svg width=\"10\" height=\"10\""));
    /// assert!(svg.contains("<circle cx=\"5\" cy=\"5\""));
    /// ```
    pub fn to_svg(&self) -> String {
        // Circles serialize to roughly 100 bytes each
        let mut svg = String::with_capacity(128 + self.primitives.len() * 100);
        let _ = write!(
            svg,
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            self.width, self.height
        );

        for primitive in &self.primitives {
            let _ = match primitive {
                Primitive::Rect {
                    x,
                    y,
                    width,
                    height,
                    fill,
                } => write!(
                    svg,
                    r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}"/>"#
                ),
                Primitive::Circle { cx, cy, r, fill } => write!(
                    svg,
                    r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}" stroke="{BEAD_STROKE}" stroke-width="{BEAD_STROKE_WIDTH}"/>"#
                ),
            };
        }

        svg.push_str("</svg>");
        svg
    }
}
