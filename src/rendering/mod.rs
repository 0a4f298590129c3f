pub mod resize;
pub mod svg_to_png;

pub use resize::resize_area;
pub use svg_to_png::SvgRenderer;
