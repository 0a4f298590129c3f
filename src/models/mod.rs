pub mod config;
pub mod palette;

pub use config::{AppConfig, Limits};
pub use palette::{build_palette, palette_colors, PaletteColor};
