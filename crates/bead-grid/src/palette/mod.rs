//! Palette types and utilities
//!
//! This module provides the [`Palette`] used for nearest-color matching,
//! the plain-text import/export format, and the associated error types.

mod error;
mod palette;
mod text;

pub use error::{PaletteError, PaletteImportError, ParseColorError};
pub use palette::{Palette, PaletteEntry};
pub use text::{export_palette, import_palette};
