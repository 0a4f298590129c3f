use bead_grid::{Palette, PaletteError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A palette color as supplied in requests and configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaletteColor {
    /// Hex color, `#RRGGBB` or `RRGGBB`
    #[schema(example = "#FF0000")]
    pub hex: String,
    /// Display name; defaults to the hex value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PaletteColor {
    pub fn new(hex: impl Into<String>, name: Option<String>) -> Self {
        Self {
            hex: hex.into(),
            name,
        }
    }
}

/// Build a matching palette from supplied colors.
///
/// An empty list means "no palette" and yields `None`. Any malformed hex
/// fails the whole palette.
pub fn build_palette(colors: &[PaletteColor]) -> Result<Option<Palette>, PaletteError> {
    if colors.is_empty() {
        return Ok(None);
    }
    Palette::from_pairs(colors.iter().map(|c| (c.hex.as_str(), c.name.as_deref()))).map(Some)
}

/// Convert a parsed palette back to its request form, with names filled in.
pub fn palette_colors(palette: &Palette) -> Vec<PaletteColor> {
    palette
        .entries()
        .iter()
        .map(|e| PaletteColor::new(e.hex(), Some(e.name().to_string())))
        .collect()
}
