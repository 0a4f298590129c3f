//! Plain-text palette format.
//!
//! One entry per line, `hex,name`, with the name optional:
//!
//! ```text
//! #000000,Black
//! #FFFFFF,White
//! #E63946
//! ```
//!
//! Import is lenient per line and strict overall: lines whose hex is not
//! exactly `#` followed by six hex digits are dropped, but a file that
//! yields no entries at all is an error.

use super::error::PaletteImportError;
use super::palette::{Palette, PaletteEntry};

/// Parse palette text into a [`Palette`].
///
/// Blank lines are skipped. Each remaining line is split on `,`; the first
/// field (trimmed) must match `^#[0-9A-Fa-f]{6}$` and the second (trimmed,
/// optional) is the name. Any further fields are ignored.
///
/// # Errors
///
/// Returns [`PaletteImportError::NoValidColors`] if no line is valid.
///
/// # Example
///
/// ```
/// use bead_grid::import_palette;
///
/// let palette = import_palette("#000000,Black\nnot a color\n#ffffff\n").unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.entries()[1].name(), "#ffffff");
/// ```
pub fn import_palette(text: &str) -> Result<Palette, PaletteImportError> {
    let entries: Vec<PaletteEntry> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_line)
        .collect();

    Palette::new(entries).map_err(|_| PaletteImportError::NoValidColors)
}

/// Render a palette in the text format, one `hex,name` line per entry.
///
/// Lines are joined with `\n` and there is no trailing newline.
pub fn export_palette(palette: &Palette) -> String {
    palette
        .entries()
        .iter()
        .map(|e| format!("{},{}", e.hex(), e.name()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_line(line: &str) -> Option<PaletteEntry> {
    let mut fields = line.split(',').map(str::trim);
    let hex = fields.next()?;
    let name = fields.next();

    // The text format requires the leading '#', unlike the API
    if !hex.starts_with('#') {
        return None;
    }
    PaletteEntry::new(hex, name).ok()
}
