//! Palette of bead colors with nearest-color matching.

use super::error::{PaletteError, ParseColorError};
use crate::color::Rgb;

/// One allowed output color.
///
/// The RGB value is derived from `hex` once, at construction time. `hex` is
/// kept exactly as supplied so that the default `name` (and therefore the
/// histogram label) reads back the way the caller wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    hex: String,
    rgb: Rgb,
    name: String,
}

impl PaletteEntry {
    /// Create an entry from a hex color and an optional display name.
    ///
    /// A missing or empty `name` defaults to `hex`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if `hex` is not `#?[0-9A-Fa-f]{6}`.
    ///
    /// # Example
    ///
    /// ```
    /// use bead_grid::{PaletteEntry, Rgb};
    ///
    /// let entry = PaletteEntry::new("#FF0000", None).unwrap();
    /// assert_eq!(entry.rgb(), Rgb::new(255, 0, 0));
    /// assert_eq!(entry.name(), "#FF0000");
    /// ```
    pub fn new(hex: &str, name: Option<&str>) -> Result<Self, ParseColorError> {
        let rgb = hex.parse::<Rgb>()?;
        let name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => hex.to_string(),
        };
        Ok(Self {
            hex: hex.to_string(),
            rgb,
            name,
        })
    }

    /// The hex color as supplied.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The parsed color.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Display name, used as the histogram label for beads matched to this entry.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An ordered, non-empty list of allowed bead colors.
///
/// Order has no effect on which color is nearest except when two entries are
/// exactly equidistant from a sample: the earlier entry wins. Duplicate
/// colors are allowed; the later duplicate is simply never selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a palette from already-parsed entries.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `entries` is empty.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self { entries })
    }

    /// Create a palette from `(hex, name)` pairs.
    ///
    /// Every entry must parse; the first malformed one fails the whole
    /// palette with its index, rather than being replaced by a fallback
    /// color.
    ///
    /// # Example
    ///
    /// ```
    /// use bead_grid::Palette;
    ///
    /// let palette = Palette::from_pairs([("#000000", Some("Black")), ("#ffffff", None)]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// assert!(Palette::from_pairs([("#00000", None)]).is_err());
    /// ```
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let entries = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (hex, name))| {
                PaletteEntry::new(hex, name).map_err(|source| PaletteError::InvalidColor {
                    index,
                    hex: hex.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in palette order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Find the entry nearest to `target` by Euclidean RGB distance.
    ///
    /// Linear scan with a strict `<` comparison, so among equidistant
    /// entries the first in palette order is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use bead_grid::{Palette, Rgb};
    ///
    /// let palette = Palette::from_pairs([("#000000", None), ("#ffffff", None)]).unwrap();
    /// assert_eq!(palette.closest(Rgb::new(10, 10, 10)).hex(), "#000000");
    /// assert_eq!(palette.closest(Rgb::new(200, 200, 200)).hex(), "#ffffff");
    /// ```
    pub fn closest(&self, target: Rgb) -> &PaletteEntry {
        let mut best = &self.entries[0];
        let mut best_dist = target.distance(best.rgb);

        for entry in &self.entries[1..] {
            let dist = target.distance(entry.rgb);
            if dist < best_dist {
                best_dist = dist;
                best = entry;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_white() -> Palette {
        Palette::from_pairs([("#000000", None), ("#ffffff", None)]).unwrap()
    }

    #[test]
    fn test_entry_name_defaults_to_hex() {
        let entry = PaletteEntry::new("#12ab34", None).unwrap();
        assert_eq!(entry.name(), "#12ab34");

        let entry = PaletteEntry::new("#12ab34", Some("")).unwrap();
        assert_eq!(entry.name(), "#12ab34");

        let entry = PaletteEntry::new("#12ab34", Some("Moss")).unwrap();
        assert_eq!(entry.name(), "Moss");
    }

    #[test]
    fn test_entry_keeps_hex_as_supplied() {
        let entry = PaletteEntry::new("FFAA00", None).unwrap();
        assert_eq!(entry.hex(), "FFAA00");
        assert_eq!(entry.rgb(), Rgb::new(255, 170, 0));
    }

    #[test]
    fn test_entry_rejects_malformed_hex() {
        assert_eq!(
            PaletteEntry::new("#ff00", None),
            Err(ParseColorError::InvalidLength)
        );
        assert_eq!(
            PaletteEntry::new("#ff00zz", None),
            Err(ParseColorError::InvalidDigit)
        );
    }

    #[test]
    fn test_palette_empty_error() {
        assert_eq!(Palette::new(Vec::new()), Err(PaletteError::EmptyPalette));
        let none: [(&str, Option<&str>); 0] = [];
        assert_eq!(Palette::from_pairs(none), Err(PaletteError::EmptyPalette));
    }

    #[test]
    fn test_from_pairs_reports_bad_index() {
        let err = Palette::from_pairs([("#000000", None), ("#12", Some("Bad"))]).unwrap_err();
        match err {
            PaletteError::InvalidColor { index, hex, .. } => {
                assert_eq!(index, 1);
                assert_eq!(hex, "#12");
            }
            other => panic!("Expected InvalidColor, got {other:?}"),
        }
    }

    #[test]
    fn test_closest_exact_match() {
        let palette = Palette::from_pairs([
            ("#ff0000", Some("Red")),
            ("#00ff00", Some("Green")),
            ("#0000ff", Some("Blue")),
        ])
        .unwrap();
        assert_eq!(palette.closest(Rgb::new(0, 255, 0)).name(), "Green");
    }

    #[test]
    fn test_closest_black_white() {
        let palette = black_white();
        assert_eq!(palette.closest(Rgb::new(10, 10, 10)).hex(), "#000000");
        assert_eq!(palette.closest(Rgb::new(200, 200, 200)).hex(), "#ffffff");
        // 127 is one step closer to black than to white on every channel
        assert_eq!(palette.closest(Rgb::new(127, 127, 127)).hex(), "#000000");
        assert_eq!(palette.closest(Rgb::new(128, 128, 128)).hex(), "#ffffff");
    }

    #[test]
    fn test_closest_tie_keeps_first_entry() {
        // (100,0,0) is exactly 100 away from both entries
        let palette =
            Palette::from_pairs([("#000000", Some("First")), ("#c80000", Some("Second"))]).unwrap();
        assert_eq!(palette.closest(Rgb::new(100, 0, 0)).name(), "First");

        let reversed =
            Palette::from_pairs([("#c80000", Some("Second")), ("#000000", Some("First"))]).unwrap();
        assert_eq!(reversed.closest(Rgb::new(100, 0, 0)).name(), "Second");
    }

    #[test]
    fn test_closest_duplicate_colors_prefer_first() {
        let palette =
            Palette::from_pairs([("#336699", Some("A")), ("#336699", Some("B"))]).unwrap();
        assert_eq!(palette.closest(Rgb::new(0x33, 0x66, 0x99)).name(), "A");
    }

    #[test]
    fn test_single_entry_always_wins() {
        let palette = Palette::from_pairs([("#808080", None)]).unwrap();
        for c in [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), Rgb::new(1, 200, 3)] {
            assert_eq!(palette.closest(c).hex(), "#808080");
        }
    }
}
