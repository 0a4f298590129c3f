//! 8-bit RGB color type
//!
//! Every color in the pipeline is an exact 8-bit triple: samples read from
//! the downsampled grid buffer, palette entries parsed from hex, and the
//! representative colors stored in the histogram.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color as an 8-bit RGB triple.
///
/// Plain value type with no identity beyond its components. Parsing from a
/// hex string goes through [`FromStr`]; formatting back uses [`Rgb::to_hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    ///
    /// # Example
    /// ```
    /// use bead_grid::Rgb;
    /// assert_eq!(Rgb::from_bytes([255, 0, 16]), Rgb::new(255, 0, 16));
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Canonical `#rrggbb` form: lowercase, two zero-padded digits per channel.
    ///
    /// # Example
    /// ```
    /// use bead_grid::Rgb;
    /// assert_eq!(Rgb::new(255, 0, 16).to_hex(), "#ff0010");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS functional notation, `rgb(r,g,b)`, as used for literal fills.
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Euclidean distance in RGB space.
    ///
    /// Ranges from `0.0` (identical) to `255 * sqrt(3)` (black to white).
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a 6-digit hex string.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB`, case-insensitive. Shorthand (`#RGB`)
    /// and surrounding whitespace are rejected.
    ///
    /// # Example
    /// ```
    /// use bead_grid::Rgb;
    ///
    /// let c: Rgb = "#FF0010".parse().unwrap();
    /// assert_eq!(c, Rgb::new(255, 0, 16));
    /// assert!("#F00".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 {
            return Err(ParseColorError::InvalidLength);
        }
        // from_str_radix accepts a leading '+', which is not a hex digit
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit);
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!("#00ff80".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 128));
        assert_eq!("00ff80".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 128));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "#AbCdEf".parse::<Rgb>().unwrap(),
            "#abcdef".parse::<Rgb>().unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!("#fff".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!(
            "#ffffff00".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        );
        assert_eq!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!(" #ffffff".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
    }

    #[test]
    fn test_parse_rejects_non_hex_digits() {
        assert_eq!("#gg0000".parse::<Rgb>(), Err(ParseColorError::InvalidDigit));
        assert_eq!("#+f0000".parse::<Rgb>(), Err(ParseColorError::InvalidDigit));
    }

    #[test]
    fn test_hex_roundtrip_example() {
        let c = Rgb::new(255, 0, 16);
        assert_eq!(c.to_hex(), "#ff0010");
        assert_eq!(c.to_hex().parse::<Rgb>().unwrap(), c);
    }

    #[test]
    fn test_hex_roundtrip_channel_sweep() {
        for v in 0..=255u8 {
            for c in [Rgb::new(v, 0, 0), Rgb::new(0, v, 0), Rgb::new(0, 0, v)] {
                assert_eq!(c.to_hex().parse::<Rgb>().unwrap(), c);
            }
        }
    }

    #[test]
    fn test_display_matches_to_hex() {
        let c = Rgb::new(1, 2, 3);
        assert_eq!(c.to_string(), c.to_hex());
        assert_eq!(c.to_string(), "#010203");
    }

    #[test]
    fn test_css_form() {
        assert_eq!(Rgb::new(12, 0, 255).to_css(), "rgb(12,0,255)");
    }

    #[test]
    fn test_distance_identity_and_symmetry() {
        let a = Rgb::new(10, 200, 30);
        let b = Rgb::new(250, 0, 99);
        assert_eq!(a.distance(a), 0.0);
        assert_eq!(a.distance(b), b.distance(a));
        assert!(a.distance(b) > 0.0);
    }

    #[test]
    fn test_distance_extremes() {
        let d = Rgb::new(0, 0, 0).distance(Rgb::new(255, 255, 255));
        assert!((d - 255.0 * 3f64.sqrt()).abs() < 1e-9);
        assert_eq!(Rgb::new(0, 0, 0).distance(Rgb::new(3, 4, 0)), 5.0);
    }
}
