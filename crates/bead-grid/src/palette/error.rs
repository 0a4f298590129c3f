//! Error types for palette operations
//!
//! This module provides error types for hex color parsing, palette
//! construction, and palette text import.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when a string does not match `#?[0-9A-Fa-f]{6}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 6 characters after stripping '#')
    InvalidLength,
    /// A character outside `[0-9A-Fa-f]` was found
    InvalidDigit,
}

impl From<ParseIntError> for ParseColorError {
    fn from(_: ParseIntError) -> Self {
        ParseColorError::InvalidDigit
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 6 hex digits)")
            }
            ParseColorError::InvalidDigit => {
                write!(f, "invalid hex digit")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// Entry at `index` has a malformed hex color
    InvalidColor {
        /// Position of the entry in the supplied list
        index: usize,
        /// The hex string as supplied
        hex: String,
        /// Why it failed to parse
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::InvalidColor { index, hex, source } => {
                write!(f, "invalid color {:?} at index {}: {}", hex, index, source)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::InvalidColor { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error type for the palette text import format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteImportError {
    /// Not a single line carried a valid `#rrggbb` color
    NoValidColors,
}

impl fmt::Display for PaletteImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteImportError::NoValidColors => write!(f, "no valid colors found"),
        }
    }
}

impl std::error::Error for PaletteImportError {}
