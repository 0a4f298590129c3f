//! Color type
//!
//! All matching happens on plain 8-bit RGB with Euclidean distance. There
//! is no perceptual color space and no gamma handling: a sample and a
//! palette entry are compared channel by channel exactly as stored.
//!
//! # Example
//!
//! ```
//! use bead_grid::Rgb;
//!
//! let a: Rgb = "#102030".parse().unwrap();
//! let b = Rgb::new(16, 32, 48);
//! assert_eq!(a.distance(b), 0.0);
//! ```

mod rgb;

pub use rgb::Rgb;
