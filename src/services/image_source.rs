//! Input image acquisition.
//!
//! Resolves an input reference (data URL, http(s) URL or, for the CLI, a
//! local path) to bytes, enforces the configured limits and decodes to a
//! 3-channel RGB buffer with transparency flattened onto white.

use crate::error::SourceError;
use crate::models::{AppConfig, Limits};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use image::{ImageReader, RgbImage, RgbaImage};
use std::io::{Cursor, Read};
use std::path::PathBuf;
use std::time::Duration;

/// Where an input image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// `data:` URL; the payload after the first comma is base64.
    DataUrl(String),
    /// `http://` or `https://` URL.
    Remote(String),
    /// Local file (CLI only).
    File(PathBuf),
}

impl ImageSource {
    /// Parse an image reference received over HTTP. Local paths are rejected.
    pub fn parse(input: &str) -> Result<Self, SourceError> {
        let trimmed = input.trim();
        if trimmed.starts_with("data:") {
            Ok(ImageSource::DataUrl(trimmed.to_string()))
        } else if is_http_url(trimmed) {
            Ok(ImageSource::Remote(trimmed.to_string()))
        } else {
            Err(SourceError::UnsupportedSource(truncate_for_log(trimmed)))
        }
    }

    /// Interpret a command-line argument: URLs as for [`Self::parse`],
    /// anything else as a file path.
    pub fn from_cli_arg(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|_| ImageSource::File(PathBuf::from(input)))
    }

    /// Short description for logging; never includes a data URL payload.
    pub fn describe(&self) -> String {
        match self {
            ImageSource::DataUrl(url) => format!("data URL ({} bytes)", url.len()),
            ImageSource::Remote(url) => url.clone(),
            ImageSource::File(path) => path.display().to_string(),
        }
    }
}

fn is_http_url(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn truncate_for_log(s: &str) -> String {
    s.chars().take(64).collect()
}

/// Fetches and decodes input images within configured limits.
#[derive(Debug, Clone)]
pub struct ImageLoader {
    limits: Limits,
    fetch_timeout: Duration,
}

impl ImageLoader {
    pub fn new(limits: Limits, fetch_timeout: Duration) -> Self {
        Self {
            limits,
            fetch_timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.limits,
            Duration::from_secs(config.fetch_timeout_secs),
        )
    }

    /// Read, check and decode `source`.
    ///
    /// Blocking: remote sources are fetched synchronously, so call this
    /// from a blocking context.
    pub fn load(&self, source: &ImageSource) -> Result<RgbImage, SourceError> {
        let bytes = self.read_bytes(source)?;
        tracing::debug!(source = %source.describe(), bytes = bytes.len(), "Image bytes loaded");
        self.decode(&bytes)
    }

    /// Obtain the encoded bytes of `source`, enforcing the byte limit.
    pub fn read_bytes(&self, source: &ImageSource) -> Result<Vec<u8>, SourceError> {
        let bytes = match source {
            ImageSource::DataUrl(url) => decode_data_url(url)?,
            ImageSource::Remote(url) => self.fetch(url)?,
            ImageSource::File(path) => std::fs::read(path)?,
        };
        self.check_size(bytes.len())?;
        Ok(bytes)
    }

    /// Decode encoded image bytes to RGB, enforcing the dimension limit
    /// before the pixel data is decoded.
    pub fn decode(&self, bytes: &[u8]) -> Result<RgbImage, SourceError> {
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_dimensions()?;
        let max = self.limits.max_dimension;
        if width > max || height > max {
            return Err(SourceError::DimensionsTooLarge { width, height, max });
        }

        let decoded = image::load_from_memory(bytes)?;
        let rgb = if decoded.color().has_alpha() {
            flatten_on_white(&decoded.to_rgba8())
        } else {
            decoded.to_rgb8()
        };
        tracing::debug!(width, height, "Image decoded");
        Ok(rgb)
    }

    fn check_size(&self, size: usize) -> Result<(), SourceError> {
        let max = self.limits.max_image_bytes;
        if size > max {
            return Err(SourceError::TooLarge { size, max });
        }
        Ok(())
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        tracing::debug!(url = %url, "Fetching image");

        let client = reqwest::blocking::Client::builder()
            .timeout(self.fetch_timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        let response = client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::FetchStatus(status.as_u16()));
        }
        if let Some(length) = response.content_length() {
            self.check_size(usize::try_from(length).unwrap_or(usize::MAX))?;
        }

        // Read at most one byte past the limit so oversized bodies fail
        // without being buffered whole.
        let cap = self.limits.max_image_bytes as u64 + 1;
        let mut bytes = Vec::new();
        response.take(cap).read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

/// Standard alphabet, padding optional, trailing bits ignored.
const DATA_URL_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode the base64 payload of a `data:` URL.
///
/// Accepts padded or unpadded payloads in either the standard or the
/// URL-safe alphabet. Whitespace is ignored.
fn decode_data_url(url: &str) -> Result<Vec<u8>, SourceError> {
    let (_, payload) = url.split_once(',').ok_or(SourceError::InvalidDataUrl)?;
    let payload: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();
    Ok(DATA_URL_BASE64.decode(payload)?)
}

/// Composite RGBA pixels over an opaque white background.
fn flatten_on_white(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let a = a as u32;
        let blend = |c: u8| ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8;
        image::Rgb([blend(r), blend(g), blend(b)])
    })
}
