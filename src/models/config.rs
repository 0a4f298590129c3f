use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::palette::PaletteColor;

/// Configuration compiled into the binary, used when `CONFIG_FILE` is unset.
pub const EMBEDDED_CONFIG: &str = include_str!("../../config.yaml");

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Input size limits
    #[serde(default)]
    pub limits: Limits,

    /// Timeout for fetching remote images, in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Re-compress rendered PNGs with oxipng
    #[serde(default = "default_optimize_png")]
    pub optimize_png: bool,

    /// Named palettes
    #[serde(default)]
    pub palettes: BTreeMap<String, Vec<PaletteColor>>,
}

/// Limits applied to input images before any grid work
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest accepted encoded image, in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,

    /// Largest accepted width or height, in pixels
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_optimize_png() -> bool {
    true
}

fn default_max_image_bytes() -> usize {
    20 * 1024 * 1024 // 20 MiB
}

fn default_max_dimension() -> u32 {
    10_000
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_image_bytes: default_max_image_bytes(),
            max_dimension: default_max_dimension(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            fetch_timeout_secs: default_fetch_timeout(),
            optimize_png: default_optimize_png(),
            palettes: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or the embedded config when `None`.
    ///
    /// Read and parse failures are logged and fall back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let content = match path {
            Some(p) => match std::fs::read_to_string(p) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(
                        %e,
                        path = %p.display(),
                        "Failed to read config, using defaults"
                    );
                    return Self::default();
                }
            },
            None => EMBEDDED_CONFIG.to_string(),
        };

        match Self::from_yaml(&content) {
            Ok(config) => {
                tracing::info!(
                    palettes = config.palettes.len(),
                    max_image_bytes = config.limits.max_image_bytes,
                    max_dimension = config.limits.max_dimension,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Load from the `CONFIG_FILE` environment variable, if set.
    pub fn load_from_env() -> Self {
        let path = std::env::var("CONFIG_FILE").ok();
        Self::load(path.as_deref().map(Path::new))
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Colors of the named palette, if configured.
    pub fn palette(&self, name: &str) -> Option<&[PaletteColor]> {
        self.palettes.get(name).map(Vec::as_slice)
    }
}
