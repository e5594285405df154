//! Build configuration.
//!
//! Every setting has a default that matches the usual site layout, so most
//! sites need no config file at all. To override, place a sparse
//! `gallery.toml` in the site root:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! data = "data/gallery.json"   # Gallery data, relative to the site root
//! index = "index.html"         # Host document rewritten in place
//! indent = 8                   # Spaces prefixed to each rendered line
//!
//! [markers]
//! start = "<!-- GALLERY:START -->"
//! end = "<!-- GALLERY:END -->"
//! ```
//!
//! User values are merged over the stock defaults. Unknown keys are rejected
//! to catch typos early.

use crate::splice::Markers;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for one gallery build, loaded from `gallery.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Gallery data file, relative to the site root.
    pub data: String,
    /// Host HTML document, relative to the site root.
    pub index: String,
    /// Spaces prefixed to each non-empty rendered line.
    pub indent: usize,
    /// Comment strings delimiting the managed region.
    pub markers: MarkerConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data: "data/gallery.json".to_string(),
            index: "index.html".to_string(),
            indent: 8,
            markers: MarkerConfig::default(),
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.is_empty() {
            return Err(ConfigError::Validation("data must not be empty".into()));
        }
        if self.index.is_empty() {
            return Err(ConfigError::Validation("index must not be empty".into()));
        }
        if self.markers.start.is_empty() || self.markers.end.is_empty() {
            return Err(ConfigError::Validation(
                "markers.start and markers.end must not be empty".into(),
            ));
        }
        if self.markers.start == self.markers.end {
            return Err(ConfigError::Validation(
                "markers.start and markers.end must differ".into(),
            ));
        }
        Ok(())
    }

    pub fn markers(&self) -> Markers<'_> {
        Markers {
            start: &self.markers.start,
            end: &self.markers.end,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    pub start: String,
    pub end: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            start: "<!-- GALLERY:START -->".to_string(),
            end: "<!-- GALLERY:END -->".to_string(),
        }
    }
}

/// A config bound to the site root it was loaded from.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    pub root: PathBuf,
    pub config: GalleryConfig,
}

impl SiteLayout {
    pub fn new(root: impl Into<PathBuf>, config: GalleryConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Load `gallery.toml` from `root` (or defaults) and bind it.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(root, load_config(root)?))
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.config.data)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(&self.config.index)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `gallery.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `gallery.toml` in `root`, merged over stock defaults.
pub fn load_config(root: &Path) -> Result<GalleryConfig, ConfigError> {
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// A fully-commented stock `gallery.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Gallery Splice Configuration
# ============================
# All settings are optional. Values shown below are the defaults.
# Paths are relative to the site root (the directory holding this file).
# Unknown keys will cause an error.

# Gallery data: { "items": [ ... ] }
data = "data/gallery.json"

# HTML document whose gallery region is rewritten in place.
index = "index.html"

# Spaces prefixed to every non-empty rendered line, and to the end marker.
indent = 8

# ---------------------------------------------------------------------------
# Managed region delimiters
# ---------------------------------------------------------------------------
# Both must appear in the index document. Everything between them is
# replaced on each build.
[markers]
start = "<!-- GALLERY:START -->"
end = "<!-- GALLERY:END -->"
"##
}
