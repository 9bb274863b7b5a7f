//! Configuration for the glyph search plugin and its hosts.
//!
//! Configuration is a small TOML file (`glyph.toml`) with three sections:
//! `[catalog]` (where the icon table lives), `[search]` (matching and result
//! rendering) and `[logging]` (`tracing` setup). Every key has a default, so a
//! missing file is equivalent to an empty one.

use std::path::{Path, PathBuf};

use glyph_fuzzy::SearchPrecision;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod logging;

pub use logging::{init_tracing, LoggingConfig};

/// Environment variable that points at an explicit config file.
pub const GLYPH_CONFIG_ENV_VAR: &str = "GLYPH_CONFIG_PATH";

/// File name looked up in the working directory when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "glyph.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// JSON icon table (`[{"Label": "...", "Value": 59136}, ...]`).
    ///
    /// Relative paths are resolved against the directory of the config file.
    #[serde(default = "CatalogConfig::default_path")]
    pub path: PathBuf,
}

impl CatalogConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("data.json")
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Minimum fuzzy-match precision for a glyph to be listed.
    #[serde(default)]
    pub precision: SearchPrecision,

    /// Font family hosts should use to render result glyphs.
    #[serde(default = "SearchConfig::default_font_family")]
    pub font_family: String,

    /// Icon shown next to every result (host-relative).
    #[serde(default = "SearchConfig::default_icon_path")]
    pub icon_path: PathBuf,
}

impl SearchConfig {
    fn default_font_family() -> String {
        "Segoe Fluent Icons".to_owned()
    }

    fn default_icon_path() -> PathBuf {
        PathBuf::from("icon.png")
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            precision: SearchPrecision::default(),
            font_family: Self::default_font_family(),
            icon_path: Self::default_icon_path(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlyphConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // `Display` includes a multi-line source snippet; the message is enough for a
        // single-line CLI error.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl GlyphConfig {
    /// Parse a config from TOML text. Relative paths are left untouched.
    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file, resolving relative paths against its directory.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::load_from_str(&text)?;
        if let Some(dir) = path.parent() {
            config.resolve_relative_to(dir);
        }
        Ok(config)
    }

    fn resolve_relative_to(&mut self, dir: &Path) {
        if self.catalog.path.is_relative() {
            self.catalog.path = dir.join(&self.catalog.path);
        }
        if let Some(file) = self.logging.file.as_mut() {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }
    }
}

/// Find the config file for `working_dir`.
///
/// `GLYPH_CONFIG_PATH` wins when set (even if the file does not exist, so the
/// subsequent load reports the bad path); otherwise `glyph.toml` in `working_dir`.
pub fn discover_config_path(working_dir: &Path) -> Option<PathBuf> {
    if let Some(value) = std::env::var_os(GLYPH_CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        let path = PathBuf::from(value);
        return Some(if path.is_relative() {
            working_dir.join(path)
        } else {
            path
        });
    }

    let candidate = working_dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load the effective config.
///
/// An `explicit` path is always loaded. Otherwise [`discover_config_path`] is
/// consulted and, when nothing is found, defaults are returned. The second tuple
/// element is the file that was loaded, if any.
pub fn load(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> Result<(GlyphConfig, Option<PathBuf>), ConfigError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_path(working_dir),
    };

    match path {
        Some(path) => {
            let config = GlyphConfig::load_from_path(&path)?;
            tracing::debug!(
                target: "glyph.config",
                path = %path.display(),
                "loaded config"
            );
            Ok((config, Some(path)))
        }
        None => Ok((GlyphConfig::default(), None)),
    }
}
