//! Game configuration.
//!
//! A configuration is a small TOML document. Every section and key is
//! optional:
//!
//! ```toml
//! [root]
//! width = 400
//! height = 400
//!
//! [grid]
//! border_width = 8
//!
//! [style]
//! TILE_BG = "#3282B8"
//! TILE_LABEL_TEXT_SIZE = 24
//! ```
//!
//! The `[style]` table is layered over [`Style::default_theme`].

use std::path::{Path, PathBuf};

use fifteen_core::logging::targets;
use fifteen_render::Size;
use fifteen_style::Style;
use serde::{Deserialize, Serialize};

use crate::puzzle::DEFAULT_BORDER_WIDTH;

/// Errors raised while reading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML syntax or shape error.
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The `[style]` table holds a bad value.
    #[error(transparent)]
    Style(#[from] fifteen_style::Error),

    /// A field is out of range.
    #[error("Invalid config value for '{field}': {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

/// Logical size of the root view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
        }
    }
}

/// Puzzle grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub border_width: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            border_width: DEFAULT_BORDER_WIDTH,
        }
    }
}

/// The whole configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub root: RootConfig,
    pub grid: GridConfig,
    /// Attribute overrides, kept raw until [`Config::style`] resolves them.
    pub style: toml::Table,
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::GAME, path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Check that the geometry leaves room for sixteen tiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let RootConfig { width, height } = self.root;
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigError::invalid("root.width", format!("{width} is not a positive size")));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ConfigError::invalid("root.height", format!("{height} is not a positive size")));
        }

        let border = self.grid.border_width;
        if !(border.is_finite() && border >= 0.0) {
            return Err(ConfigError::invalid(
                "grid.border_width",
                format!("{border} is negative"),
            ));
        }
        if 5.0 * border >= width.min(height) {
            return Err(ConfigError::invalid(
                "grid.border_width",
                format!("{border} leaves no room for tiles in {width}x{height}"),
            ));
        }
        Ok(())
    }

    /// The root view size.
    pub fn root_size(&self) -> Size {
        Size::new(self.root.width, self.root.height)
    }

    /// The default theme with the `[style]` overrides applied.
    pub fn style(&self) -> Result<Style, ConfigError> {
        let overrides = Style::from_toml_table(&self.style)?;
        Ok(Style::themed(&overrides))
    }
}
