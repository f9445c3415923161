//! The flat attribute store.

use std::collections::HashMap;
use std::path::Path;

use fifteen_core::logging::targets;
use fifteen_render::Color;

use crate::error::{Error, Result};

/// A single style value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    /// A flat fill or text color.
    Color(Color),
    /// A length in pixels, e.g. a text size.
    Size(f32),
}

impl StyleValue {
    /// The color, if this value is one.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            Self::Size(_) => None,
        }
    }

    /// The size, if this value is one.
    pub fn as_size(&self) -> Option<f32> {
        match self {
            Self::Size(size) => Some(*size),
            Self::Color(_) => None,
        }
    }

    /// Interpret a TOML value.
    ///
    /// Strings are hex colors, numbers are sizes and arrays of three or four
    /// integers in 0-255 are RGB(A) colors.
    fn from_toml(attribute: &str, value: &toml::Value) -> Result<Self> {
        match value {
            toml::Value::String(hex) => Color::from_hex(hex)
                .map(Self::Color)
                .ok_or_else(|| Error::invalid_value(attribute, format!("bad hex color '{hex}'"))),
            toml::Value::Integer(n) => Ok(Self::Size(*n as f32)),
            toml::Value::Float(n) => Ok(Self::Size(*n as f32)),
            toml::Value::Array(channels) => Self::from_channels(attribute, channels),
            other => Err(Error::invalid_value(
                attribute,
                format!("expected a color or a size, got {}", other.type_str()),
            )),
        }
    }

    fn from_channels(attribute: &str, channels: &[toml::Value]) -> Result<Self> {
        if channels.len() != 3 && channels.len() != 4 {
            return Err(Error::invalid_value(
                attribute,
                format!("expected 3 or 4 color channels, got {}", channels.len()),
            ));
        }

        let mut rgba = [255u8; 4];
        for (slot, channel) in rgba.iter_mut().zip(channels) {
            *slot = channel
                .as_integer()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| Error::invalid_value(attribute, "color channels must be 0-255"))?;
        }

        let [r, g, b, a] = rgba;
        Ok(Self::Color(Color::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )))
    }
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<f32> for StyleValue {
    fn from(size: f32) -> Self {
        Self::Size(size)
    }
}

/// A flat mapping from attribute name to color or size.
///
/// A style is built once at startup and shared read-only (usually behind an
/// `Rc`) by the widgets that draw with it. Unknown attributes read as `None`.
///
/// # Example
///
/// ```
/// use fifteen_render::Color;
/// use fifteen_style::{attr, Style};
///
/// let style = Style::from_toml_str(r##"
///     TILE_BG = "#FF0000"
///     TILE_LABEL_TEXT_SIZE = 32
/// "##).unwrap();
///
/// assert_eq!(style.color(attr::TILE_BG), Color::from_hex("#FF0000"));
/// assert_eq!(style.size(attr::TILE_LABEL_TEXT_SIZE), Some(32.0));
/// assert_eq!(style.color(attr::PUZZLE_GRID_BG), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    attributes: HashMap<String, StyleValue>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a style from `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<StyleValue>,
    {
        let mut style = Self::new();
        for (key, value) in pairs {
            style.set_attr(key, value);
        }
        style
    }

    /// Parse a style from a TOML document of `NAME = value` pairs.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: toml::Table = source.parse()?;
        Self::from_toml_table(&table)
    }

    /// Build a style from an already parsed TOML table.
    pub fn from_toml_table(table: &toml::Table) -> Result<Self> {
        let mut style = Self::new();
        for (key, value) in table {
            style.set_attr(key.as_str(), StyleValue::from_toml(key, value)?);
        }
        tracing::debug!(target: targets::STYLE, attributes = style.len(), "parsed style table");
        Ok(style)
    }

    /// Read and parse a TOML style file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        Self::from_toml_str(&source)
    }

    /// Set (or replace) an attribute.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get an attribute.
    pub fn get_attr(&self, key: &str) -> Option<StyleValue> {
        self.attributes.get(key).copied()
    }

    /// Get an attribute as a color.
    pub fn color(&self, key: &str) -> Option<Color> {
        self.get_attr(key).and_then(|value| value.as_color())
    }

    /// Get an attribute as a color, or `fallback` when unset or not a color.
    pub fn color_or(&self, key: &str, fallback: Color) -> Color {
        self.color(key).unwrap_or(fallback)
    }

    /// Get an attribute as a size.
    pub fn size(&self, key: &str) -> Option<f32> {
        self.get_attr(key).and_then(|value| value.as_size())
    }

    /// Get an attribute as a size, or `fallback` when unset or not a size.
    pub fn size_or(&self, key: &str, fallback: f32) -> f32 {
        self.size(key).unwrap_or(fallback)
    }

    /// Layer `other` on top of this style; its attributes win.
    pub fn merge(&mut self, other: &Style) {
        for (key, value) in &other.attributes {
            self.attributes.insert(key.clone(), *value);
        }
    }

    /// Number of attributes set.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
