//! File-level style configuration.
//!
//! A [`StyleConfig`] names a preset and overrides any part of it. Everything
//! except the preset is optional, so a config file only lists what differs:
//!
//! ```yaml
//! preset: double
//! inner_row_border: true
//! padding_left: 2
//! justify:
//!   1: right
//!   2: center
//! glyphs:
//!   horizontal: "~"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::align::{Justify, VerticalAlign};
use crate::error::Result;
use crate::style::{BorderChars, Preset, TableStyle};

/// Overrides for individual border glyphs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphOverrides {
    pub horizontal: Option<String>,
    pub vertical: Option<String>,
    pub top_left: Option<String>,
    pub top_right: Option<String>,
    pub bottom_left: Option<String>,
    pub bottom_right: Option<String>,
    pub left_t: Option<String>,
    pub cross: Option<String>,
    pub right_t: Option<String>,
    pub top_t: Option<String>,
    pub bottom_t: Option<String>,
}

impl GlyphOverrides {
    fn apply(&self, chars: &mut BorderChars) {
        let slots = [
            (&self.horizontal, &mut chars.horizontal),
            (&self.vertical, &mut chars.vertical),
            (&self.top_left, &mut chars.top_left),
            (&self.top_right, &mut chars.top_right),
            (&self.bottom_left, &mut chars.bottom_left),
            (&self.bottom_right, &mut chars.bottom_right),
            (&self.left_t, &mut chars.left_t),
            (&self.cross, &mut chars.cross),
            (&self.right_t, &mut chars.right_t),
            (&self.top_t, &mut chars.top_t),
            (&self.bottom_t, &mut chars.bottom_t),
        ];
        for (value, slot) in slots {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }
    }
}

/// A preset plus optional overrides, as read from a config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Base style.
    pub preset: Preset,
    pub outer_border: Option<bool>,
    pub inner_column_border: Option<bool>,
    pub inner_heading_row_border: Option<bool>,
    pub inner_footing_row_border: Option<bool>,
    pub inner_row_border: Option<bool>,
    pub padding_left: Option<usize>,
    pub padding_right: Option<usize>,
    pub vertical_align: Option<VerticalAlign>,
    /// Per-column alignment, merged into the preset's.
    pub justify: BTreeMap<usize, Justify>,
    pub glyphs: GlyphOverrides,
}

impl StyleConfig {
    /// Parses a config from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Yaml`](crate::TableError::Yaml) on malformed input
    /// or unknown keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use termtables::{Preset, StyleConfig};
    ///
    /// let config = StyleConfig::from_yaml("preset: porcelain\npadding_left: 0\n").unwrap();
    /// assert_eq!(config.preset, Preset::Porcelain);
    ///
    /// let style = config.resolve();
    /// assert_eq!(style.padding_left, 0);
    /// assert!(!style.outer_border);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Json`](crate::TableError::Json) on malformed input
    /// or unknown keys.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a config file. `.json` files are parsed as JSON, anything else as
    /// YAML.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Io`](crate::TableError::Io) if the file can't be
    /// read, or a parse error from [`from_yaml`](Self::from_yaml) /
    /// [`from_json`](Self::from_json).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Applies the overrides to the preset.
    pub fn resolve(&self) -> TableStyle {
        let mut style = self.preset.style();
        self.apply_to(&mut style);
        style
    }

    /// Applies the overrides to an existing style, leaving unset fields alone.
    pub fn apply_to(&self, style: &mut TableStyle) {
        let flags = [
            (self.outer_border, &mut style.outer_border),
            (self.inner_column_border, &mut style.inner_column_border),
            (self.inner_heading_row_border, &mut style.inner_heading_row_border),
            (self.inner_footing_row_border, &mut style.inner_footing_row_border),
            (self.inner_row_border, &mut style.inner_row_border),
        ];
        for (value, slot) in flags {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if let Some(left) = self.padding_left {
            style.padding_left = left;
        }
        if let Some(right) = self.padding_right {
            style.padding_right = right;
        }
        if let Some(vertical) = self.vertical_align {
            style.vertical_align = vertical;
        }
        style
            .justify_columns
            .extend(self.justify.iter().map(|(&col, &j)| (col, j)));
        self.glyphs.apply(&mut style.chars);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_is_default_preset() {
        let config = StyleConfig::from_yaml("").unwrap();
        assert_eq!(config, StyleConfig::default());
        assert_eq!(config.resolve(), TableStyle::ascii());
    }

    #[test]
    fn test_yaml_overrides() {
        let config = StyleConfig::from_yaml(
            r#"
preset: double
inner_row_border: true
outer_border: false
padding_right: 3
vertical_align: middle
justify:
  0: right
  2: center
glyphs:
  horizontal: "~"
"#,
        )
        .unwrap();

        let style = config.resolve();
        assert_eq!(style.chars.horizontal, "~");
        assert_eq!(style.chars.vertical, "║");
        assert!(style.inner_row_border);
        assert!(!style.outer_border);
        assert!(style.inner_heading_row_border);
        assert_eq!(style.padding_left, 1);
        assert_eq!(style.padding_right, 3);
        assert_eq!(style.vertical_align, VerticalAlign::Middle);
        assert_eq!(style.justify_columns.get(&0), Some(&Justify::Right));
        assert_eq!(style.justify_columns.get(&2), Some(&Justify::Center));
    }

    #[test]
    fn test_json_config() {
        let config =
            StyleConfig::from_json(r#"{"preset": "markdown", "justify": {"1": "right"}}"#)
                .unwrap();
        let style = config.resolve();
        assert_eq!(style.layout, crate::Layout::Markdown);
        assert_eq!(style.justify_columns.get(&1), Some(&Justify::Right));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = StyleConfig::from_yaml("preset: ascii\nborders: none\n").unwrap_err();
        assert!(matches!(err, crate::TableError::Yaml(_)));

        let err = StyleConfig::from_json(r#"{"preset": "fancy"}"#).unwrap_err();
        assert!(matches!(err, crate::TableError::Json(_)));
    }

    #[test]
    fn test_apply_to_keeps_unset_fields() {
        let mut style = TableStyle::porcelain().justify(0, Justify::Center);
        StyleConfig {
            padding_left: Some(0),
            ..Default::default()
        }
        .apply_to(&mut style);
        assert_eq!(style.padding_left, 0);
        assert!(!style.outer_border);
        assert_eq!(style.justify_columns.get(&0), Some(&Justify::Center));
    }

    #[test]
    fn test_from_file_picks_format_by_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json.write_all(br#"{"preset": "rounded"}"#).unwrap();
        assert_eq!(
            StyleConfig::from_file(json.path()).unwrap().preset,
            Preset::Rounded
        );

        let mut yaml = tempfile::Builder::new().suffix(".conf").tempfile().unwrap();
        yaml.write_all(b"preset: heavy\n").unwrap();
        assert_eq!(
            StyleConfig::from_file(yaml.path()).unwrap().preset,
            Preset::Heavy
        );
    }

    #[test]
    fn test_from_file_json_extension_is_case_insensitive() {
        let mut file = tempfile::Builder::new().suffix(".JSON").tempfile().unwrap();
        file.write_all(br#"{"preset": "double", "inner_row_border": true}"#)
            .unwrap();
        let style = StyleConfig::from_file(file.path()).unwrap().resolve();
        assert_eq!(style.chars.top_left, "╔");
        assert!(style.inner_row_border);
    }

    #[test]
    fn test_from_file_missing() {
        let err = StyleConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, crate::TableError::Io(_)));
    }
}
