//! Serializer configuration.

use serde::{Deserialize, Serialize};

/// How a node's style reaches the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleMode {
    /// One presentation attribute per style key: `fill="red"`.
    #[default]
    Attributes,
    /// A single `style="fill:red;stroke:none"` attribute.
    Inline,
}

/// Configuration for `write_svg` and `to_element_tree`.
///
/// Missing fields in a JSON config fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteConfig {
    /// Indent nested elements, one per line. Default: **true**.
    pub pretty: bool,

    /// Spaces per nesting level when `pretty`. Default: **2**.
    pub indent: usize,

    /// Maximum decimal digits for coordinates. `None` keeps full precision.
    /// Default: **Some(3)**.
    pub precision: Option<usize>,

    /// Emit the `<?xml …?>` prolog. Default: **true**.
    pub xml_declaration: bool,

    pub style_mode: StyleMode,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 2,
            precision: Some(3),
            xml_declaration: true,
            style_mode: StyleMode::Attributes,
        }
    }
}

impl WriteConfig {
    /// Single-line output without the XML prolog.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            xml_declaration: false,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = WriteConfig::from_json(r#"{ "precision": 1, "style_mode": "inline" }"#).unwrap();
        assert_eq!(config.precision, Some(1));
        assert_eq!(config.style_mode, StyleMode::Inline);
        assert!(config.pretty);
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn null_precision_means_unbounded() {
        let config = WriteConfig::from_json(r#"{ "precision": null }"#).unwrap();
        assert_eq!(config.precision, None);
    }

    #[test]
    fn rejects_unknown_style_mode() {
        assert!(WriteConfig::from_json(r#"{ "style_mode": "css" }"#).is_err());
    }
}
