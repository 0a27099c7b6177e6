//! Surface configuration.

use serde::{Deserialize, Serialize};
use vsg_core::Color;

/// Tunables for an `SvgSurface` session.
///
/// Missing fields in a JSON config fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Tension for curve calls that do not pass one. Default: **0.5**.
    pub default_tension: f64,

    /// Baseline compensation on text nodes, moving the anchor from the top
    /// of the layout box to the baseline. Default: **"-86%"**.
    pub baseline_shift: String,

    /// `shape-rendering` placed on the top-level group. Default: **"crispEdges"**.
    pub initial_shape_rendering: String,

    /// Paint for brushes with no vector rendition. Default: salmon.
    pub fallback_brush_color: Color,

    /// Draw anchor line caps as decoration shapes. Default: **true**.
    pub emit_end_caps: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            default_tension: 0.5,
            baseline_shift: "-86%".to_string(),
            initial_shape_rendering: "crispEdges".to_string(),
            fallback_brush_color: Color::SALMON,
            emit_end_caps: true,
        }
    }
}

impl SurfaceConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
