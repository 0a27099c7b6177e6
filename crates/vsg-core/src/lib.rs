pub mod error;
pub mod geometry;
pub mod hatch;
pub mod id;
pub mod model;
pub mod paint;
pub mod style;
pub mod transform;

pub use error::{DrawError, Result};
pub use geometry::{ArcGeometry, arc_geometry, arc_to_path, spline_to_bezier};
pub use hatch::{HatchPrimitive, HatchStyle};
pub use id::NodeId;
pub use model::*;
pub use paint::*;
pub use style::StyleTranslator;
pub use transform::{MatrixOrder, TransformStack};

// Re-export geometry and graph types so downstream crates don't need a direct dependency
pub use kurbo::{Affine, Point, Rect, Size, Vec2};
pub use petgraph::graph::NodeIndex;
