//! Path and region descriptors accepted by the drawing contract.
//!
//! Only rectangular clipping has a vector rendition; regions and clip
//! paths are accepted so callers can be told precisely what is missing.

use kurbo::{Point, Rect};
use vsg_core::FillMode;

/// A figure given as a point list, drawn as a polygon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphicsPath {
    pub points: Vec<Point>,
    pub fill_mode: FillMode,
}

impl GraphicsPath {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            fill_mode: FillMode::default(),
        }
    }

    #[must_use]
    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    Infinite,
    Rect(Rect),
    Path(GraphicsPath),
}

/// How a new clip combines with the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineMode {
    Replace,
    Intersect,
    Union,
    Xor,
    Exclude,
    Complement,
}

/// Snapshot token from `save`. Never produced by the SVG surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsState(pub u32);

/// Units for mapped containers and page transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphicsUnit {
    World,
    Display,
    #[default]
    Pixel,
    Point,
    Inch,
    Document,
    Millimeter,
}
