//! Immediate-mode drawing surface that records calls as an SVG scene graph.
//!
//! ```
//! use vsg_surface::{DrawingSurface, SvgSurface};
//! use vsg_core::{Color, Pen, Point, Rect};
//!
//! let mut surface = SvgSurface::new(100.0, 100.0);
//! surface
//!     .draw_line(&Pen::new(Color::BLACK, 2.0), Point::new(0.0, 0.0), Point::new(50.0, 50.0))
//!     .unwrap();
//! surface.fill_rectangle(&Color::RED.into(), Rect::new(10.0, 10.0, 60.0, 40.0)).unwrap();
//! let svg = surface.to_svg(&vsg_svg::WriteConfig::default());
//! assert!(svg.contains("<line"));
//! ```

pub mod bitmap;
pub mod builder;
pub mod config;
pub mod hints;
pub mod region;
pub mod surface;
pub mod text;

pub use bitmap::{Bitmap, Icon, Placement};
pub use builder::SvgSurface;
pub use config::SurfaceConfig;
pub use hints::{CompositingMode, PixelOffsetMode, SmoothingMode, TextRenderingHint};
pub use region::{CombineMode, GraphicsPath, GraphicsState, GraphicsUnit, Region};
pub use surface::{ContainerHandle, DrawingSurface};
pub use text::{FixedPitchMeasurer, StringAlignment, StringFormat, TextLayout, TextMeasurer};
