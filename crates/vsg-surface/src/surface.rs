//! The drawing contract: an immediate-mode 2D API in the style of a raster
//! device context.
//!
//! Every drawing call maps the given geometry through the current
//! transform at the moment of the call. Calls with no vector rendition
//! return [`DrawError::Unsupported`](vsg_core::DrawError) naming the
//! operation and leave the surface untouched.

use crate::bitmap::{Bitmap, Icon};
use crate::hints::{CompositingMode, PixelOffsetMode, SmoothingMode, TextRenderingHint};
use crate::region::{CombineMode, GraphicsPath, GraphicsState, GraphicsUnit, Region};
use crate::text::{StringFormat, TextLayout};
use kurbo::{Affine, Point, Rect, Size};
use vsg_core::{Brush, Color, FillMode, Font, MatrixOrder, Pen, Result};

/// Token returned by `begin_container`. Closing always ends the innermost
/// open container; the token only records the depth it was opened at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHandle {
    pub depth: usize,
}

pub trait DrawingSurface {
    // ─── Transform ───────────────────────────────────────────────────────

    fn translate(&mut self, dx: f64, dy: f64, order: MatrixOrder);
    fn scale(&mut self, sx: f64, sy: f64, order: MatrixOrder);
    /// Rotate by `degrees`, clockwise on the y-down canvas.
    fn rotate(&mut self, degrees: f64, order: MatrixOrder);
    fn multiply(&mut self, m: Affine, order: MatrixOrder);
    /// Drop the innermost scope's transform. At top level this restores
    /// identity.
    fn reset_transform(&mut self);
    /// The composed transform currently in effect.
    fn transform(&self) -> Affine;
    /// Replace the transform of the innermost scope.
    fn set_transform(&mut self, m: Affine);
    fn transform_points(&self, points: &mut [Point]) -> Result<()>;

    // ─── Containers & state ──────────────────────────────────────────────

    fn begin_container(&mut self) -> ContainerHandle;
    fn begin_container_mapped(&mut self, dst: Rect, src: Rect, unit: GraphicsUnit) -> Result<ContainerHandle>;
    fn end_container(&mut self, handle: ContainerHandle);
    fn save(&mut self) -> Result<GraphicsState>;
    fn restore(&mut self, state: GraphicsState) -> Result<()>;

    // ─── Clipping ────────────────────────────────────────────────────────

    fn set_clip(&mut self, rect: Rect);
    fn reset_clip(&mut self);
    fn set_clip_combined(&mut self, rect: Rect, mode: CombineMode) -> Result<()>;
    fn set_clip_path(&mut self, path: &GraphicsPath, mode: CombineMode) -> Result<()>;
    fn set_clip_region(&mut self, region: &Region, mode: CombineMode) -> Result<()>;
    fn intersect_clip(&mut self, region: &Region) -> Result<()>;
    fn exclude_clip(&mut self, region: &Region) -> Result<()>;
    fn translate_clip(&mut self, dx: f64, dy: f64) -> Result<()>;
    fn clip_bounds(&self) -> Result<Rect>;
    fn visible_clip_bounds(&self) -> Result<Rect>;
    fn is_clip_empty(&self) -> Result<bool>;
    fn is_visible_point(&self, p: Point) -> Result<bool>;
    fn is_visible_rect(&self, rect: Rect) -> Result<bool>;

    // ─── Rendering properties ────────────────────────────────────────────

    fn smoothing_mode(&self) -> SmoothingMode;
    fn set_smoothing_mode(&mut self, mode: SmoothingMode);
    fn text_rendering_hint(&self) -> TextRenderingHint;
    fn set_text_rendering_hint(&mut self, hint: TextRenderingHint);
    fn dpi_x(&self) -> Result<f64>;
    fn dpi_y(&self) -> Result<f64>;
    fn page_unit(&self) -> Result<GraphicsUnit>;
    fn page_scale(&self) -> Result<f64>;
    fn compositing_mode(&self) -> Result<CompositingMode>;
    fn rendering_origin(&self) -> Result<Point>;
    fn text_contrast(&self) -> Result<u32>;
    fn pixel_offset_mode(&self) -> Result<PixelOffsetMode>;
    fn nearest_color(&self, color: Color) -> Result<Color>;

    // ─── Lines & curves ──────────────────────────────────────────────────

    fn draw_line(&mut self, pen: &Pen, from: Point, to: Point) -> Result<()>;
    fn draw_lines(&mut self, pen: &Pen, points: &[Point]) -> Result<()>;
    fn draw_arc(&mut self, pen: &Pen, bounds: Rect, start_deg: f64, sweep_deg: f64) -> Result<()>;
    fn draw_bezier(&mut self, pen: &Pen, p0: Point, c1: Point, c2: Point, p1: Point) -> Result<()>;
    /// `points` is a start point followed by `c1, c2, end` triples.
    fn draw_beziers(&mut self, pen: &Pen, points: &[Point]) -> Result<()>;
    /// Cardinal spline through every point; `None` uses the default tension.
    fn draw_curve(&mut self, pen: &Pen, points: &[Point], tension: Option<f64>) -> Result<()>;
    /// Cardinal spline over `segments` segments starting at point `offset`.
    fn draw_curve_segments(
        &mut self,
        pen: &Pen,
        points: &[Point],
        offset: usize,
        segments: usize,
        tension: Option<f64>,
    ) -> Result<()>;
    fn draw_closed_curve(&mut self, pen: &Pen, points: &[Point], tension: Option<f64>) -> Result<()>;

    // ─── Shapes ──────────────────────────────────────────────────────────

    fn draw_rectangle(&mut self, pen: &Pen, rect: Rect) -> Result<()>;
    fn draw_rectangles(&mut self, pen: &Pen, rects: &[Rect]) -> Result<()>;
    fn draw_ellipse(&mut self, pen: &Pen, bounds: Rect) -> Result<()>;
    fn draw_pie(&mut self, pen: &Pen, bounds: Rect, start_deg: f64, sweep_deg: f64) -> Result<()>;
    fn draw_polygon(&mut self, pen: &Pen, points: &[Point]) -> Result<()>;
    fn draw_path(&mut self, pen: &Pen, path: &GraphicsPath) -> Result<()>;

    fn fill_rectangle(&mut self, brush: &Brush, rect: Rect) -> Result<()>;
    fn fill_rectangles(&mut self, brush: &Brush, rects: &[Rect]) -> Result<()>;
    fn fill_ellipse(&mut self, brush: &Brush, bounds: Rect) -> Result<()>;
    fn fill_pie(&mut self, brush: &Brush, bounds: Rect, start_deg: f64, sweep_deg: f64) -> Result<()>;
    fn fill_polygon(&mut self, brush: &Brush, points: &[Point], mode: FillMode) -> Result<()>;
    fn fill_closed_curve(
        &mut self,
        brush: &Brush,
        points: &[Point],
        tension: Option<f64>,
        mode: FillMode,
    ) -> Result<()>;
    fn fill_path(&mut self, brush: &Brush, path: &GraphicsPath) -> Result<()>;
    fn fill_region(&mut self, brush: &Brush, region: &Region) -> Result<()>;

    /// Remove everything drawn into the current container.
    fn clear(&mut self, color: Color);

    // ─── Text ────────────────────────────────────────────────────────────

    fn draw_string(
        &mut self,
        text: &str,
        font: &Font,
        brush: &Brush,
        layout: TextLayout,
        format: StringFormat,
    ) -> Result<()>;
    fn measure_string(&self, text: &str, font: &Font, max_width: Option<f64>) -> Size;
    fn measure_character_ranges(&self, text: &str, font: &Font, layout: Rect) -> Result<Vec<Rect>>;

    // ─── Images ──────────────────────────────────────────────────────────

    /// Draw at natural size with the top-left corner at `at`.
    fn draw_image(&mut self, image: &Bitmap, at: Point) -> Result<()>;
    /// Stretch to fill `dest`.
    fn draw_image_scaled(&mut self, image: &Bitmap, dest: Rect) -> Result<()>;
    /// Natural size, truncated to `dest`.
    fn draw_image_unscaled(&mut self, image: &Bitmap, dest: Rect) -> Result<()>;
    fn draw_image_points(&mut self, image: &Bitmap, dest: &[Point]) -> Result<()>;
    fn draw_image_source_rect(&mut self, image: &Bitmap, dest: Rect, src: Rect, unit: GraphicsUnit) -> Result<()>;
    fn draw_icon(&mut self, icon: &Icon, x: f64, y: f64) -> Result<()>;
    fn draw_icon_in(&mut self, icon: &Icon, dest: Rect) -> Result<()>;
    fn draw_icon_unstretched(&mut self, icon: &Icon, dest: Rect) -> Result<()>;

    // ─── Misc ────────────────────────────────────────────────────────────

    fn flush(&mut self);
    fn add_metafile_comment(&mut self, data: &[u8]);
}
