//! `SvgSurface`: records drawing calls into a scene-graph document.
//!
//! Each call builds its geometry, resolves its style, snapshots the composed
//! transform onto the new node and appends it to the current group.
//! Containers open nested groups; the top-level group is never closed.

use crate::bitmap::{self, Bitmap, Icon, Placement};
use crate::config::SurfaceConfig;
use crate::hints::{CompositingMode, PixelOffsetMode, SmoothingMode, TextRenderingHint};
use crate::region::{CombineMode, GraphicsPath, GraphicsState, GraphicsUnit, Region};
use crate::surface::{ContainerHandle, DrawingSurface};
use crate::text::{FixedPitchMeasurer, StringAlignment, StringFormat, TextLayout, TextMeasurer};
use kurbo::{Affine, Point, Rect, Size};
use vsg_core::{
    Brush, Color, Document, DrawError, FillMode, Font, LineCap, MatrixOrder, NodeIndex, NodeKind,
    PathData, Pen, Result, SceneNode, Style, StyleTranslator, TransformStack, arc_to_path,
    format_num, spline_to_bezier,
};
use vsg_svg::{SvgElement, WriteConfig};

fn unsupported<T>(operation: &'static str) -> Result<T> {
    log::debug!("unsupported call: {operation}");
    Err(DrawError::unsupported(operation))
}

fn require_points(points: &[Point], min: usize, what: &str) -> Result<()> {
    if points.len() < min {
        return Err(DrawError::InvalidArgument(format!(
            "{what} needs at least {min} points, got {}",
            points.len()
        )));
    }
    Ok(())
}

#[derive(Debug)]
pub struct SvgSurface<M: TextMeasurer = FixedPitchMeasurer> {
    doc: Document,
    current: NodeIndex,
    open_containers: usize,
    transforms: TransformStack,
    styles: StyleTranslator,
    config: SurfaceConfig,
    measurer: M,
    smoothing: SmoothingMode,
    text_hint: TextRenderingHint,
}

impl SvgSurface<FixedPitchMeasurer> {
    /// A blank surface of `width × height` with default configuration.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_config(width, height, SurfaceConfig::default())
    }

    pub fn with_config(width: f64, height: f64, config: SurfaceConfig) -> Self {
        Self::with_measurer(width, height, config, FixedPitchMeasurer::default())
    }
}

impl<M: TextMeasurer> SvgSurface<M> {
    pub fn with_measurer(width: f64, height: f64, config: SurfaceConfig, measurer: M) -> Self {
        let mut doc = Document::new(width, height);
        let top = doc.top_group;
        doc.node_mut(top)
            .style
            .set("shape-rendering", config.initial_shape_rendering.clone());
        Self {
            doc,
            current: top,
            open_containers: 0,
            transforms: TransformStack::new(),
            styles: StyleTranslator::new(config.fallback_brush_color),
            config,
            measurer,
            smoothing: SmoothingMode::default(),
            text_hint: TextRenderingHint::default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// The group receiving drawing calls.
    pub fn current_group(&self) -> NodeIndex {
        self.current
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Serialize everything drawn so far as SVG text.
    pub fn to_svg(&self, config: &WriteConfig) -> String {
        vsg_svg::write_svg(&self.doc, config)
    }

    pub fn to_element_tree(&self, config: &WriteConfig) -> SvgElement {
        vsg_svg::to_element_tree(&self.doc, config)
    }

    // ─── Node construction ───────────────────────────────────────────────

    fn append(&mut self, kind: NodeKind, style: Style) -> NodeIndex {
        let id = self.doc.next_id(kind.tag(), None);
        let node = SceneNode::new(kind)
            .with_id(id)
            .with_style(style)
            .with_transform(self.transforms.composed());
        self.doc.add_child(self.current, node)
    }

    fn stroke(&mut self, pen: &Pen, kind: NodeKind) {
        let style = self.styles.stroke(pen);
        self.append(kind, style);
    }

    fn fill(&mut self, brush: &Brush, kind: NodeKind, rule: Option<FillMode>) {
        let mut style = self.styles.fill(&mut self.doc, brush);
        if let Some(rule) = rule {
            style.set("fill-rule", rule.as_svg());
        }
        self.append(kind, style);
    }

    /// Anchor decorations for an open stroke. `start` and `end` are the
    /// terminal segments, each given as (endpoint, neighbor).
    fn end_caps(&mut self, pen: &Pen, start: (Point, Point), end: (Point, Point)) {
        let decorated = |cap: LineCap| cap.is_anchor() || cap == LineCap::Custom;
        if !self.config.emit_end_caps || !(decorated(pen.start_cap) || decorated(pen.end_cap)) {
            return;
        }
        let base = self.transforms.composed();
        let caps = self.styles.end_caps(&mut self.doc, pen, start, end, base);
        for cap in caps {
            self.doc.add_child(self.current, cap);
        }
    }

    fn ellipse_kind(bounds: Rect) -> NodeKind {
        NodeKind::Ellipse {
            center: bounds.center(),
            rx: bounds.width() / 2.0,
            ry: bounds.height() / 2.0,
        }
    }

    fn curve_path(&self, points: &[Point], closed: bool, tension: Option<f64>) -> Result<PathData> {
        let tension = tension.unwrap_or(self.config.default_tension);
        let segments = points.len().saturating_sub(1);
        let bez = spline_to_bezier(points, 0, segments, closed, tension)?;
        Ok(PathData::from_beziers(&bez, closed))
    }

    fn draw_bitmap(&mut self, image: &Bitmap, dest: Rect, placement: Placement) {
        let suffix = format!(
            "bitmap_at_{}_{}",
            format_num(dest.x0, Some(3)),
            format_num(dest.y0, Some(3))
        );
        let id = self.doc.next_id("g", Some(&suffix));
        let group = SceneNode::new(NodeKind::Group)
            .with_id(id)
            .with_transform(self.transforms.composed());
        let group = self.doc.add_child(self.current, group);

        let pixels = bitmap::pixel_nodes(image, dest, placement);
        log::trace!("bitmap {}: {} pixel rects", self.doc.id_str(id), pixels.len());
        for px in pixels {
            self.doc.add_child(group, px);
        }
    }

    fn natural_rect(image: &Bitmap, x: f64, y: f64) -> Rect {
        Rect::from_origin_size((x, y), (image.width() as f64, image.height() as f64))
    }
}

impl<M: TextMeasurer> DrawingSurface for SvgSurface<M> {
    // ─── Transform ───────────────────────────────────────────────────────

    fn translate(&mut self, dx: f64, dy: f64, order: MatrixOrder) {
        self.transforms.translate(dx, dy, order);
    }

    fn scale(&mut self, sx: f64, sy: f64, order: MatrixOrder) {
        self.transforms.scale(sx, sy, order);
    }

    fn rotate(&mut self, degrees: f64, order: MatrixOrder) {
        self.transforms.rotate(degrees, order);
    }

    fn multiply(&mut self, m: Affine, order: MatrixOrder) {
        self.transforms.apply(m, order);
    }

    fn reset_transform(&mut self) {
        self.transforms.reset();
    }

    fn transform(&self) -> Affine {
        self.transforms.composed()
    }

    fn set_transform(&mut self, m: Affine) {
        self.transforms.replace_top(m);
    }

    fn transform_points(&self, _points: &mut [Point]) -> Result<()> {
        unsupported("TransformPoints")
    }

    // ─── Containers & state ──────────────────────────────────────────────

    fn begin_container(&mut self) -> ContainerHandle {
        let id = self.doc.next_id("g", Some("BeginContainer"));
        let group = self
            .doc
            .add_child(self.current, SceneNode::new(NodeKind::Group).with_id(id));
        self.current = group;
        self.transforms.push();
        self.open_containers += 1;
        ContainerHandle {
            depth: self.open_containers,
        }
    }

    fn begin_container_mapped(&mut self, _dst: Rect, _src: Rect, _unit: GraphicsUnit) -> Result<ContainerHandle> {
        unsupported("BeginContainer(dst, src, unit)")
    }

    fn end_container(&mut self, handle: ContainerHandle) {
        if self.current == self.doc.top_group {
            log::debug!("end_container at top-level group ignored");
            return;
        }
        if handle.depth != self.open_containers {
            log::debug!(
                "end_container for depth {} closes innermost depth {}",
                handle.depth,
                self.open_containers
            );
        }
        self.current = self.doc.parent(self.current).unwrap_or(self.doc.top_group);
        self.transforms.pop();
        self.open_containers = self.open_containers.saturating_sub(1);
    }

    fn save(&mut self) -> Result<GraphicsState> {
        unsupported("Save")
    }

    fn restore(&mut self, _state: GraphicsState) -> Result<()> {
        unsupported("Restore")
    }

    // ─── Clipping ────────────────────────────────────────────────────────

    fn set_clip(&mut self, rect: Rect) {
        let (clip, id) = self.doc.add_def(SceneNode::new(NodeKind::ClipPath), "SetClip");
        let rect_id = self.doc.next_id("rect", None);
        self.doc.add_child(
            clip,
            SceneNode::new(NodeKind::Rect { rect })
                .with_id(rect_id)
                .with_transform(self.transforms.composed()),
        );
        log::trace!("DEF clip {}", self.doc.id_str(id));
        let url = self.doc.url(id);
        self.doc.node_mut(self.current).style.set("clip-path", url);
    }

    fn reset_clip(&mut self) {
        self.doc.node_mut(self.current).style.remove("clip-path");
    }

    fn set_clip_combined(&mut self, _rect: Rect, _mode: CombineMode) -> Result<()> {
        unsupported("SetClip(Rect, CombineMode)")
    }

    fn set_clip_path(&mut self, _path: &GraphicsPath, _mode: CombineMode) -> Result<()> {
        unsupported("SetClip(GraphicsPath)")
    }

    fn set_clip_region(&mut self, _region: &Region, _mode: CombineMode) -> Result<()> {
        unsupported("SetClip(Region)")
    }

    fn intersect_clip(&mut self, _region: &Region) -> Result<()> {
        unsupported("IntersectClip(Region)")
    }

    fn exclude_clip(&mut self, _region: &Region) -> Result<()> {
        unsupported("ExcludeClip(Region)")
    }

    fn translate_clip(&mut self, _dx: f64, _dy: f64) -> Result<()> {
        unsupported("TranslateClip")
    }

    fn clip_bounds(&self) -> Result<Rect> {
        unsupported("ClipBounds")
    }

    fn visible_clip_bounds(&self) -> Result<Rect> {
        unsupported("VisibleClipBounds")
    }

    fn is_clip_empty(&self) -> Result<bool> {
        unsupported("IsClipEmpty")
    }

    fn is_visible_point(&self, _p: Point) -> Result<bool> {
        unsupported("IsVisible(Point)")
    }

    fn is_visible_rect(&self, _rect: Rect) -> Result<bool> {
        unsupported("IsVisible(Rect)")
    }

    // ─── Rendering properties ────────────────────────────────────────────

    fn smoothing_mode(&self) -> SmoothingMode {
        self.smoothing
    }

    fn set_smoothing_mode(&mut self, mode: SmoothingMode) {
        self.smoothing = mode;
        self.doc
            .node_mut(self.current)
            .style
            .set("shape-rendering", mode.shape_rendering());
    }

    fn text_rendering_hint(&self) -> TextRenderingHint {
        self.text_hint
    }

    fn set_text_rendering_hint(&mut self, hint: TextRenderingHint) {
        self.text_hint = hint;
        self.doc
            .node_mut(self.current)
            .style
            .set("text-rendering", hint.text_rendering());
    }

    fn dpi_x(&self) -> Result<f64> {
        unsupported("DpiX")
    }

    fn dpi_y(&self) -> Result<f64> {
        unsupported("DpiY")
    }

    fn page_unit(&self) -> Result<GraphicsUnit> {
        unsupported("PageUnit")
    }

    fn page_scale(&self) -> Result<f64> {
        unsupported("PageScale")
    }

    fn compositing_mode(&self) -> Result<CompositingMode> {
        unsupported("CompositingMode")
    }

    fn rendering_origin(&self) -> Result<Point> {
        unsupported("RenderingOrigin")
    }

    fn text_contrast(&self) -> Result<u32> {
        unsupported("TextContrast")
    }

    fn pixel_offset_mode(&self) -> Result<PixelOffsetMode> {
        unsupported("PixelOffsetMode")
    }

    fn nearest_color(&self, _color: Color) -> Result<Color> {
        unsupported("GetNearestColor")
    }

    // ─── Lines & curves ──────────────────────────────────────────────────

    fn draw_line(&mut self, pen: &Pen, from: Point, to: Point) -> Result<()> {
        self.stroke(pen, NodeKind::Line { from, to });
        self.end_caps(pen, (from, to), (to, from));
        Ok(())
    }

    fn draw_lines(&mut self, pen: &Pen, points: &[Point]) -> Result<()> {
        require_points(points, 2, "a polyline")?;
        let n = points.len();
        self.stroke(
            pen,
            NodeKind::Polyline {
                points: points.to_vec(),
            },
        );
        self.end_caps(pen, (points[0], points[1]), (points[n - 1], points[n - 2]));
        Ok(())
    }

    fn draw_arc(&mut self, pen: &Pen, bounds: Rect, start_deg: f64, sweep_deg: f64) -> Result<()> {
        let data = arc_to_path(bounds, start_deg, sweep_deg, false);
        self.stroke(pen, NodeKind::Path { data });
        Ok(())
    }

    fn draw_bezier(&mut self, pen: &Pen, p0: Point, c1: Point, c2: Point, p1: Point) -> Result<()> {
        self.draw_beziers(pen, &[p0, c1, c2, p1])
    }

    fn draw_beziers(&mut self, pen: &Pen, points: &[Point]) -> Result<()> {
        require_points(points, 4, "a bezier")?;
        if (points.len() - 1) % 3 != 0 {
            return Err(DrawError::InvalidArgument(format!(
                "bezier point count {} is not 3n + 1",
                points.len()
            )));
        }
        let data = PathData::from_beziers(points, false);
        self.stroke(pen, NodeKind::Path { data });
        Ok(())
    }

    fn draw_curve(&mut self, pen: &Pen, points: &[Point], tension: Option<f64>) -> Result<()> {
        let data = self.curve_path(points, false, tension)?;
        self.stroke(pen, NodeKind::Path { data });
        Ok(())
    }

    fn draw_curve_segments(
        &mut self,
        pen: &Pen,
        points: &[Point],
        offset: usize,
        segments: usize,
        tension: Option<f64>,
    ) -> Result<()> {
        let tension = tension.unwrap_or(self.config.default_tension);
        let bez = spline_to_bezier(points, offset, segments, false, tension)?;
        let data = PathData::from_beziers(&bez, false);
        self.stroke(pen, NodeKind::Path { data });
        Ok(())
    }

    fn draw_closed_curve(&mut self, pen: &Pen, points: &[Point], tension: Option<f64>) -> Result<()> {
        let data = self.curve_path(points, true, tension)?;
        self.stroke(pen, NodeKind::Path { data });
        Ok(())
    }

    // ─── Shapes ──────────────────────────────────────────────────────────

    fn draw_rectangle(&mut self, pen: &Pen, rect: Rect) -> Result<()> {
        self.stroke(pen, NodeKind::Rect { rect });
        Ok(())
    }

    fn draw_rectangles(&mut self, pen: &Pen, rects: &[Rect]) -> Result<()> {
        for rect in rects {
            self.draw_rectangle(pen, *rect)?;
        }
        Ok(())
    }

    fn draw_ellipse(&mut self, pen: &Pen, bounds: Rect) -> Result<()> {
        self.stroke(pen, Self::ellipse_kind(bounds));
        Ok(())
    }

    fn draw_pie(&mut self, pen: &Pen, bounds: Rect, start_deg: f64, sweep_deg: f64) -> Result<()> {
        let data = arc_to_path(bounds, start_deg, sweep_deg, true);
        self.stroke(pen, NodeKind::Path { data });
        Ok(())
    }

    fn draw_polygon(&mut self, pen: &Pen, points: &[Point]) -> Result<()> {
        require_points(points, 2, "a polygon")?;
        self.stroke(
            pen,
            NodeKind::Polygon {
                points: points.to_vec(),
            },
        );
        Ok(())
    }

    fn draw_path(&mut self, pen: &Pen, path: &GraphicsPath) -> Result<()> {
        self.draw_polygon(pen, &path.points)
    }

    fn fill_rectangle(&mut self, brush: &Brush, rect: Rect) -> Result<()> {
        self.fill(brush, NodeKind::Rect { rect }, None);
        Ok(())
    }

    fn fill_rectangles(&mut self, brush: &Brush, rects: &[Rect]) -> Result<()> {
        for rect in rects {
            self.fill_rectangle(brush, *rect)?;
        }
        Ok(())
    }

    fn fill_ellipse(&mut self, brush: &Brush, bounds: Rect) -> Result<()> {
        self.fill(brush, Self::ellipse_kind(bounds), None);
        Ok(())
    }

    fn fill_pie(&mut self, brush: &Brush, bounds: Rect, start_deg: f64, sweep_deg: f64) -> Result<()> {
        let data = arc_to_path(bounds, start_deg, sweep_deg, true);
        self.fill(brush, NodeKind::Path { data }, None);
        Ok(())
    }

    fn fill_polygon(&mut self, brush: &Brush, points: &[Point], mode: FillMode) -> Result<()> {
        require_points(points, 2, "a polygon")?;
        self.fill(
            brush,
            NodeKind::Polygon {
                points: points.to_vec(),
            },
            Some(mode),
        );
        Ok(())
    }

    fn fill_closed_curve(
        &mut self,
        brush: &Brush,
        points: &[Point],
        tension: Option<f64>,
        mode: FillMode,
    ) -> Result<()> {
        let data = self.curve_path(points, true, tension)?;
        self.fill(brush, NodeKind::Path { data }, Some(mode));
        Ok(())
    }

    fn fill_path(&mut self, brush: &Brush, path: &GraphicsPath) -> Result<()> {
        self.fill_polygon(brush, &path.points, path.fill_mode)
    }

    fn fill_region(&mut self, _brush: &Brush, _region: &Region) -> Result<()> {
        unsupported("FillRegion")
    }

    fn clear(&mut self, _color: Color) {
        self.doc.clear_children(self.current);
    }

    // ─── Text ────────────────────────────────────────────────────────────

    fn draw_string(
        &mut self,
        text: &str,
        font: &Font,
        brush: &Brush,
        layout: TextLayout,
        format: StringFormat,
    ) -> Result<()> {
        let rect = layout.rect();
        let mut style = self.styles.fill(&mut self.doc, brush);
        style.merge(&self.styles.font(font));

        let x = match format.alignment {
            StringAlignment::Near => rect.x0,
            StringAlignment::Center => {
                style.set("text-anchor", "middle");
                rect.center().x
            }
            StringAlignment::Far => {
                style.set("text-anchor", "end");
                rect.x1
            }
        };
        style.set("baseline-shift", self.config.baseline_shift.clone());

        if matches!(layout, TextLayout::In(_)) && !format.no_clip {
            let (clip, id) = self
                .doc
                .add_def(SceneNode::new(NodeKind::ClipPath), "text_clipper");
            let rect_id = self.doc.next_id("rect", None);
            self.doc.add_child(
                clip,
                SceneNode::new(NodeKind::Rect { rect }).with_id(rect_id),
            );
            style.set("clip-path", self.doc.url(id));
        }

        self.append(
            NodeKind::Text {
                content: text.to_string(),
                origin: Point::new(x, rect.y0),
            },
            style,
        );
        Ok(())
    }

    fn measure_string(&self, text: &str, font: &Font, max_width: Option<f64>) -> Size {
        self.measurer.measure(text, font, max_width)
    }

    fn measure_character_ranges(&self, _text: &str, _font: &Font, _layout: Rect) -> Result<Vec<Rect>> {
        unsupported("MeasureCharacterRanges")
    }

    // ─── Images ──────────────────────────────────────────────────────────

    fn draw_image(&mut self, image: &Bitmap, at: Point) -> Result<()> {
        let dest = Self::natural_rect(image, at.x, at.y);
        self.draw_bitmap(image, dest, Placement::Truncate);
        Ok(())
    }

    fn draw_image_scaled(&mut self, image: &Bitmap, dest: Rect) -> Result<()> {
        self.draw_bitmap(image, dest, Placement::Stretch);
        Ok(())
    }

    fn draw_image_unscaled(&mut self, image: &Bitmap, dest: Rect) -> Result<()> {
        self.draw_bitmap(image, dest, Placement::Truncate);
        Ok(())
    }

    fn draw_image_points(&mut self, _image: &Bitmap, _dest: &[Point]) -> Result<()> {
        unsupported("DrawImage(Point[])")
    }

    fn draw_image_source_rect(
        &mut self,
        _image: &Bitmap,
        _dest: Rect,
        _src: Rect,
        _unit: GraphicsUnit,
    ) -> Result<()> {
        unsupported("DrawImage(dest, src, unit)")
    }

    fn draw_icon(&mut self, icon: &Icon, x: f64, y: f64) -> Result<()> {
        self.draw_image(&icon.0, Point::new(x, y))
    }

    fn draw_icon_in(&mut self, icon: &Icon, dest: Rect) -> Result<()> {
        self.draw_image_scaled(&icon.0, dest)
    }

    fn draw_icon_unstretched(&mut self, icon: &Icon, dest: Rect) -> Result<()> {
        self.draw_image_unscaled(&icon.0, dest)
    }

    // ─── Misc ────────────────────────────────────────────────────────────

    fn flush(&mut self) {
        log::debug!("flush: nothing buffered");
    }

    fn add_metafile_comment(&mut self, data: &[u8]) {
        log::debug!("metafile comment of {} bytes dropped", data.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pen() -> Pen {
        Pen::new(Color::BLACK, 1.0)
    }

    #[test]
    fn top_group_carries_initial_rendering_hint() {
        let surface = SvgSurface::new(10.0, 10.0);
        let top = surface.document().node(surface.current_group());
        assert_eq!(top.style.get("shape-rendering"), Some("crispEdges"));
    }

    #[test]
    fn nodes_snapshot_transform_at_creation() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        surface.translate(5.0, 5.0, MatrixOrder::Prepend);
        surface.draw_rectangle(&pen(), Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();
        surface.reset_transform();
        surface.draw_rectangle(&pen(), Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();

        let doc = surface.document();
        let kids = doc.children(doc.top_group);
        assert_eq!(doc.node(kids[0]).transform, Some(Affine::translate((5.0, 5.0))));
        assert_eq!(doc.node(kids[1]).transform, None);
    }

    #[test]
    fn end_container_at_top_level_is_noop() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        let top = surface.current_group();
        surface.end_container(ContainerHandle { depth: 0 });
        assert_eq!(surface.current_group(), top);
    }

    #[test]
    fn end_container_closes_innermost() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        let outer = surface.begin_container();
        let inner_parent = surface.current_group();
        let _inner = surface.begin_container();
        // a mismatched handle still closes the innermost scope
        surface.end_container(outer);
        assert_eq!(surface.current_group(), inner_parent);
    }

    #[test]
    fn arrow_cap_follows_line() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        let pen = pen().with_caps(LineCap::Flat, LineCap::ArrowAnchor);
        surface
            .draw_line(&pen, Point::new(0.0, 0.0), Point::new(5.0, 0.0))
            .unwrap();
        let doc = surface.document();
        let kids = doc.children(doc.top_group);
        assert_eq!(kids.len(), 2);
        assert_eq!(doc.node(kids[1]).kind.tag(), "polygon");
    }

    #[test]
    fn end_caps_can_be_disabled() {
        let config = SurfaceConfig {
            emit_end_caps: false,
            ..SurfaceConfig::default()
        };
        let mut surface = SvgSurface::with_config(10.0, 10.0, config);
        let pen = pen().with_caps(LineCap::RoundAnchor, LineCap::ArrowAnchor);
        surface
            .draw_lines(&pen, &[Point::ORIGIN, Point::new(1.0, 1.0), Point::new(2.0, 0.0)])
            .unwrap();
        let doc = surface.document();
        assert_eq!(doc.children(doc.top_group).len(), 1);
    }

    #[test]
    fn invalid_geometry_appends_nothing() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        assert!(surface.draw_lines(&pen(), &[Point::ORIGIN]).is_err());
        assert!(surface.draw_curve(&pen(), &[], None).is_err());
        assert!(surface
            .draw_beziers(&pen(), &[Point::ORIGIN; 5])
            .is_err());
        let doc = surface.document();
        assert!(doc.children(doc.top_group).is_empty());
    }

    #[test]
    fn clear_empties_current_group_only() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        surface.draw_rectangle(&pen(), Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();
        let handle = surface.begin_container();
        surface.draw_rectangle(&pen(), Rect::new(0.0, 0.0, 1.0, 1.0)).unwrap();
        surface.clear(Color::WHITE);
        assert!(surface.document().children(surface.current_group()).is_empty());
        surface.end_container(handle);

        let doc = surface.document();
        assert_eq!(doc.children(doc.top_group).len(), 2);
    }

    #[test]
    fn smoothing_mode_updates_current_group() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        surface.set_smoothing_mode(SmoothingMode::AntiAlias);
        surface.set_text_rendering_hint(TextRenderingHint::ClearTypeGridFit);
        assert_eq!(surface.smoothing_mode(), SmoothingMode::AntiAlias);
        let top = surface.document().node(surface.current_group());
        assert_eq!(top.style.get("shape-rendering"), Some("auto"));
        assert_eq!(top.style.get("text-rendering"), Some("geometricPrecision"));
    }

    #[test]
    fn device_properties_report_unsupported_by_name() {
        let surface = SvgSurface::new(10.0, 10.0);
        let compositing: Result<CompositingMode> = surface.compositing_mode();
        assert_eq!(
            compositing.unwrap_err().unsupported_operation(),
            Some("CompositingMode")
        );
        let offset: Result<PixelOffsetMode> = surface.pixel_offset_mode();
        assert_eq!(offset.unwrap_err().unsupported_operation(), Some("PixelOffsetMode"));
    }
}
