//! Translation of pens, brushes and fonts into presentation attributes.
//!
//! Solid paints become plain attributes. Gradients and hatches register a
//! definition in the document's `defs` and return a `url(#id)` reference.
//! Anchor caps become small decoration shapes placed at line endpoints.

use crate::geometry::cap_angle;
use crate::hatch::{self, HatchPrimitive};
use crate::model::{
    Color, Document, GradientStop, NodeKind, SceneNode, SpreadMethod, Style, Units, format_num,
};
use crate::paint::{
    Brush, Font, HatchBrush, LineCap, LineJoin, LinearGradientBrush, LinearGradientMode, Pen,
    WrapMode,
};
use kurbo::{Affine, Point, Rect, Vec2};
use smallvec::SmallVec;

/// Precision used for numbers written into style values.
const STYLE_PRECISION: Option<usize> = Some(3);

fn num(v: f64) -> String {
    format_num(v, STYLE_PRECISION)
}

/// Set `key` to the color and `opacity_key` to its alpha when translucent.
fn set_color(style: &mut Style, key: &'static str, opacity_key: &'static str, color: Color) {
    style.set(key, color.to_svg());
    if !color.is_opaque() {
        style.set(opacity_key, num(color.opacity()));
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleTranslator {
    /// Paint used for brushes with no vector rendition.
    pub fallback: Color,
}

impl Default for StyleTranslator {
    fn default() -> Self {
        Self {
            fallback: Color::SALMON,
        }
    }
}

impl StyleTranslator {
    pub fn new(fallback: Color) -> Self {
        Self { fallback }
    }

    /// Stroke attributes for `pen`. The interior is never filled.
    pub fn stroke(&self, pen: &Pen) -> Style {
        let mut style = Style::new();
        set_color(&mut style, "stroke", "stroke-opacity", pen.color);
        style.set("stroke-width", num(pen.width));
        style.set("fill", "none");

        let dashes = pen.dash.pattern();
        if !dashes.is_empty() {
            let scaled: Vec<String> = dashes.iter().map(|d| num(d * pen.width)).collect();
            style.set("stroke-dasharray", scaled.join(","));
        }

        match pen.join {
            LineJoin::Miter | LineJoin::MiterClipped => {}
            LineJoin::Bevel => style.set("stroke-linejoin", "bevel"),
            LineJoin::Round => style.set("stroke-linejoin", "round"),
        }

        match pen.start_cap {
            LineCap::Square => style.set("stroke-linecap", "square"),
            LineCap::Round => style.set("stroke-linecap", "round"),
            _ => {}
        }
        style
    }

    /// Fill attributes for `brush`, registering any paint server in `doc`.
    pub fn fill(&self, doc: &mut Document, brush: &Brush) -> Style {
        match brush {
            Brush::Solid(color) => {
                let mut style = Style::new();
                set_color(&mut style, "fill", "fill-opacity", *color);
                style
            }
            Brush::LinearGradient(grad) => self.linear_gradient(doc, grad),
            Brush::Hatch(hatch) => self.hatch(doc, hatch),
            Brush::PathGradient { .. } | Brush::Texture { .. } => {
                log::warn!(
                    "brush {brush:?} has no vector rendition, painting with {}",
                    self.fallback.to_svg()
                );
                let mut style = Style::new();
                set_color(&mut style, "fill", "fill-opacity", self.fallback);
                style
            }
        }
    }

    fn linear_gradient(&self, doc: &mut Document, grad: &LinearGradientBrush) -> Style {
        let (spread, units) = match grad.wrap {
            WrapMode::Clamp => (SpreadMethod::Pad, Units::ObjectBoundingBox),
            WrapMode::Tile => (SpreadMethod::Repeat, Units::UserSpaceOnUse),
            _ => (SpreadMethod::Reflect, Units::UserSpaceOnUse),
        };

        // bounding-box units address the rectangle in fractions
        let area = match units {
            Units::ObjectBoundingBox => Rect::new(0.0, 0.0, 1.0, 1.0),
            Units::UserSpaceOnUse => grad.rect,
        };
        let (start, end) = match grad.mode {
            LinearGradientMode::Horizontal => (
                Point::new(area.x0, area.y0),
                Point::new(area.x1, area.y0),
            ),
            LinearGradientMode::Vertical => (
                Point::new(area.x0, area.y0),
                Point::new(area.x0, area.y1),
            ),
            LinearGradientMode::ForwardDiagonal => (
                Point::new(area.x0, area.y0),
                Point::new(area.x1, area.y1),
            ),
            LinearGradientMode::BackwardDiagonal => (
                Point::new(area.x1, area.y0),
                Point::new(area.x0, area.y1),
            ),
        };

        let stops = match &grad.interpolation {
            Some(blend) => blend
                .iter()
                .map(|(offset, color)| GradientStop {
                    offset: *offset,
                    color: *color,
                })
                .collect(),
            None => vec![
                GradientStop {
                    offset: 0.0,
                    color: grad.start_color,
                },
                GradientStop {
                    offset: 1.0,
                    color: grad.end_color,
                },
            ],
        };

        let node = SceneNode::new(NodeKind::LinearGradient {
            start,
            end,
            spread,
            units,
            stops,
        });
        let (_, id) = doc.add_def(node, "LinearGradientBrush");
        log::trace!("DEF linear gradient {}", doc.id_str(id));
        Style::new().with("fill", doc.url(id))
    }

    fn hatch(&self, doc: &mut Document, brush: &HatchBrush) -> Style {
        let tile = Rect::new(0.0, 0.0, hatch::TILE, hatch::TILE);
        let pattern = SceneNode::new(NodeKind::Pattern {
            tile,
            units: Units::UserSpaceOnUse,
            content_units: Units::UserSpaceOnUse,
        })
        .with_style(
            Style::new()
                .with("shape-rendering", "crispEdges")
                .with("stroke-linecap", "butt"),
        );
        let (pattern_idx, id) = doc.add_def(pattern, "HatchBrush");

        let mut background = Style::new();
        set_color(&mut background, "fill", "fill-opacity", brush.background);
        let bg_id = doc.next_id("rect", None);
        doc.add_child(
            pattern_idx,
            SceneNode::new(NodeKind::Rect { rect: tile })
                .with_id(bg_id)
                .with_style(background),
        );

        let mut foreground = Style::new();
        set_color(&mut foreground, "stroke", "stroke-opacity", brush.foreground);
        set_color(&mut foreground, "fill", "fill-opacity", brush.foreground);
        for prim in hatch::hatch_primitives(brush.style) {
            let kind = match prim {
                HatchPrimitive::Line(from, to) => NodeKind::Line { from, to },
                HatchPrimitive::Rect(rect) => NodeKind::Rect { rect },
                HatchPrimitive::Polygon(points) => NodeKind::Polygon { points },
                HatchPrimitive::Ellipse { center, rx, ry } => NodeKind::Ellipse { center, rx, ry },
            };
            let prim_id = doc.next_id(kind.tag(), None);
            doc.add_child(
                pattern_idx,
                SceneNode::new(kind)
                    .with_id(prim_id)
                    .with_style(foreground.clone()),
            );
        }
        log::trace!("DEF hatch pattern {} ({:?})", doc.id_str(id), brush.style);
        Style::new().with("fill", doc.url(id))
    }

    /// Font attributes. Sizes are emitted in pixels.
    pub fn font(&self, font: &Font) -> Style {
        let mut style = Style::new()
            .with("font-family", font.family.clone())
            .with("font-size", format!("{}px", num(font.size)));
        if font.bold {
            style.set("font-weight", "bold");
        }
        if font.italic {
            style.set("font-style", "italic");
        }
        let decoration = match (font.underline, font.strikeout) {
            (true, true) => Some("underline line-through"),
            (true, false) => Some("underline"),
            (false, true) => Some("line-through"),
            (false, false) => None,
        };
        if let Some(decoration) = decoration {
            style.set("text-decoration", decoration);
        }
        style
    }

    /// Decoration shapes for the anchor caps of `pen` on a stroke that
    /// starts at `start` (next point `start_next`) and ends at `end`
    /// (previous point `end_prev`). `base` is the composed transform of the
    /// stroke itself.
    pub fn end_caps(
        &self,
        doc: &mut Document,
        pen: &Pen,
        (start, start_next): (Point, Point),
        (end, end_prev): (Point, Point),
        base: Affine,
    ) -> SmallVec<[SceneNode; 2]> {
        let mut caps = SmallVec::new();
        let ends = [
            (pen.start_cap, start, cap_angle(start, start_next)),
            (pen.end_cap, end, cap_angle(end, end_prev)),
        ];
        for (cap, at, angle) in ends {
            if let Some(node) = self.anchor(doc, cap, pen, at, angle, base) {
                caps.push(node);
            }
        }
        caps
    }

    fn anchor(
        &self,
        doc: &mut Document,
        cap: LineCap,
        pen: &Pen,
        at: Point,
        angle: f64,
        base: Affine,
    ) -> Option<SceneNode> {
        let w = pen.width;
        let kind = match cap {
            LineCap::ArrowAnchor => NodeKind::Polygon {
                points: vec![
                    Point::new(0.0, -w / 2.0),
                    Point::new(-w, w),
                    Point::new(w, w),
                ],
            },
            LineCap::DiamondAnchor => NodeKind::Polygon {
                points: vec![
                    Point::new(0.0, -w),
                    Point::new(w, 0.0),
                    Point::new(0.0, w),
                    Point::new(-w, 0.0),
                ],
            },
            LineCap::RoundAnchor => NodeKind::Ellipse {
                center: Point::ORIGIN,
                rx: w,
                ry: w,
            },
            LineCap::SquareAnchor => {
                let ww = w / 3.0 * 2.0;
                NodeKind::Rect {
                    rect: Rect::from_origin_size((-ww, -ww), (ww * 2.0, ww * 2.0)),
                }
            }
            LineCap::Custom => {
                log::warn!("custom line caps are not drawn");
                return None;
            }
            _ => return None,
        };

        let mut style = Style::new();
        set_color(&mut style, "fill", "fill-opacity", pen.color);
        style.set("stroke", "none");

        let id = doc.next_id(kind.tag(), Some("line_anchor"));
        let transform = base * Affine::translate(Vec2::new(at.x, at.y)) * Affine::rotate(angle);
        Some(
            SceneNode::new(kind)
                .with_id(id)
                .with_style(style)
                .with_transform(transform),
        )
    }
}
