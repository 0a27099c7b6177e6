//! Structured element tree: the finished document as generic SVG elements.
//!
//! Every scene node maps to exactly one element, except gradient stops,
//! which are synthesized from the gradient payload.

use crate::config::{StyleMode, WriteConfig};
use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};
use vsg_core::{Document, NodeIndex, NodeKind, SceneNode, format_num};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SvgElement {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SvgElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl SvgElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// First direct child with element name `name`.
    pub fn child(&self, name: &str) -> Option<&SvgElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Depth-first search for the element with the given `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&SvgElement> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// Number of elements in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(SvgElement::count).sum::<usize>()
    }
}

// ─── Document → tree ─────────────────────────────────────────────────────

/// Build the element tree for a finished document: the `<svg>` root holding
/// the top-level group and the `defs` section.
pub fn to_element_tree(doc: &Document, config: &WriteConfig) -> SvgElement {
    element_for(doc, doc.root, config)
}

fn element_for(doc: &Document, idx: NodeIndex, config: &WriteConfig) -> SvgElement {
    let node = doc.node(idx);
    let mut el = SvgElement::new(node.kind.tag());
    let n = |v: f64| format_num(v, config.precision);

    if let Some(id) = node.id {
        el.set("id", doc.id_str(id));
    }

    match &node.kind {
        NodeKind::Root { width, height } => {
            el.set("xmlns", SVG_NAMESPACE);
            el.set("width", n(*width));
            el.set("height", n(*height));
        }
        NodeKind::Group | NodeKind::Defs | NodeKind::ClipPath => {}
        NodeKind::Line { from, to } => {
            el.set("x1", n(from.x));
            el.set("y1", n(from.y));
            el.set("x2", n(to.x));
            el.set("y2", n(to.y));
        }
        NodeKind::Polyline { points } | NodeKind::Polygon { points } => {
            el.set("points", points_attr(points, config.precision));
        }
        NodeKind::Rect { rect } => {
            let rect = rect.abs();
            el.set("x", n(rect.x0));
            el.set("y", n(rect.y0));
            el.set("width", n(rect.width()));
            el.set("height", n(rect.height()));
        }
        NodeKind::Ellipse { center, rx, ry } => {
            el.set("cx", n(center.x));
            el.set("cy", n(center.y));
            el.set("rx", n(*rx));
            el.set("ry", n(*ry));
        }
        NodeKind::Path { data } => {
            el.set("d", data.to_svg(config.precision));
        }
        NodeKind::Text { content, origin } => {
            el.set("x", n(origin.x));
            el.set("y", n(origin.y));
            el.text = Some(content.clone());
        }
        NodeKind::LinearGradient {
            start,
            end,
            spread,
            units,
            stops,
        } => {
            el.set("x1", n(start.x));
            el.set("y1", n(start.y));
            el.set("x2", n(end.x));
            el.set("y2", n(end.y));
            el.set("spreadMethod", spread.as_svg());
            el.set("gradientUnits", units.as_svg());
            for stop in stops {
                let mut stop_el = SvgElement::new("stop");
                stop_el.set("offset", n(stop.offset));
                stop_el.set("stop-color", stop.color.to_svg());
                if !stop.color.is_opaque() {
                    stop_el.set("stop-opacity", n(stop.color.opacity()));
                }
                el.children.push(stop_el);
            }
        }
        NodeKind::Pattern {
            tile,
            units,
            content_units,
        } => {
            el.set("x", n(tile.x0));
            el.set("y", n(tile.y0));
            el.set("width", n(tile.width()));
            el.set("height", n(tile.height()));
            el.set("patternUnits", units.as_svg());
            el.set("patternContentUnits", content_units.as_svg());
        }
    }

    if let Some(transform) = node.transform {
        el.set("transform", transform_attr(transform, config.precision));
    }
    write_style(&mut el, node, config.style_mode);

    for child in doc.children(idx) {
        el.children.push(element_for(doc, child, config));
    }
    el
}

fn write_style(el: &mut SvgElement, node: &SceneNode, mode: StyleMode) {
    if node.style.is_empty() {
        return;
    }
    match mode {
        StyleMode::Attributes => {
            for (k, v) in node.style.iter() {
                el.set(k, v);
            }
        }
        StyleMode::Inline => {
            let css: Vec<String> = node.style.iter().map(|(k, v)| format!("{k}:{v}")).collect();
            el.set("style", css.join(";"));
        }
    }
}

/// `points` attribute text: `x,y x,y …`.
pub fn points_attr(points: &[Point], precision: Option<usize>) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", format_num(p.x, precision), format_num(p.y, precision)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `transform` attribute text in `matrix(a,b,c,d,e,f)` form.
pub fn transform_attr(m: Affine, precision: Option<usize>) -> String {
    let c = m.as_coeffs().map(|v| format_num(v, precision));
    format!("matrix({})", c.join(","))
}
