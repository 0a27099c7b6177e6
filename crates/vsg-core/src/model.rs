//! Core scene-graph data model for recorded drawings.
//!
//! The document is a tree where nodes represent SVG elements (shapes, text,
//! groups, definitions) and edges represent parent→child containment. Every
//! node carries its own style and an optional snapshot of the transform that
//! was in effect when it was recorded. Definitions (gradients, patterns, clip
//! paths) live under a single `defs` node and are referenced by ID.

use crate::id::{IdGen, NodeId};
use kurbo::{Affine, Point, Rect, Vec2};
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

// ─── Colors ──────────────────────────────────────────────────────────────

/// 8-bit ARGB color, as used by raster drawing APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// The sixteen basic CSS color keywords, emitted by name.
const CSS_KEYWORDS: [(u8, u8, u8, &str); 16] = [
    (0x00, 0x00, 0x00, "black"),
    (0xC0, 0xC0, 0xC0, "silver"),
    (0x80, 0x80, 0x80, "gray"),
    (0xFF, 0xFF, 0xFF, "white"),
    (0x80, 0x00, 0x00, "maroon"),
    (0xFF, 0x00, 0x00, "red"),
    (0x80, 0x00, 0x80, "purple"),
    (0xFF, 0x00, 0xFF, "fuchsia"),
    (0x00, 0x80, 0x00, "green"),
    (0x00, 0xFF, 0x00, "lime"),
    (0x80, 0x80, 0x00, "olive"),
    (0xFF, 0xFF, 0x00, "yellow"),
    (0x00, 0x00, 0x80, "navy"),
    (0x00, 0x00, 0xFF, "blue"),
    (0x00, 0x80, 0x80, "teal"),
    (0x00, 0xFF, 0xFF, "aqua"),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const LIME: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const SALMON: Color = Color::rgb(250, 128, 114);
    pub const TRANSPARENT: Color = Color::argb(0, 255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Alpha as an SVG opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Parse a hex color string: `#RGB`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 | 8 => {
                let byte = |i: usize| -> Option<u8> {
                    Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?)
                };
                let a = if bytes.len() == 8 { byte(6)? } else { 255 };
                Some(Self::argb(a, byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        }
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when not opaque.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// SVG paint value for the color channels. Alpha is emitted separately
    /// as an opacity attribute.
    pub fn to_svg(&self) -> String {
        CSS_KEYWORDS
            .iter()
            .find(|(r, g, b, _)| (*r, *g, *b) == (self.r, self.g, self.b))
            .map(|(_, _, _, name)| (*name).to_string())
            .unwrap_or_else(|| format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color `{s}`")))
    }
}

// ─── Numbers ─────────────────────────────────────────────────────────────

/// Format a coordinate for SVG output.
///
/// Integral values print without a fractional part; `precision` caps the
/// number of decimal digits, trailing zeros are trimmed. Non-finite values
/// print as `0` since SVG has no representation for them.
pub fn format_num(n: f64, precision: Option<usize>) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    if n == n.trunc() && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    let s = match precision {
        Some(p) => {
            let s = format!("{n:.p$}");
            if s.contains('.') {
                s.trim_end_matches('0').trim_end_matches('.').to_string()
            } else {
                s
            }
        }
        None => format!("{n}"),
    };
    if s == "-0" { "0".to_string() } else { s }
}

// ─── Path data ───────────────────────────────────────────────────────────

/// A single SVG path command in absolute coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point), // c1, c2, end
    ArcTo {
        radii: Vec2,
        x_rotation: f64, // degrees
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// An ordered list of path commands; `Display` renders SVG path-data text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData(pub Vec<PathCmd>);

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: PathCmd) {
        self.0.push(cmd);
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Path from a bezier control sequence: the first point is the start,
    /// every following triple is `c1, c2, end`. Incomplete trailing triples
    /// are dropped.
    pub fn from_beziers(points: &[Point], close: bool) -> Self {
        let mut data = PathData::new();
        let Some(first) = points.first() else {
            return data;
        };
        data.push(PathCmd::MoveTo(*first));
        for seg in points[1..].chunks_exact(3) {
            data.push(PathCmd::CubicTo(seg[0], seg[1], seg[2]));
        }
        if close {
            data.push(PathCmd::Close);
        }
        data
    }

    /// Render as SVG path data with the given decimal precision.
    pub fn to_svg(&self, precision: Option<usize>) -> String {
        let n = |v: f64| format_num(v, precision);
        let mut parts: Vec<String> = Vec::with_capacity(self.0.len());
        for cmd in &self.0 {
            parts.push(match cmd {
                PathCmd::MoveTo(p) => format!("M {},{}", n(p.x), n(p.y)),
                PathCmd::LineTo(p) => format!("L {},{}", n(p.x), n(p.y)),
                PathCmd::CubicTo(c1, c2, p) => format!(
                    "C {} {} {} {} {} {}",
                    n(c1.x),
                    n(c1.y),
                    n(c2.x),
                    n(c2.y),
                    n(p.x),
                    n(p.y)
                ),
                PathCmd::ArcTo {
                    radii,
                    x_rotation,
                    large_arc,
                    sweep,
                    to,
                } => format!(
                    "A {} {} {} {} {} {} {}",
                    n(radii.x),
                    n(radii.y),
                    n(*x_rotation),
                    u8::from(*large_arc),
                    u8::from(*sweep),
                    n(to.x),
                    n(to.y)
                ),
                PathCmd::Close => "Z".to_string(),
            });
        }
        parts.join(" ")
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg(None))
    }
}

// ─── Styling ─────────────────────────────────────────────────────────────

/// Presentation attributes of a node: attribute name → value.
///
/// Later writes to the same key overwrite earlier ones. Iteration follows
/// first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    attrs: SmallVec<[(&'static str, String); 4]>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Builder form of [`Style::set`].
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(k, _)| *k == key)?;
        Some(self.attrs.remove(pos).1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Copy every attribute of `other` into `self`; `other` wins on conflicts.
    pub fn merge(&mut self, other: &Style) {
        for (k, v) in &other.attrs {
            self.set(k, v.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.attrs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl std::ops::AddAssign<&Style> for Style {
    fn add_assign(&mut self, rhs: &Style) {
        self.merge(rhs);
    }
}

// ─── Definitions ─────────────────────────────────────────────────────────

/// Coordinate system of a gradient or pattern definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    UserSpaceOnUse,
    ObjectBoundingBox,
}

impl Units {
    pub fn as_svg(&self) -> &'static str {
        match self {
            Units::UserSpaceOnUse => "userSpaceOnUse",
            Units::ObjectBoundingBox => "objectBoundingBox",
        }
    }
}

/// How a gradient continues outside its vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadMethod {
    Pad,
    Repeat,
    Reflect,
}

impl SpreadMethod {
    pub fn as_svg(&self) -> &'static str {
        match self {
            SpreadMethod::Pad => "pad",
            SpreadMethod::Repeat => "repeat",
            SpreadMethod::Reflect => "reflect",
        }
    }
}

/// A gradient stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64, // 0.0 .. 1.0
    pub color: Color,
}

// ─── Scene Graph Nodes ───────────────────────────────────────────────────

/// The node kinds in the scene tree.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Root of the document (`<svg>`).
    Root { width: f64, height: f64 },

    /// Group / container scope.
    Group,

    /// The definitions section.
    Defs,

    Line { from: Point, to: Point },

    Polyline { points: Vec<Point> },

    Polygon { points: Vec<Point> },

    /// Rectangle. Also used for emulated raster pixels.
    Rect { rect: Rect },

    Ellipse { center: Point, rx: f64, ry: f64 },

    /// Arbitrary path: arcs, pies, beziers, fitted curves.
    Path { data: PathData },

    /// Text anchored at `origin` (baseline position).
    Text { content: String, origin: Point },

    /// Clip-path definition; its children are the clip shapes.
    ClipPath,

    LinearGradient {
        start: Point,
        end: Point,
        spread: SpreadMethod,
        units: Units,
        stops: Vec<GradientStop>,
    },

    /// Tiled pattern definition; its children are the tile contents.
    Pattern {
        tile: Rect,
        units: Units,
        content_units: Units,
    },
}

impl NodeKind {
    /// The SVG element name for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Root { .. } => "svg",
            NodeKind::Group => "g",
            NodeKind::Defs => "defs",
            NodeKind::Line { .. } => "line",
            NodeKind::Polyline { .. } => "polyline",
            NodeKind::Polygon { .. } => "polygon",
            NodeKind::Rect { .. } => "rect",
            NodeKind::Ellipse { .. } => "ellipse",
            NodeKind::Path { .. } => "path",
            NodeKind::Text { .. } => "text",
            NodeKind::ClipPath => "clipPath",
            NodeKind::LinearGradient { .. } => "linearGradient",
            NodeKind::Pattern { .. } => "pattern",
        }
    }

    /// Kinds that may hold child nodes.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeKind::Root { .. }
                | NodeKind::Group
                | NodeKind::Defs
                | NodeKind::ClipPath
                | NodeKind::Pattern { .. }
        )
    }
}

/// A single node in the scene tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Stable identifier. Emulated raster pixels carry none.
    pub id: Option<NodeId>,

    /// What kind of element this is.
    pub kind: NodeKind,

    /// Presentation attributes.
    pub style: Style,

    /// Composed transform captured when the node was recorded.
    /// `None` when that transform was the identity.
    pub transform: Option<Affine>,
}

impl SceneNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: None,
            kind,
            style: Style::default(),
            transform: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Attach `transform` unless it is the identity.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = (transform != Affine::IDENTITY).then_some(transform);
        self
    }
}

// ─── Document ────────────────────────────────────────────────────────────

/// A recorded drawing: `<svg>` root holding one top-level group (the drawing
/// surface) followed by the definitions section.
///
/// Edges go from parent → child; the edge weight is an insertion ordinal so
/// child order is stable even after slots are reused by `clear_children`.
#[derive(Debug, Clone)]
pub struct Document {
    /// The underlying directed graph.
    pub graph: StableDiGraph<SceneNode, u32>,

    /// The `<svg>` root.
    pub root: NodeIndex,

    /// The top-level group that receives drawing calls.
    pub top_group: NodeIndex,

    /// The definitions section.
    pub defs: NodeIndex,

    /// Index from NodeId → NodeIndex for fast lookup.
    id_index: HashMap<NodeId, NodeIndex>,

    ids: IdGen,
    next_ordinal: u32,
}

impl Document {
    /// Create an empty document with a canvas of `width × height`.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let mut doc = Self {
            graph: StableDiGraph::new(),
            root: NodeIndex::end(),
            top_group: NodeIndex::end(),
            defs: NodeIndex::end(),
            id_index: HashMap::new(),
            ids: IdGen::new(),
            next_ordinal: 0,
        };
        doc.root = doc.graph.add_node(SceneNode::new(NodeKind::Root { width, height }));

        let top_id = doc.next_id("g", None);
        doc.top_group = doc.add_child(doc.root, SceneNode::new(NodeKind::Group).with_id(top_id));

        doc.defs = doc.add_child(doc.root, SceneNode::new(NodeKind::Defs));
        doc
    }

    /// Canvas size as declared at construction.
    pub fn size(&self) -> (f64, f64) {
        match self.graph[self.root].kind {
            NodeKind::Root { width, height } => (width, height),
            _ => (0.0, 0.0),
        }
    }

    /// Allocate a document-unique ID.
    pub fn next_id(&mut self, kind: &str, suffix: Option<&str>) -> NodeId {
        self.ids.next(kind, suffix)
    }

    /// Text of an ID allocated by this document.
    pub fn id_str(&self, id: NodeId) -> &str {
        self.ids.resolve(id)
    }

    /// The `url(#id)` form used by `clip-path`, `fill` and `stroke` references.
    pub fn url(&self, id: NodeId) -> String {
        format!("url(#{})", self.id_str(id))
    }

    /// Find an allocated ID by its text.
    pub fn find_id(&self, name: &str) -> Option<NodeId> {
        self.ids.lookup(name)
    }

    /// Number of IDs this document has allocated.
    pub fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Add a node as the last child of `parent`. Returns the new node's index.
    pub fn add_child(&mut self, parent: NodeIndex, node: SceneNode) -> NodeIndex {
        let id = node.id;
        log::trace!("ADD <{}> {:?} under {:?}", node.kind.tag(), id, parent);
        let idx = self.graph.add_node(node);
        self.graph.add_edge(parent, idx, self.next_ordinal);
        self.next_ordinal += 1;
        if let Some(id) = id {
            self.id_index.insert(id, idx);
        }
        idx
    }

    /// Register a definition, allocating an ID of the form
    /// `<tag><n>_<suffix>` if it has none. Returns the index and ID.
    pub fn add_def(&mut self, mut node: SceneNode, suffix: &str) -> (NodeIndex, NodeId) {
        let id = match node.id {
            Some(id) => id,
            None => {
                let id = self.next_id(node.kind.tag(), Some(suffix));
                node.id = Some(id);
                id
            }
        };
        let defs = self.defs;
        (self.add_child(defs, node), id)
    }

    /// Children of a node in insertion order.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<(u32, NodeIndex)> = self
            .graph
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .map(|e| (*e.weight(), e.target()))
            .collect();
        edges.sort_by_key(|(ordinal, _)| *ordinal);
        edges.into_iter().map(|(_, child)| child).collect()
    }

    /// Get the parent index of a node.
    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .next()
    }

    pub fn node(&self, idx: NodeIndex) -> &SceneNode {
        &self.graph[idx]
    }

    pub fn node_mut(&mut self, idx: NodeIndex) -> &mut SceneNode {
        &mut self.graph[idx]
    }

    /// Look up a node by its ID.
    pub fn get_by_id(&self, id: NodeId) -> Option<&SceneNode> {
        self.id_index.get(&id).map(|idx| &self.graph[*idx])
    }

    /// Get the index for a NodeId.
    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.id_index.get(&id).copied()
    }

    /// Remove every descendant of `idx`, keeping `idx` itself.
    pub fn clear_children(&mut self, idx: NodeIndex) {
        for child in self.children(idx) {
            self.clear_children(child);
            if let Some(id) = self.graph.remove_node(child).and_then(|n| n.id) {
                self.id_index.remove(&id);
            }
        }
    }

    /// Check if `ancestor` is a parent/grandparent/etc. of `descendant`.
    pub fn is_ancestor_of(&self, ancestor: NodeIndex, descendant: NodeIndex) -> bool {
        let mut current = descendant;
        while let Some(parent) = self.parent(current) {
            if parent == ancestor {
                return true;
            }
            current = parent;
        }
        false
    }

    /// Total number of nodes, including root, top group and defs.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of registered definitions.
    pub fn def_count(&self) -> usize {
        self.children(self.defs).len()
    }
}
