//! Stroke and fill descriptors, as handed in by drawing callers.

use crate::hatch::HatchStyle;
use crate::model::Color;
use kurbo::Rect;

// ─── Pens ────────────────────────────────────────────────────────────────

/// Cap applied to a stroke endpoint. The `*Anchor` variants are drawn as
/// separate decoration shapes; the rest map to `stroke-linecap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Flat,
    Square,
    Round,
    Triangle,
    NoAnchor,
    SquareAnchor,
    RoundAnchor,
    DiamondAnchor,
    ArrowAnchor,
    Custom,
}

impl LineCap {
    pub fn is_anchor(&self) -> bool {
        matches!(
            self,
            LineCap::SquareAnchor | LineCap::RoundAnchor | LineCap::DiamondAnchor | LineCap::ArrowAnchor
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Bevel,
    Round,
    MiterClipped,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
    /// Dash and gap lengths in multiples of the pen width.
    Custom(Vec<f64>),
}

impl DashStyle {
    /// Dash pattern in multiples of the pen width; empty for solid lines.
    pub fn pattern(&self) -> Vec<f64> {
        match self {
            DashStyle::Solid => Vec::new(),
            DashStyle::Dash => vec![3.0, 1.0],
            DashStyle::Dot => vec![1.0, 1.0],
            DashStyle::DashDot => vec![3.0, 1.0, 1.0, 1.0],
            DashStyle::DashDotDot => vec![3.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            DashStyle::Custom(pattern) => pattern.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
    pub start_cap: LineCap,
    pub end_cap: LineCap,
    pub dash: DashStyle,
    pub join: LineJoin,
}

impl Pen {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            start_cap: LineCap::default(),
            end_cap: LineCap::default(),
            dash: DashStyle::default(),
            join: LineJoin::default(),
        }
    }

    #[must_use]
    pub fn with_caps(mut self, start: LineCap, end: LineCap) -> Self {
        self.start_cap = start;
        self.end_cap = end;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: DashStyle) -> Self {
        self.dash = dash;
        self
    }

    #[must_use]
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }
}

// ─── Brushes ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    #[default]
    Tile,
    TileFlipX,
    TileFlipY,
    TileFlipXY,
    Clamp,
}

/// Direction of a linear gradient across its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinearGradientMode {
    #[default]
    Horizontal,
    Vertical,
    ForwardDiagonal,
    BackwardDiagonal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradientBrush {
    pub rect: Rect,
    pub start_color: Color,
    pub end_color: Color,
    /// Explicit `(position, color)` stops; overrides the two end colors.
    pub interpolation: Option<Vec<(f64, Color)>>,
    pub wrap: WrapMode,
    pub mode: LinearGradientMode,
}

impl LinearGradientBrush {
    pub fn new(rect: Rect, start_color: Color, end_color: Color, mode: LinearGradientMode) -> Self {
        Self {
            rect,
            start_color,
            end_color,
            interpolation: None,
            wrap: WrapMode::default(),
            mode,
        }
    }

    #[must_use]
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    #[must_use]
    pub fn with_interpolation(mut self, stops: Vec<(f64, Color)>) -> Self {
        self.interpolation = Some(stops);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HatchBrush {
    pub style: HatchStyle,
    pub foreground: Color,
    pub background: Color,
}

/// Fill descriptor. Path gradients and textures have no vector rendition
/// here and are painted with the fallback color.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    Solid(Color),
    LinearGradient(LinearGradientBrush),
    Hatch(HatchBrush),
    PathGradient { center: Color, surround: Color },
    Texture { width: u32, height: u32 },
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

/// Winding rule for filled polygons and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    #[default]
    Alternate,
    Winding,
}

impl FillMode {
    pub fn as_svg(&self) -> &'static str {
        match self {
            FillMode::Alternate => "evenodd",
            FillMode::Winding => "nonzero",
        }
    }
}

// ─── Fonts ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    /// Em size in pixels.
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
            underline: false,
            strikeout: false,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub fn strikeout(mut self) -> Self {
        self.strikeout = true;
        self
    }
}
