//! Rendering-quality hints and their SVG rendering properties.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmoothingMode {
    #[default]
    Default,
    None,
    HighSpeed,
    AntiAlias,
    HighQuality,
}

impl SmoothingMode {
    /// Value for `shape-rendering`.
    pub fn shape_rendering(&self) -> &'static str {
        match self {
            SmoothingMode::None | SmoothingMode::Default => "crispEdges",
            SmoothingMode::HighSpeed => "optimizeSpeed",
            SmoothingMode::AntiAlias => "auto",
            SmoothingMode::HighQuality => "geometricPrecision",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextRenderingHint {
    #[default]
    SystemDefault,
    SingleBitPerPixelGridFit,
    SingleBitPerPixel,
    AntiAliasGridFit,
    AntiAlias,
    ClearTypeGridFit,
}

impl TextRenderingHint {
    /// Value for `text-rendering`.
    pub fn text_rendering(&self) -> &'static str {
        match self {
            TextRenderingHint::AntiAlias | TextRenderingHint::AntiAliasGridFit => "auto",
            TextRenderingHint::ClearTypeGridFit => "geometricPrecision",
            _ => "crispEdges",
        }
    }
}

/// How drawn pixels combine with the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositingMode {
    #[default]
    SourceOver,
    SourceCopy,
}

/// Half-pixel offset applied before rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelOffsetMode {
    #[default]
    Default,
    HighSpeed,
    HighQuality,
    None,
    Half,
}
