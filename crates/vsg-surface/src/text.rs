//! Text placement and measurement.

use kurbo::{Point, Rect, Size};
use vsg_core::Font;

/// Horizontal alignment of text within its layout box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringAlignment {
    #[default]
    Near,
    Center,
    Far,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringFormat {
    pub alignment: StringAlignment,
    /// Let text overflow its layout rectangle.
    pub no_clip: bool,
}

impl StringFormat {
    pub fn aligned(alignment: StringAlignment) -> Self {
        Self {
            alignment,
            no_clip: false,
        }
    }

    #[must_use]
    pub fn without_clip(mut self) -> Self {
        self.no_clip = true;
        self
    }
}

/// Where text is placed: at a point (never clipped) or inside a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextLayout {
    At(Point),
    In(Rect),
}

impl TextLayout {
    pub fn rect(&self) -> Rect {
        match self {
            TextLayout::At(p) => Rect::from_origin_size(*p, (0.0, 0.0)),
            TextLayout::In(r) => *r,
        }
    }
}

impl From<Point> for TextLayout {
    fn from(p: Point) -> Self {
        TextLayout::At(p)
    }
}

impl From<Rect> for TextLayout {
    fn from(r: Rect) -> Self {
        TextLayout::In(r)
    }
}

/// Measures text extents for layout queries that vector output cannot
/// answer by itself.
pub trait TextMeasurer {
    /// Size of `text` set in `font`, wrapped at `max_width` when given.
    fn measure(&self, text: &str, font: &Font, max_width: Option<f64>) -> Size;
}

/// Estimates extents from a fixed average advance per character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPitchMeasurer {
    /// Average advance per character, in ems.
    pub advance_em: f64,
    /// Line height, in ems.
    pub line_height_em: f64,
}

impl Default for FixedPitchMeasurer {
    fn default() -> Self {
        Self {
            advance_em: 0.6,
            line_height_em: 1.2,
        }
    }
}

impl TextMeasurer for FixedPitchMeasurer {
    fn measure(&self, text: &str, font: &Font, max_width: Option<f64>) -> Size {
        let advance = self.advance_em * font.size;
        let per_line = max_width
            .filter(|w| *w > 0.0 && advance > 0.0)
            .map(|w| ((w / advance).floor() as usize).max(1));

        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.split('\n') {
            let chars = line.chars().count();
            match per_line {
                Some(n) if chars > n => {
                    lines += chars.div_ceil(n);
                    widest = widest.max(n);
                }
                _ => {
                    lines += 1;
                    widest = widest.max(chars);
                }
            }
        }
        Size::new(
            widest as f64 * advance,
            lines as f64 * self.line_height_em * font.size,
        )
    }
}
