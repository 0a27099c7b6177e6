//! Raster images, emulated as one filled rect per visible pixel.
//!
//! Output size grows with pixel count. Fully transparent pixels are skipped.

use kurbo::{Point, Rect};
use vsg_core::{Color, DrawError, NodeKind, Result, SceneNode, Style, format_num};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>, // row-major
}

impl Bitmap {
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        if pixels.len() != width as usize * height as usize {
            return Err(DrawError::InvalidArgument(format!(
                "{} pixels for a {width}x{height} bitmap",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from packed `RGBA` bytes, row-major.
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        if data.len() % 4 != 0 {
            return Err(DrawError::InvalidArgument(format!(
                "RGBA buffer length {} is not a multiple of 4",
                data.len()
            )));
        }
        let pixels = data
            .chunks_exact(4)
            .map(|px| Color::argb(px[3], px[0], px[1], px[2]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// An icon is drawn exactly like a bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon(pub Bitmap);

/// How a bitmap is mapped onto its destination rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Stretch every pixel to fill the destination.
    Stretch,
    /// Unit pixels, cut off at the destination's width and height.
    Truncate,
}

/// Pixel rects for `bitmap` drawn into `dest`, in row-major order.
pub fn pixel_nodes(bitmap: &Bitmap, dest: Rect, placement: Placement) -> Vec<SceneNode> {
    let (sx, sy) = match placement {
        Placement::Stretch if bitmap.width > 0 && bitmap.height > 0 => (
            dest.width() / bitmap.width as f64,
            dest.height() / bitmap.height as f64,
        ),
        _ => (1.0, 1.0),
    };

    let mut nodes = Vec::new();
    for row in 0..bitmap.height {
        for col in 0..bitmap.width {
            if placement == Placement::Truncate
                && (col as f64 >= dest.width() || row as f64 >= dest.height())
            {
                continue;
            }
            let Some(color) = bitmap.pixel(col, row) else {
                continue;
            };
            if color.a == 0 {
                continue;
            }
            let origin = Point::new(dest.x0 + col as f64 * sx, dest.y0 + row as f64 * sy);
            let mut style = Style::new().with(
                "fill",
                format!("rgb({},{},{})", color.r, color.g, color.b),
            );
            if !color.is_opaque() {
                style.set("opacity", format_num(color.opacity(), Some(3)));
            }
            nodes.push(
                SceneNode::new(NodeKind::Rect {
                    rect: Rect::from_origin_size(origin, (sx, sy)),
                })
                .with_style(style),
            );
        }
    }
    nodes
}
