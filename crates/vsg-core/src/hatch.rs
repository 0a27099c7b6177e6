//! Hatch patterns as 8×8 vector tiles.

use kurbo::{Point, Rect};
use smallvec::{SmallVec, smallvec};

/// Size of one hatch tile in user units.
pub const TILE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HatchStyle {
    Horizontal,
    Vertical,
    ForwardDiagonal,
    BackwardDiagonal,
    Cross,
    DiagonalCross,
    Percent05,
    Percent10,
    Percent20,
    Percent25,
    Percent30,
    Percent40,
    Percent50,
    Percent60,
    Percent70,
    Percent75,
    Percent80,
    Percent90,
    LightDownwardDiagonal,
    LightUpwardDiagonal,
    DarkDownwardDiagonal,
    DarkUpwardDiagonal,
    WideDownwardDiagonal,
    WideUpwardDiagonal,
    LightVertical,
    LightHorizontal,
    NarrowVertical,
    NarrowHorizontal,
    DarkVertical,
    DarkHorizontal,
    DashedDownwardDiagonal,
    DashedUpwardDiagonal,
    DashedHorizontal,
    DashedVertical,
    SmallConfetti,
    LargeConfetti,
    ZigZag,
    Wave,
    DiagonalBrick,
    HorizontalBrick,
    Weave,
    Plaid,
    Divot,
    DottedGrid,
    DottedDiamond,
    Shingle,
    Trellis,
    Sphere,
    SmallGrid,
    SmallCheckerBoard,
    LargeCheckerBoard,
    OutlinedDiamond,
    SolidDiamond,
}

/// One foreground shape of a hatch tile.
#[derive(Debug, Clone, PartialEq)]
pub enum HatchPrimitive {
    Line(Point, Point),
    Rect(Rect),
    Polygon(Vec<Point>),
    Ellipse { center: Point, rx: f64, ry: f64 },
}

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> HatchPrimitive {
    HatchPrimitive::Line(Point::new(x0, y0), Point::new(x1, y1))
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> HatchPrimitive {
    HatchPrimitive::Rect(Rect::from_origin_size((x, y), (w, h)))
}

/// Foreground shapes for `style`, in paint order. Drawn over a background
/// rect covering the whole tile.
pub fn hatch_primitives(style: HatchStyle) -> SmallVec<[HatchPrimitive; 4]> {
    use HatchStyle::*;
    match style {
        Cross | DottedGrid => smallvec![line(4., 0., 4., 8.), line(0., 4., 8., 4.)],
        BackwardDiagonal => smallvec![line(8., 0., 0., 8.)],
        LightDownwardDiagonal | DarkDownwardDiagonal => smallvec![
            line(4., 0., 8., 4.),
            line(0., 4., 4., 8.),
            line(0., 0., 8., 8.),
        ],
        LightHorizontal | DarkHorizontal => smallvec![line(0., 2., 8., 2.), line(0., 6., 8., 6.)],
        LightUpwardDiagonal | DarkUpwardDiagonal => smallvec![
            line(0., 4., 4., 0.),
            line(4., 8., 8., 4.),
            line(0., 8., 8., 0.),
        ],
        LightVertical | DarkVertical => smallvec![line(2., 0., 2., 8.), line(6., 0., 6., 8.)],
        DashedDownwardDiagonal => smallvec![line(0., 0., 4., 4.), line(4., 0., 8., 4.)],
        DashedHorizontal => smallvec![line(0., 2., 4., 2.), line(4., 6., 8., 6.)],
        DashedUpwardDiagonal => smallvec![line(4., 0., 0., 4.), line(8., 0., 4., 4.)],
        DashedVertical => smallvec![line(2., 0., 2., 4.), line(6., 4., 6., 8.)],
        DiagonalBrick => smallvec![line(0., 8., 8., 0.), line(0., 0., 4., 4.)],
        DiagonalCross | OutlinedDiamond => {
            smallvec![line(0., 0., 8., 8.), line(8., 0., 0., 8.)]
        }
        Divot => smallvec![line(2., 2., 4., 4.), line(4., 4., 2., 6.)],
        DottedDiamond => smallvec![line(0., 0., 8., 8.), line(0., 8., 8., 0.)],
        ForwardDiagonal => smallvec![line(0., 0., 8., 8.)],
        Horizontal => smallvec![line(0., 4., 8., 4.)],
        HorizontalBrick => smallvec![
            line(0., 3., 8., 3.),
            line(3., 0., 3., 3.),
            line(0., 3., 0., 7.),
            line(0., 7., 7., 7.),
        ],
        LargeCheckerBoard => smallvec![rect(0., 0., 3., 3.), rect(4., 4., 4., 4.)],
        LargeConfetti => smallvec![
            rect(0., 0., 1., 1.),
            rect(2., 3., 1., 1.),
            rect(5., 2., 1., 1.),
            rect(6., 6., 1., 1.),
        ],
        NarrowHorizontal | Trellis => smallvec![
            line(0., 1., 8., 1.),
            line(0., 3., 8., 3.),
            line(0., 5., 8., 5.),
            line(0., 7., 8., 7.),
        ],
        NarrowVertical => smallvec![
            line(1., 0., 1., 8.),
            line(3., 0., 3., 8.),
            line(5., 0., 5., 8.),
            line(7., 0., 7., 8.),
        ],
        Plaid => smallvec![
            line(0., 0., 8., 0.),
            line(0., 3., 8., 3.),
            rect(0., 4., 3., 3.),
        ],
        Shingle => smallvec![
            line(0., 2., 2., 0.),
            line(2., 0., 7., 5.),
            line(0., 3., 3., 7.),
        ],
        SmallCheckerBoard => smallvec![
            rect(0., 0., 1., 1.),
            rect(4., 4., 1., 1.),
            rect(4., 0., 1., 1.),
            rect(0., 4., 1., 1.),
        ],
        SmallConfetti => smallvec![
            line(0., 0., 2., 2.),
            line(7., 3., 5., 5.),
            line(2., 6., 4., 4.),
        ],
        SmallGrid => smallvec![
            line(0., 2., 8., 2.),
            line(0., 6., 8., 6.),
            line(2., 0., 2., 8.),
            line(6., 0., 6., 8.),
        ],
        SolidDiamond => smallvec![HatchPrimitive::Polygon(vec![
            Point::new(3., 0.),
            Point::new(6., 3.),
            Point::new(3., 6.),
            Point::new(0., 3.),
        ])],
        Sphere => smallvec![HatchPrimitive::Ellipse {
            center: Point::new(3., 3.),
            rx: 2.,
            ry: 2.,
        }],
        Vertical => smallvec![line(0., 0., 0., 8.)],
        Wave => smallvec![line(0., 4., 3., 2.), line(3., 2., 8., 4.)],
        Weave => smallvec![
            line(0., 4., 4., 0.),
            line(8., 4., 4., 8.),
            line(0., 0., 0., 4.),
            line(0., 4., 4., 8.),
        ],
        WideDownwardDiagonal => smallvec![
            line(0., 0., 8., 8.),
            line(0., 1., 8., 9.),
            line(7., 0., 8., 1.),
        ],
        WideUpwardDiagonal => smallvec![
            line(8., 0., 0., 8.),
            line(8., 1., 0., 9.),
            line(0., 1., -1., 0.),
        ],
        ZigZag => smallvec![line(0., 4., 4., 0.), line(4., 0., 8., 4.)],
        Percent05 => smallvec![line(0., 0., 1., 0.), line(4., 4., 5., 4.)],
        Percent10 => smallvec![
            line(0., 0., 1., 0.),
            line(4., 2., 5., 2.),
            line(2., 4., 3., 4.),
            line(6., 6., 7., 6.),
        ],
        Percent20 => smallvec![
            line(0., 0., 2., 0.),
            line(4., 2., 6., 2.),
            line(2., 4., 4., 4.),
            line(5., 6., 7., 6.),
        ],
        Percent25 => smallvec![
            line(0., 0., 3., 0.),
            line(4., 2., 6., 2.),
            line(2., 4., 5., 4.),
            line(5., 6., 7., 6.),
        ],
        Percent30 => smallvec![
            rect(0., 0., 3., 1.),
            line(4., 2., 6., 2.),
            rect(2., 4., 3., 1.),
            line(5., 6., 7., 6.),
        ],
        Percent40 => smallvec![
            rect(0., 0., 3., 1.),
            rect(4., 2., 3., 1.),
            rect(2., 4., 3., 1.),
            rect(5., 6., 3., 1.),
        ],
        Percent50 => smallvec![rect(0., 0., 3., 3.), rect(4., 4., 4., 4.)],
        Percent60 => smallvec![rect(0., 0., 4., 3.), rect(4., 4., 4., 4.)],
        Percent70 => smallvec![rect(0., 0., 4., 5.), rect(4., 4., 4., 4.)],
        Percent75 => smallvec![rect(0., 0., 7., 3.), rect(0., 2., 3., 7.)],
        Percent80 => smallvec![rect(0., 0., 7., 4.), rect(0., 2., 4., 7.)],
        Percent90 => smallvec![rect(0., 0., 7., 5.), rect(0., 2., 5., 7.)],
    }
}
