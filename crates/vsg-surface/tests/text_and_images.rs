//! Integration tests: text placement, bitmap emulation, paint servers and
//! end-cap decorations as they come out of the element tree.

use pretty_assertions::assert_eq;
use vsg_core::{
    Brush, Color, DashStyle, Font, HatchBrush, HatchStyle, LineCap, LinearGradientBrush,
    LinearGradientMode, Pen, Point, Rect,
};
use vsg_surface::{
    Bitmap, DrawingSurface, Icon, StringAlignment, StringFormat, SurfaceConfig, SvgSurface,
    TextLayout,
};
use vsg_svg::{SvgElement, WriteConfig};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn drawn(surface: &SvgSurface) -> SvgElement {
    let tree = surface.to_element_tree(&WriteConfig::default());
    tree.child("g").cloned().expect("top-level group")
}

// ─── Text ────────────────────────────────────────────────────────────────

#[test]
fn centered_text_in_rect_is_clipped() {
    init();
    let mut surface = SvgSurface::new(200.0, 100.0);
    surface
        .draw_string(
            "Hello & bye",
            &Font::new("Arial", 12.0).bold(),
            &Color::BLACK.into(),
            TextLayout::In(Rect::new(10.0, 20.0, 110.0, 40.0)),
            StringFormat::aligned(StringAlignment::Center),
        )
        .unwrap();

    let tree = surface.to_element_tree(&WriteConfig::default());
    let text = &tree.child("g").unwrap().children[0];
    assert_eq!(text.name, "text");
    assert_eq!(text.text.as_deref(), Some("Hello & bye"));
    assert_eq!(text.attr("x"), Some("60"));
    assert_eq!(text.attr("y"), Some("20"));
    assert_eq!(text.attr("text-anchor"), Some("middle"));
    assert_eq!(text.attr("font-family"), Some("Arial"));
    assert_eq!(text.attr("font-size"), Some("12px"));
    assert_eq!(text.attr("font-weight"), Some("bold"));
    assert_eq!(text.attr("baseline-shift"), Some("-86%"));
    assert_eq!(
        text.attr("clip-path"),
        Some("url(#clipPath2_text_clipper)")
    );

    let clipper = tree.find_by_id("clipPath2_text_clipper").unwrap();
    assert_eq!(clipper.children[0].attr("width"), Some("100"));

    let svg = surface.to_svg(&WriteConfig::default());
    assert!(svg.contains(">Hello &amp; bye</text>"));
}

#[test]
fn text_at_point_and_far_alignment() {
    init();
    let mut surface = SvgSurface::new(200.0, 100.0);
    let font = Font::new("Courier New", 10.0);
    surface
        .draw_string(
            "a",
            &font,
            &Color::BLACK.into(),
            TextLayout::At(Point::new(5.0, 5.0)),
            StringFormat::default(),
        )
        .unwrap();
    surface
        .draw_string(
            "b",
            &font,
            &Color::BLACK.into(),
            TextLayout::In(Rect::new(0.0, 0.0, 80.0, 20.0)),
            StringFormat::aligned(StringAlignment::Far).without_clip(),
        )
        .unwrap();

    let g = drawn(&surface);
    assert_eq!(g.children[0].attr("x"), Some("5"));
    assert_eq!(g.children[0].attr("clip-path"), None);
    assert_eq!(g.children[1].attr("x"), Some("80"));
    assert_eq!(g.children[1].attr("text-anchor"), Some("end"));
    assert_eq!(g.children[1].attr("clip-path"), None);
    assert_eq!(surface.document().def_count(), 0);
}

#[test]
fn measure_string_uses_measurer() {
    let surface = SvgSurface::new(10.0, 10.0);
    let size = surface.measure_string("abcd", &Font::new("Arial", 10.0), None);
    assert!(size.width > 0.0);
    assert!(size.height > 0.0);
}

// ─── Images ──────────────────────────────────────────────────────────────

#[test]
fn bitmap_becomes_pixel_group() {
    init();
    let mut surface = SvgSurface::new(50.0, 50.0);
    let bitmap = Bitmap::from_pixels(2, 1, vec![Color::RED, Color::TRANSPARENT]).unwrap();
    surface.draw_image(&bitmap, Point::new(3.0, 4.0)).unwrap();

    let g = drawn(&surface);
    let group = &g.children[0];
    assert_eq!(group.name, "g");
    assert_eq!(group.id(), Some("g2_bitmap_at_3_4"));
    assert_eq!(group.children.len(), 1);
    let px = &group.children[0];
    assert_eq!(px.id(), None);
    assert_eq!(px.attr("x"), Some("3"));
    assert_eq!(px.attr("y"), Some("4"));
    assert_eq!(px.attr("fill"), Some("rgb(255,0,0)"));
}

#[test]
fn icon_stretches_into_rect() {
    init();
    let mut surface = SvgSurface::new(50.0, 50.0);
    let icon = Icon(Bitmap::from_pixels(1, 1, vec![Color::BLUE]).unwrap());
    surface
        .draw_icon_in(&icon, Rect::new(0.0, 0.0, 16.0, 16.0))
        .unwrap();

    let g = drawn(&surface);
    let px = &g.children[0].children[0];
    assert_eq!(px.attr("width"), Some("16"));
    assert_eq!(px.attr("fill"), Some("rgb(0,0,255)"));
}

// ─── Paint servers ───────────────────────────────────────────────────────

#[test]
fn gradient_and_hatch_fills_register_defs() {
    init();
    let mut surface = SvgSurface::new(100.0, 100.0);
    let gradient = LinearGradientBrush::new(
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Color::WHITE,
        Color::BLACK,
        LinearGradientMode::Vertical,
    );
    surface
        .fill_ellipse(
            &Brush::LinearGradient(gradient),
            Rect::new(0.0, 0.0, 100.0, 50.0),
        )
        .unwrap();
    surface
        .fill_pie(
            &Brush::Hatch(HatchBrush {
                style: HatchStyle::Cross,
                foreground: Color::BLACK,
                background: Color::WHITE,
            }),
            Rect::new(0.0, 0.0, 40.0, 40.0),
            0.0,
            90.0,
        )
        .unwrap();

    let g = drawn(&surface);
    assert_eq!(g.children[0].name, "ellipse");
    assert_eq!(g.children[0].attr("rx"), Some("50"));
    assert_eq!(
        g.children[0].attr("fill"),
        Some("url(#linearGradient2_LinearGradientBrush)")
    );
    assert_eq!(g.children[1].name, "path");
    assert!(g.children[1].attr("fill").unwrap().ends_with("_HatchBrush)"));
    assert_eq!(surface.document().def_count(), 2);
}

#[test]
fn rect_and_polygon_hatch_tiles() {
    init();
    let mut surface = SvgSurface::new(40.0, 20.0);
    for (i, style) in [HatchStyle::LargeCheckerBoard, HatchStyle::SolidDiamond]
        .into_iter()
        .enumerate()
    {
        let x = i as f64 * 20.0;
        surface
            .fill_rectangle(
                &Brush::Hatch(HatchBrush {
                    style,
                    foreground: Color::BLACK,
                    background: Color::WHITE,
                }),
                Rect::new(x, 0.0, x + 20.0, 20.0),
            )
            .unwrap();
    }

    let tree = surface.to_element_tree(&WriteConfig::default());
    let tiles: Vec<&SvgElement> = drawn(&surface)
        .children
        .iter()
        .map(|c| {
            let fill = c.attr("fill").unwrap();
            let id = fill.trim_start_matches("url(#").trim_end_matches(')');
            tree.find_by_id(id).unwrap()
        })
        .collect();

    let names = |el: &SvgElement| el.children.iter().map(|c| c.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(tiles[0]), vec!["rect", "rect", "rect"]);
    assert_eq!(tiles[0].children[0].attr("fill"), Some("white"));
    assert_eq!(tiles[0].children[2].attr("x"), Some("4"));
    assert_eq!(tiles[0].children[2].attr("width"), Some("4"));

    assert_eq!(names(tiles[1]), vec!["rect", "polygon"]);
    assert_eq!(tiles[1].children[1].attr("points"), Some("3,0 6,3 3,6 0,3"));
    assert_eq!(tiles[1].children[1].attr("fill"), Some("black"));
}

#[test]
fn unsupported_brush_falls_back_to_configured_color() {
    init();
    let config = SurfaceConfig {
        fallback_brush_color: Color::GRAY,
        ..SurfaceConfig::default()
    };
    let mut surface = SvgSurface::with_config(10.0, 10.0, config);
    surface
        .fill_rectangle(
            &Brush::Texture {
                width: 4,
                height: 4,
            },
            Rect::new(0.0, 0.0, 5.0, 5.0),
        )
        .unwrap();
    let g = drawn(&surface);
    assert_eq!(g.children[0].attr("fill"), Some("gray"));
}

// ─── Strokes ─────────────────────────────────────────────────────────────

#[test]
fn dashed_polyline_with_anchor_caps() {
    init();
    let mut surface = SvgSurface::new(100.0, 100.0);
    let pen = Pen::new(Color::BLACK, 2.0)
        .with_dash(DashStyle::Dash)
        .with_caps(LineCap::RoundAnchor, LineCap::DiamondAnchor);
    surface
        .draw_lines(
            &pen,
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
        )
        .unwrap();

    let g = drawn(&surface);
    let names: Vec<_> = g.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["polyline", "ellipse", "polygon"]);
    assert_eq!(g.children[0].attr("points"), Some("0,0 10,0 10,10"));
    assert_eq!(g.children[0].attr("stroke-dasharray"), Some("6,4"));
    assert!(g.children[1].id().unwrap().ends_with("_line_anchor"));
    assert!(g.children[2].attr("transform").is_some());
}

#[test]
fn fill_polygon_sets_fill_rule() {
    init();
    let mut surface = SvgSurface::new(10.0, 10.0);
    surface
        .fill_polygon(
            &Color::GREEN.into(),
            &[Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(0.0, 5.0)],
            vsg_core::FillMode::Winding,
        )
        .unwrap();
    let g = drawn(&surface);
    assert_eq!(g.children[0].attr("fill"), Some("green"));
    assert_eq!(g.children[0].attr("fill-rule"), Some("nonzero"));
}

#[test]
fn curve_through_points_is_cubic_path() {
    init();
    let mut surface = SvgSurface::new(10.0, 10.0);
    surface
        .draw_curve(
            &Pen::new(Color::BLACK, 1.0),
            &[Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)],
            None,
        )
        .unwrap();
    let g = drawn(&surface);
    let d = g.children[0].attr("d").unwrap();
    assert!(d.starts_with("M 0,0 C "));
    assert!(d.ends_with(" 10 0"));
    assert_eq!(d.matches('C').count(), 2);
}
