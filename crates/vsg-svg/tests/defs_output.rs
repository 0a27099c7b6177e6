//! Integration tests: paint definitions registered by the style translator
//! come out of the writer as well-formed `defs` content.

use pretty_assertions::assert_eq;
use vsg_core::{
    Brush, Color, Document, HatchBrush, HatchStyle, LinearGradientBrush, LinearGradientMode,
    NodeKind, Rect, SceneNode, StyleTranslator, WrapMode,
};
use vsg_svg::{StyleMode, WriteConfig, to_element_tree, write_svg};

fn filled_rect(doc: &mut Document, brush: &Brush) {
    let style = StyleTranslator::default().fill(doc, brush);
    let id = doc.next_id("rect", None);
    let top = doc.top_group;
    doc.add_child(
        top,
        SceneNode::new(NodeKind::Rect {
            rect: Rect::new(0.0, 0.0, 16.0, 16.0),
        })
        .with_id(id)
        .with_style(style),
    );
}

#[test]
fn hatch_pattern_tile() {
    let mut doc = Document::new(16.0, 16.0);
    filled_rect(
        &mut doc,
        &Brush::Hatch(HatchBrush {
            style: HatchStyle::SolidDiamond,
            foreground: Color::BLUE,
            background: Color::YELLOW,
        }),
    );

    let tree = to_element_tree(&doc, &WriteConfig::default());
    let defs = tree.child("defs").unwrap();
    let pattern = &defs.children[0];
    assert_eq!(pattern.name, "pattern");
    assert_eq!(pattern.attr("width"), Some("8"));
    assert_eq!(pattern.attr("patternUnits"), Some("userSpaceOnUse"));
    assert_eq!(pattern.attr("stroke-linecap"), Some("butt"));

    let names: Vec<_> = pattern.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["rect", "polygon"]);
    assert_eq!(pattern.children[1].attr("points"), Some("3,0 6,3 3,6 0,3"));
    assert_eq!(pattern.children[1].attr("fill"), Some("blue"));

    let rect = &tree.child("g").unwrap().children[0];
    let reference = format!("url(#{})", pattern.id().unwrap());
    assert_eq!(rect.attr("fill"), Some(reference.as_str()));
}

#[test]
fn gradient_reference_resolves_in_text_output() {
    let mut doc = Document::new(100.0, 20.0);
    let brush = LinearGradientBrush::new(
        Rect::new(0.0, 0.0, 100.0, 20.0),
        Color::WHITE,
        Color::BLACK,
        LinearGradientMode::Horizontal,
    )
    .with_wrap(WrapMode::TileFlipX);
    filled_rect(&mut doc, &Brush::LinearGradient(brush));

    let svg = write_svg(
        &doc,
        &WriteConfig {
            style_mode: StyleMode::Inline,
            ..WriteConfig::compact()
        },
    );
    assert!(svg.contains(r#"spreadMethod="reflect""#));
    assert!(svg.contains(r#"gradientUnits="userSpaceOnUse""#));
    assert!(svg.contains(r#"style="fill:url(#linearGradient2_LinearGradientBrush)""#));
    assert!(svg.contains(r#"<stop offset="0" stop-color="white" />"#));
}
