//! SVG text output.
//!
//! Renders the element tree as XML. Attribute values and text content are
//! escaped; element order follows the scene tree exactly.

use crate::config::WriteConfig;
use crate::tree::{SvgElement, to_element_tree};
use vsg_core::Document;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// Serialize a finished document as SVG text.
pub fn write_svg(doc: &Document, config: &WriteConfig) -> String {
    let tree = to_element_tree(doc, config);
    log::debug!("writing SVG with {} elements", tree.count());
    write_element_tree(&tree, config)
}

/// Serialize an already-built element tree.
pub fn write_element_tree(tree: &SvgElement, config: &WriteConfig) -> String {
    let mut out = String::new();
    if config.xml_declaration {
        out.push_str(XML_DECLARATION);
        newline(&mut out, config);
    }
    emit_element(&mut out, tree, 0, config);
    out
}

/// Serialize the element tree as JSON.
pub fn write_json(doc: &Document, config: &WriteConfig) -> Result<String, serde_json::Error> {
    let tree = to_element_tree(doc, config);
    if config.pretty {
        serde_json::to_string_pretty(&tree)
    } else {
        serde_json::to_string(&tree)
    }
}

fn indent(out: &mut String, depth: usize, config: &WriteConfig) {
    if config.pretty {
        for _ in 0..depth * config.indent {
            out.push(' ');
        }
    }
}

fn newline(out: &mut String, config: &WriteConfig) {
    if config.pretty {
        out.push('\n');
    }
}

fn emit_element(out: &mut String, el: &SvgElement, depth: usize, config: &WriteConfig) {
    indent(out, depth, config);
    out.push_str(&format!("<{}", el.name));
    for (k, v) in &el.attributes {
        out.push_str(&format!(" {k}=\"{}\"", escape(v, true)));
    }

    match (&el.text, el.children.is_empty()) {
        (None, true) => out.push_str(" />"),
        (Some(text), true) => {
            out.push_str(&format!(">{}</{}>", escape(text, false), el.name));
        }
        (text, false) => {
            out.push('>');
            if let Some(text) = text {
                out.push_str(&escape(text, false));
            }
            newline(out, config);
            for child in &el.children {
                emit_element(out, child, depth + 1, config);
            }
            indent(out, depth, config);
            out.push_str(&format!("</{}>", el.name));
        }
    }
    newline(out, config);
}

/// Escape XML special characters. Quotes only matter inside attributes.
pub fn escape(s: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vsg_core::{NodeKind, Point, SceneNode, Style};

    #[test]
    fn empty_document_text() {
        let doc = Document::new(200.0, 100.0);
        let svg = write_svg(&doc, &WriteConfig::default());
        let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>
<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"100\">
  <g id=\"g1\" />
  <defs />
</svg>
";
        assert_eq!(svg, expected);
    }

    #[test]
    fn compact_output_is_single_line() {
        let doc = Document::new(5.0, 5.0);
        let svg = write_svg(&doc, &WriteConfig::compact());
        assert!(!svg.contains('\n'));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut doc = Document::new(50.0, 20.0);
        let top = doc.top_group;
        doc.add_child(
            top,
            SceneNode::new(NodeKind::Text {
                content: "a < b & \"c\"".into(),
                origin: Point::new(1.0, 2.0),
            })
            .with_style(Style::new().with("font-family", "\"Times New Roman\"")),
        );
        let svg = write_svg(&doc, &WriteConfig::compact());
        assert!(svg.contains(r#"<text x="1" y="2" font-family="&quot;Times New Roman&quot;">a &lt; b &amp; "c"</text>"#));
    }

    #[test]
    fn element_tree_text_nests_children() {
        let mut root = SvgElement::new("g");
        root.set("id", "outer");
        let mut label = SvgElement::new("text");
        label.text = Some("hi".into());
        root.children.push(label);
        root.children.push(SvgElement::new("defs"));

        let config = WriteConfig {
            xml_declaration: false,
            ..WriteConfig::default()
        };
        let expected = "<g id=\"outer\">\n  <text>hi</text>\n  <defs />\n</g>\n";
        assert_eq!(write_element_tree(&root, &config), expected);
    }

    #[test]
    fn json_output_mirrors_tree() {
        let doc = Document::new(20.0, 10.0);
        let json = write_json(&doc, &WriteConfig::compact()).unwrap();
        assert!(json.starts_with(r#"{"name":"svg""#));
        assert!(json.contains(r#""name":"defs""#));
    }
}
