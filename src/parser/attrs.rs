//! Attribute resolution: paragraph alignment and dominant run color.

use roxmltree::Node;

use crate::model::{Alignment, Color, RunFormatting};

use super::package::WML_NS;

fn wml_descendant<'a>(node: Node<'a, 'a>, name: &str) -> Option<Node<'a, 'a>> {
    node.descendants()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
}

/// Resolve a paragraph's alignment from its `w:jc` marker.
///
/// `center` and `right` map to their variants; any other value, a marker
/// without a value, or no marker at all resolves to left.
pub fn resolve_alignment(paragraph: Node) -> Alignment {
    match wml_descendant(paragraph, "jc").and_then(|n| n.attribute((WML_NS, "val"))) {
        Some("center") => Alignment::Center,
        Some("right") => Alignment::Right,
        _ => Alignment::Left,
    }
}

/// Resolve a paragraph's text color from its run-level `w:color` markers.
///
/// Only the first marker in the paragraph is consulted; the line-based
/// layout renders a paragraph as one colored line, so per-run variation
/// is not modeled. A missing marker or a value that is not a well-formed
/// `#RRGGBB` string resolves to black; the malformed value is logged.
pub fn resolve_color(paragraph: Node) -> Color {
    let Some(value) =
        wml_descendant(paragraph, "color").and_then(|n| n.attribute((WML_NS, "val")))
    else {
        return Color::BLACK;
    };

    match Color::parse_hex(value) {
        Ok(color) => color,
        Err(e) => {
            log::warn!("ignoring malformed color value {:?}: {}", value, e);
            Color::BLACK
        }
    }
}

/// Resolve both formatting attributes for a paragraph node.
pub fn resolve_formatting(paragraph: Node) -> RunFormatting {
    RunFormatting {
        alignment: resolve_alignment(paragraph),
        color: resolve_color(paragraph),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_paragraph<F: FnOnce(Node)>(inner: &str, f: F) {
        let xml = format!(
            r#"<w:document xmlns:w="{WML_NS}"><w:body><w:p>{inner}</w:p></w:body></w:document>"#
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let p = doc
            .descendants()
            .find(|n| n.tag_name().name() == "p")
            .unwrap();
        f(p);
    }

    #[test]
    fn test_alignment_center_and_right() {
        with_paragraph(r#"<w:pPr><w:jc w:val="center"/></w:pPr>"#, |p| {
            assert_eq!(resolve_alignment(p), Alignment::Center);
        });
        with_paragraph(r#"<w:pPr><w:jc w:val="right"/></w:pPr>"#, |p| {
            assert_eq!(resolve_alignment(p), Alignment::Right);
        });
    }

    #[test]
    fn test_alignment_defaults_to_left() {
        with_paragraph("", |p| {
            assert_eq!(resolve_alignment(p), Alignment::Left);
        });
        // Closed mapping: unrecognized tokens are not passed through
        with_paragraph(r#"<w:pPr><w:jc w:val="both"/></w:pPr>"#, |p| {
            assert_eq!(resolve_alignment(p), Alignment::Left);
        });
        with_paragraph(r#"<w:pPr><w:jc/></w:pPr>"#, |p| {
            assert_eq!(resolve_alignment(p), Alignment::Left);
        });
    }

    #[test]
    fn test_color_well_formed() {
        with_paragraph(
            r##"<w:r><w:rPr><w:color w:val="#FF0000"/></w:rPr><w:t>x</w:t></w:r>"##,
            |p| {
                assert_eq!(resolve_color(p), Color { r: 255, g: 0, b: 0 });
            },
        );
    }

    #[test]
    fn test_color_first_marker_wins() {
        with_paragraph(
            r##"<w:r><w:rPr><w:color w:val="#0000FF"/></w:rPr><w:t>a</w:t></w:r>
               <w:r><w:rPr><w:color w:val="#00FF00"/></w:rPr><w:t>b</w:t></w:r>"##,
            |p| {
                assert_eq!(resolve_color(p), Color { r: 0, g: 0, b: 255 });
            },
        );
    }

    #[test]
    fn test_color_malformed_degrades_to_black() {
        // "#aééx" is 7 bytes of multi-byte UTF-8; must degrade, not panic
        for bad in ["FF0000", "#FF00", "#GG0000", "#FF000000", "", "#aééx"] {
            let marker = format!(
                r#"<w:r><w:rPr><w:color w:val="{bad}"/></w:rPr><w:t>x</w:t></w:r>"#
            );
            with_paragraph(&marker, |p| {
                assert_eq!(resolve_color(p), Color::BLACK, "value {:?}", bad);
            });
        }
    }

    #[test]
    fn test_color_absent_is_black() {
        with_paragraph(r#"<w:r><w:t>x</w:t></w:r>"#, |p| {
            assert_eq!(resolve_color(p), Color::BLACK);
        });
    }

    #[test]
    fn test_resolve_formatting() {
        with_paragraph(
            r##"<w:pPr><w:jc w:val="right"/></w:pPr>
               <w:r><w:rPr><w:color w:val="#FF0000"/></w:rPr><w:t>x</w:t></w:r>"##,
            |p| {
                let fmt = resolve_formatting(p);
                assert_eq!(fmt.alignment, Alignment::Right);
                assert_eq!(fmt.color, Color { r: 255, g: 0, b: 0 });
            },
        );
    }
}
