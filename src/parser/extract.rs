//! Content extraction: document tree to ordered paragraph sequence.

use roxmltree::{Document, Node};

use crate::model::Paragraph;

use super::package::WML_NS;

/// Find the first direct child with the given WML tag name.
pub(crate) fn wml_child<'a>(node: Node<'a, 'a>, name: &str) -> Option<Node<'a, 'a>> {
    node.children()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
}

fn is_wml(node: Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(WML_NS)
}

/// Extract the ordered paragraph sequence from a parsed document part.
///
/// One [`Paragraph`] per `w:p` element, in tree-traversal order. The text
/// of each `w:r` run is taken from its `w:t` child; runs without a text
/// element contribute nothing, and a paragraph with no text-bearing runs
/// still produces an (empty) entry so it keeps its line of vertical
/// space. Nothing here can fail: malformed content is skipped.
pub fn extract_paragraphs(doc: &Document) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();

    for node in doc.descendants().filter(|n| is_wml(*n, "p")) {
        let mut paragraph = Paragraph::new(node.id());

        for run in node.descendants().filter(|n| is_wml(*n, "r")) {
            if let Some(text) = wml_child(run, "t") {
                paragraph.add_run(text.text().unwrap_or_default());
            }
        }

        log::debug!(
            "extracted paragraph with {} runs: {:?}",
            paragraph.runs.len(),
            paragraph.text()
        );
        paragraphs.push(paragraph);
    }

    paragraphs
}
