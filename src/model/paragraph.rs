//! Paragraph-level types.

use roxmltree::NodeId;

/// A paragraph extracted from the document part.
///
/// Holds the ordered run texts and a structural handle to the source
/// `w:p` element, so formatting can be resolved later without re-scanning
/// the tree by text content. Created once during extraction and immutable
/// afterward.
#[derive(Debug, Clone)]
pub struct Paragraph {
    /// Text of each run, in child order
    pub runs: Vec<String>,

    /// Source element in the parsed document tree
    pub node: NodeId,
}

impl Paragraph {
    /// Create a new empty paragraph for the given source node.
    pub fn new(node: NodeId) -> Self {
        Self {
            runs: Vec::new(),
            node,
        }
    }

    /// Append a run's text.
    pub fn add_run(&mut self, text: impl Into<String>) {
        self.runs.push(text.into());
    }

    /// The rendered line: all run texts concatenated with no separators.
    pub fn text(&self) -> String {
        self.runs.concat()
    }

    /// Check if the paragraph has no text-bearing runs.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.is_empty())
    }
}
