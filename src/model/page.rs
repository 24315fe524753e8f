//! Laid-out page types.
//!
//! These are the layout engine's output: positioned draw commands grouped
//! by page. The PDF backend consumes them without doing any measurement
//! or placement of its own.

use serde::{Deserialize, Serialize};

use super::Color;

/// A single text draw instruction.
///
/// Coordinates are in points, measured from the top-left corner of the
/// page; `y` is the top of the line box. The backend converts to the
/// output format's coordinate system at emission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    /// The line of text to draw
    pub text: String,

    /// Resolved text color
    pub color: Color,

    /// Horizontal position in points
    pub x: f32,

    /// Vertical position in points, from the page top
    pub y: f32,
}

/// A laid-out page: fixed dimensions plus ordered draw commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Draw commands in document order
    pub commands: Vec<DrawCommand>,
}

impl PageLayout {
    /// Create a new empty page with the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Add a draw command to the page.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Check if the page has no content.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of lines drawn on the page.
    pub fn line_count(&self) -> usize {
        self.commands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_layout() {
        let mut page = PageLayout::new(612.0, 792.0);
        assert!(page.is_empty());

        page.push(DrawCommand {
            text: "hello".to_string(),
            color: Color::BLACK,
            x: 40.0,
            y: 40.0,
        });

        assert!(!page.is_empty());
        assert_eq!(page.line_count(), 1);
        assert_eq!(page.commands[0].text, "hello");
    }
}
