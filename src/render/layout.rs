//! Page layout engine.
//!
//! Consumes the extracted paragraph sequence one line at a time: measures
//! the line, picks its x position from the paragraph alignment, advances
//! the vertical cursor, and opens a new page when the next line would
//! cross the bottom margin. Each paragraph renders as exactly one line;
//! the engine never reorders anything.

use serde::{Deserialize, Serialize};

use crate::model::{Alignment, DrawCommand, PageLayout, RunFormatting};

use super::metrics::{self, line_height, measure_text};

/// Layout configuration: page geometry and type metrics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Page width in points
    pub page_width: f32,

    /// Page height in points
    pub page_height: f32,

    /// Margin on all four sides in points
    pub margin: f32,

    /// Font size in points
    pub font_size: f32,

    /// Extra gap between lines in points
    pub line_gap: f32,
}

impl LayoutOptions {
    /// Create layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page dimensions.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the margin applied on all sides.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the inter-line gap.
    pub fn with_line_gap(mut self, gap: f32) -> Self {
        self.line_gap = gap;
        self
    }

    /// Vertical space one line consumes.
    pub fn line_advance(&self) -> f32 {
        line_height(self.font_size) + self.line_gap
    }

    /// How many lines fit between the top and bottom margins.
    pub fn lines_per_page(&self) -> usize {
        ((self.page_height - 2.0 * self.margin) / self.line_advance()).floor() as usize
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        // Letter page, 40pt margins, 12pt type, 5pt gap (reference behavior)
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 40.0,
            font_size: metrics::FONT_SIZE,
            line_gap: 5.0,
        }
    }
}

/// Mutable per-page layout position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    /// Horizontal position of the last placed line
    pub x: f32,

    /// Vertical position for the next line, from the page top
    pub y: f32,
}

/// Lays out paragraphs onto pages of draw commands.
///
/// The cursor is owned by the engine and scoped to one conversion; run a
/// separate engine instance per conversion.
pub struct LayoutEngine {
    options: LayoutOptions,
    cursor: LayoutCursor,
    done: Vec<PageLayout>,
    current: PageLayout,
    // Overflow was detected after the previous draw; the fresh page is
    // only allocated when another line actually arrives, so a document
    // that ends exactly at the bottom margin gets no trailing blank page.
    pending_break: bool,
}

impl LayoutEngine {
    /// Create an engine with the cursor at the top margin of page one.
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            cursor: LayoutCursor {
                x: options.margin,
                y: options.margin,
            },
            done: Vec::new(),
            current: PageLayout::new(options.page_width, options.page_height),
            pending_break: false,
        }
    }

    /// Place one paragraph as a single line on the current page.
    pub fn place(&mut self, text: &str, formatting: &RunFormatting) {
        if self.pending_break {
            self.open_page();
        }

        let width = measure_text(text, self.options.font_size);
        self.cursor.x = match formatting.alignment {
            Alignment::Left => self.options.margin,
            Alignment::Center => (self.options.page_width - width) / 2.0,
            Alignment::Right => self.options.page_width - self.options.margin - width,
        };

        self.current.push(DrawCommand {
            text: text.to_string(),
            color: formatting.color,
            x: self.cursor.x,
            y: self.cursor.y,
        });

        self.cursor.y += self.options.line_advance();

        // Detected one line ahead: the next line would cross the bottom
        // margin, so it goes on a fresh page.
        if self.cursor.y + self.options.line_advance()
            > self.options.page_height - self.options.margin
        {
            self.pending_break = true;
        }
    }

    fn open_page(&mut self) {
        let fresh = PageLayout::new(self.options.page_width, self.options.page_height);
        self.done.push(std::mem::replace(&mut self.current, fresh));
        self.cursor = LayoutCursor {
            x: self.options.margin,
            y: self.options.margin,
        };
        self.pending_break = false;
        log::debug!("page break: starting page {}", self.done.len() + 1);
    }

    /// Current cursor position.
    pub fn cursor(&self) -> LayoutCursor {
        self.cursor
    }

    /// Finalize and return the laid-out pages. The current page is kept
    /// as-is; no trailing blank page is forced.
    pub fn finish(mut self) -> Vec<PageLayout> {
        self.done.push(self.current);
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    fn left_black() -> RunFormatting {
        RunFormatting::default()
    }

    #[test]
    fn test_one_command_per_paragraph_in_order() {
        let mut engine = LayoutEngine::new(LayoutOptions::default());
        engine.place("first", &left_black());
        engine.place("", &left_black());
        engine.place("third", &left_black());

        let pages = engine.finish();
        assert_eq!(pages.len(), 1);

        let texts: Vec<&str> = pages[0].commands.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["first", "", "third"]);
    }

    #[test]
    fn test_alignment_law() {
        let options = LayoutOptions::default();
        let (w_page, m) = (options.page_width, options.margin);

        let mut engine = LayoutEngine::new(options);
        let line = "A line of text";
        let width = measure_text(line, options.font_size);

        engine.place(line, &left_black());
        engine.place(
            line,
            &RunFormatting {
                alignment: Alignment::Center,
                color: Color::BLACK,
            },
        );
        engine.place(
            line,
            &RunFormatting {
                alignment: Alignment::Right,
                color: Color::BLACK,
            },
        );

        let pages = engine.finish();
        let cmds = &pages[0].commands;
        assert_eq!(cmds[0].x, m);
        assert!((cmds[1].x - (w_page - width) / 2.0).abs() < 1e-4);
        assert!((cmds[2].x - (w_page - m - width)).abs() < 1e-4);
    }

    #[test]
    fn test_vertical_advance() {
        let options = LayoutOptions::default();
        let mut engine = LayoutEngine::new(options);
        engine.place("one", &left_black());
        engine.place("two", &left_black());

        let pages = engine.finish();
        let cmds = &pages[0].commands;
        assert_eq!(cmds[0].y, options.margin);
        assert!((cmds[1].y - (options.margin + options.line_advance())).abs() < 1e-4);
    }

    #[test]
    fn test_empty_paragraph_consumes_a_line() {
        let options = LayoutOptions::default();
        let mut engine = LayoutEngine::new(options);
        engine.place("above", &left_black());
        engine.place("", &left_black());
        engine.place("below", &left_black());

        let pages = engine.finish();
        let cmds = &pages[0].commands;
        assert!((cmds[2].y - cmds[0].y - 2.0 * options.line_advance()).abs() < 1e-4);
    }

    #[test]
    fn test_pagination_boundary() {
        let options = LayoutOptions::default();
        let per_page = options.lines_per_page();
        assert!(per_page > 0);

        // Exactly one full page: no spill, no trailing blank page
        let mut engine = LayoutEngine::new(options);
        for _ in 0..per_page {
            engine.place("line", &left_black());
        }
        let pages = engine.finish();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].line_count(), per_page);

        // One more line spills onto a second page
        let mut engine = LayoutEngine::new(options);
        for _ in 0..per_page + 1 {
            engine.place("line", &left_black());
        }
        let pages = engine.finish();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].line_count(), per_page);
        assert_eq!(pages[1].line_count(), 1);
    }

    #[test]
    fn test_page_count_is_ceil_of_lines() {
        let options = LayoutOptions::default();
        let per_page = options.lines_per_page();
        let n = per_page * 2 + per_page / 2;

        let mut engine = LayoutEngine::new(options);
        for _ in 0..n {
            engine.place("line", &left_black());
        }
        let pages = engine.finish();

        assert_eq!(pages.len(), n.div_ceil(per_page));
        assert_eq!(pages.iter().map(PageLayout::line_count).sum::<usize>(), n);
    }

    #[test]
    fn test_cursor_resets_after_page_break() {
        let options = LayoutOptions::default();
        let per_page = options.lines_per_page();

        let mut engine = LayoutEngine::new(options);
        for _ in 0..per_page + 1 {
            engine.place("line", &left_black());
        }

        let pages = engine.finish();
        assert_eq!(pages[1].commands[0].y, options.margin);
    }
}
