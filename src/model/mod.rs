//! Document model types shared across the conversion pipeline.
//!
//! This module defines the intermediate representation that bridges
//! package extraction and PDF layout: extracted paragraphs on one side,
//! resolved formatting and laid-out pages of draw commands on the other.

mod formatting;
mod page;
mod paragraph;

pub use formatting::{Alignment, Color, ColorParseError, RunFormatting};
pub use page::{DrawCommand, PageLayout};
pub use paragraph::Paragraph;
