//! Rendering module: text measurement, page layout, and PDF emission.

mod layout;
mod metrics;
mod pdf;

pub use layout::{LayoutCursor, LayoutEngine, LayoutOptions};
pub use metrics::{line_height, measure_text, FONT_SIZE};
pub use pdf::write_pdf;
