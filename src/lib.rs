//! # docx2pdf
//!
//! DOCX to PDF conversion library for Rust.
//!
//! Converts a ZIP-packaged OOXML word-processing document into a
//! paginated PDF, preserving paragraph text, per-paragraph alignment,
//! and the paragraph's dominant run color.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> docx2pdf::Result<()> {
//!     docx2pdf::convert_file("document.docx", "document.pdf")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Extraction**: the document part's XML tree is walked once,
//!   producing an ordered paragraph sequence with run texts concatenated
//!   and a structural handle back to each source element.
//! - **Layout**: each paragraph becomes one line; the engine measures it,
//!   picks the x position from its alignment, advances a vertical cursor,
//!   and breaks to a new page before the bottom margin is crossed.
//! - **Emission**: laid-out pages are serialized with `pdf-writer` using
//!   the base-14 Helvetica font.
//!
//! Malformed markup degrades to defaults (empty text, left alignment,
//! black); only package-level and I/O failures are errors.

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, DocxConverter};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, is_docx_bytes};
pub use error::{Error, Result};
pub use model::{
    Alignment, Color, ColorParseError, DrawCommand, PageLayout, Paragraph, RunFormatting,
};
pub use render::{LayoutEngine, LayoutOptions};

use std::path::Path;

/// Convert a DOCX file into a PDF file.
///
/// # Arguments
///
/// * `input` - Path to the DOCX file
/// * `output` - Path the PDF is written to
///
/// # Example
///
/// ```no_run
/// docx2pdf::convert_file("in.docx", "out.pdf").unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    DocxConverter::new().convert(input, output)
}

/// Convert a DOCX file into a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use docx2pdf::ConvertOptions;
///
/// let options = ConvertOptions::new().with_margin(60.0).with_font_size(10.0);
/// docx2pdf::convert_file_with_options("in.docx", "out.pdf", options).unwrap();
/// ```
pub fn convert_file_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: ConvertOptions,
) -> Result<()> {
    DocxConverter::with_options(options).convert(input, output)
}

/// Convert an in-memory DOCX package, returning the PDF bytes.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("document.docx").unwrap();
/// let pdf = docx2pdf::convert_bytes(&data).unwrap();
/// std::fs::write("document.pdf", pdf).unwrap();
/// ```
pub fn convert_bytes(data: &[u8]) -> Result<Vec<u8>> {
    DocxConverter::new().convert_bytes(data)
}

/// Convert an in-memory DOCX package with custom options.
pub fn convert_bytes_with_options(data: &[u8], options: ConvertOptions) -> Result<Vec<u8>> {
    DocxConverter::with_options(options).convert_bytes(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_bytes_empty_data() {
        let data: [u8; 0] = [];
        let result = convert_bytes(&data);
        assert!(result.is_err());
    }

    #[test]
    fn test_convert_bytes_unknown_magic() {
        let result = convert_bytes(b"%PDF-1.7 definitely not a docx");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.layout.margin, 40.0);
        assert_eq!(options.layout.font_size, 12.0);
        assert_eq!(options.layout.line_gap, 5.0);
        assert_eq!(options.layout.page_width, 612.0);
        assert_eq!(options.layout.page_height, 792.0);
    }
}
