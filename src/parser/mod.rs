//! Package reading and document-tree extraction.

mod attrs;
mod extract;
mod package;

pub use attrs::{resolve_alignment, resolve_color, resolve_formatting};
pub use extract::extract_paragraphs;
pub use package::{DocxPackage, DOCUMENT_PART, WML_NS};
