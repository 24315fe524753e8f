//! Conversion orchestration: DOCX package in, PDF file out.
//!
//! Ties the pipeline together: open the package, read and parse the
//! canonical document part, extract paragraphs, lay them out, serialize
//! the pages, and persist the result. There is no partial-success mode —
//! either the whole document is produced or the call fails and no output
//! file appears.

use std::io::Write;
use std::path::Path;

use roxmltree::Document;

use crate::error::{Error, Result};
use crate::parser::{self, DocxPackage};
use crate::render::{write_pdf, LayoutEngine, LayoutOptions};

/// Options for a conversion run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Page geometry and type metrics
    pub layout: LayoutOptions,
}

impl ConvertOptions {
    /// Create conversion options with defaults (Letter page, 40pt
    /// margins, 12pt Helvetica, 5pt line gap).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page dimensions in points.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.layout = self.layout.with_page_size(width, height);
        self
    }

    /// Set the margin applied on all sides.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.layout = self.layout.with_margin(margin);
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.layout = self.layout.with_font_size(size);
        self
    }

    /// Set the inter-line gap.
    pub fn with_line_gap(mut self, gap: f32) -> Self {
        self.layout = self.layout.with_line_gap(gap);
        self
    }
}

/// DOCX to PDF converter.
///
/// Stateless apart from its options; each `convert` call owns its own
/// layout engine, so concurrent conversions just use independent calls.
#[derive(Debug, Clone, Default)]
pub struct DocxConverter {
    options: ConvertOptions,
}

impl DocxConverter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert a DOCX file into a PDF file.
    ///
    /// Fails if the package cannot be opened, the document part is
    /// missing or unparseable, or the output path is not writable. The
    /// output is written through a temporary file in the destination
    /// directory and renamed into place, so a failed conversion leaves
    /// no file behind.
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<()> {
        let xml = {
            let mut package = DocxPackage::open(input)?;
            package.read_document_xml()?
            // package handle released here, success or not
        };

        let bytes = self.render(&xml)?;
        persist_atomic(output.as_ref(), &bytes)
    }

    /// Convert an in-memory DOCX package, returning the PDF bytes.
    pub fn convert_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let xml = {
            let mut package = DocxPackage::from_bytes(data)?;
            package.read_document_xml()?
        };

        self.render(&xml)
    }

    fn render(&self, xml: &str) -> Result<Vec<u8>> {
        let doc = Document::parse(xml)?;
        let paragraphs = parser::extract_paragraphs(&doc);
        log::debug!("laying out {} paragraphs", paragraphs.len());

        let mut engine = LayoutEngine::new(self.options.layout);
        for paragraph in &paragraphs {
            // Extraction guarantees the handle resolves; skipping here is
            // a defensive branch, not a normal path.
            let node = doc.get_node(paragraph.node);
            let Some(node) = node.filter(|n| n.is_element()) else {
                log::warn!("skipping paragraph with unresolvable source node");
                continue;
            };

            let formatting = parser::resolve_formatting(node);
            engine.place(&paragraph.text(), &formatting);
        }

        let pages = engine.finish();
        log::debug!("rendered {} page(s)", pages.len());
        Ok(write_pdf(&pages, self.options.layout.font_size))
    }
}

/// Write bytes to `output` via a temp file in the same directory, renamed
/// into place only on full success.
fn persist_atomic(output: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(output)
        .map_err(|e| Error::Persist(e.to_string()))?;
    Ok(())
}
