//! DOCX package access.
//!
//! A DOCX file is a ZIP container of named XML parts. This module opens
//! the container and exposes the canonical document part as a string; the
//! archive handle lives only as long as the read.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::detect::detect_format_from_path;
use crate::error::{Error, Result};

/// The canonical part holding the document's paragraph/run markup.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// WordprocessingML namespace all recognized elements live under.
pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// An opened DOCX package.
pub struct DocxPackage<R: Read + std::io::Seek> {
    archive: ZipArchive<R>,
}

impl DocxPackage<BufReader<File>> {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Verify the container signature before handing the file to zip
        detect_format_from_path(path)?;

        let file = File::open(path)?;
        let archive = ZipArchive::new(BufReader::new(file))?;
        Ok(Self { archive })
    }
}

impl DocxPackage<Cursor<Vec<u8>>> {
    /// Open a DOCX package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        crate::detect::detect_format_from_bytes(data)?;
        let archive = ZipArchive::new(Cursor::new(data.to_vec()))?;
        Ok(Self { archive })
    }

    /// Open a DOCX package from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }
}

impl<R: Read + std::io::Seek> DocxPackage<R> {
    /// Read the canonical document part as a UTF-8 string.
    pub fn read_document_xml(&mut self) -> Result<String> {
        self.read_part(DOCUMENT_PART)
    }

    /// Read a named part as a UTF-8 string.
    pub fn read_part(&mut self, name: &str) -> Result<String> {
        let mut part = self
            .archive
            .by_name(name)
            .map_err(|e| match e {
                zip::result::ZipError::FileNotFound => Error::MissingPart(name.to_string()),
                other => Error::from(other),
            })?;
        let mut content = String::new();
        part.read_to_string(&mut content)?;
        Ok(content)
    }

    /// Check whether the package contains a named part.
    pub fn has_part(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }
}
