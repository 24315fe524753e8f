//! Package format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// ZIP local file header magic bytes: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Detect whether a file is a ZIP-packaged document.
///
/// This checks the container signature only; whether the package actually
/// holds the canonical document part is decided when the part is read.
///
/// # Arguments
/// * `path` - Path to the document file
///
/// # Returns
/// * `Ok(())` if the file starts with a ZIP local file header
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader
        .read_exact(&mut header)
        .map_err(|_| Error::UnknownFormat)?;
    detect_format_from_bytes(&header)
}

/// Detect whether bytes start a ZIP-packaged document.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<()> {
    if data.len() < ZIP_MAGIC.len() || !data.starts_with(ZIP_MAGIC) {
        return Err(Error::UnknownFormat);
    }
    Ok(())
}

/// Check if a file looks like a DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like a DOCX package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_zip() {
        let data = b"PK\x03\x04\x14\x00\x00\x00";
        assert!(detect_format_from_bytes(data).is_ok());
    }

    #[test]
    fn test_detect_invalid_format() {
        let data = b"%PDF-1.7\n";
        let result = detect_format_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_too_short() {
        let data = b"PK";
        let result = detect_format_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_is_docx_bytes() {
        assert!(is_docx_bytes(b"PK\x03\x04rest"));
        assert!(!is_docx_bytes(b"Not a package"));
        assert!(!is_docx_bytes(b""));
    }
}
