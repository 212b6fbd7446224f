//! PDF probing: cheap structural checks run at intake time.
//!
//! A probe parses the document once and reports everything the intake
//! layer needs to accept or reject a file: page count, version,
//! encryption, and whatever Info-dictionary metadata is present.

use crate::error::PdfOpError;
use lopdf::Document;
use serde::Serialize;

/// Result of probing an uploaded PDF.
#[derive(Debug, Clone, Serialize, Default)]
pub struct PdfProbe {
    /// Number of pages in the document
    pub page_count: u32,
    /// PDF version string from the header (e.g., "1.7")
    pub version: String,
    /// Whether the document is encrypted
    pub encrypted: bool,
    /// File size in bytes
    pub size_bytes: usize,
    /// Document title from the Info dictionary, if any
    pub title: Option<String>,
    /// Document author from the Info dictionary, if any
    pub author: Option<String>,
}

/// Parse a PDF and extract intake metadata.
///
/// Encrypted documents are reported, not rejected; the intake layer
/// decides what an encrypted upload means for the selected tool.
pub fn probe_pdf(bytes: &[u8]) -> Result<PdfProbe, PdfOpError> {
    header_check(bytes)?;

    let version = header_version(bytes);

    let document =
        Document::load_mem(bytes).map_err(|e| PdfOpError::Parse(e.to_string()))?;

    let page_count = document.get_pages().len() as u32;
    if page_count == 0 {
        return Err(PdfOpError::Parse("PDF has no pages".into()));
    }

    let (title, author) = info_metadata(&document);

    Ok(PdfProbe {
        page_count,
        version,
        encrypted: document.is_encrypted(),
        size_bytes: bytes.len(),
        title,
        author,
    })
}

/// Structural check without parsing: header magic plus a trailing EOF
/// marker. Used where a full parse would be wasteful.
pub fn quick_check(bytes: &[u8]) -> Result<(), PdfOpError> {
    header_check(bytes)?;

    let tail = if bytes.len() > 1024 {
        &bytes[bytes.len() - 1024..]
    } else {
        bytes
    };

    if !tail.windows(5).any(|w| w == b"%%EOF") {
        return Err(PdfOpError::Parse(
            "PDF appears truncated (missing %%EOF marker)".into(),
        ));
    }

    Ok(())
}

fn header_check(bytes: &[u8]) -> Result<(), PdfOpError> {
    if bytes.len() < 8 {
        return Err(PdfOpError::Parse("File too small to be a PDF".into()));
    }
    if !bytes.starts_with(b"%PDF-") {
        return Err(PdfOpError::Parse(
            "Not a PDF file (missing %PDF- header)".into(),
        ));
    }
    Ok(())
}

/// Header format: %PDF-1.7
fn header_version(bytes: &[u8]) -> String {
    if bytes.len() >= 8 {
        if let Ok(version) = std::str::from_utf8(&bytes[5..8]) {
            return version.trim().to_string();
        }
    }
    "1.4".to_string()
}

fn info_metadata(document: &Document) -> (Option<String>, Option<String>) {
    let mut title = None;
    let mut author = None;

    if let Ok(info_id) = document
        .trailer
        .get(b"Info")
        .and_then(|obj| obj.as_reference())
    {
        if let Some(info_dict) = document
            .objects
            .get(&info_id)
            .and_then(|obj| obj.as_dict().ok())
        {
            title = string_entry(info_dict, b"Title");
            author = string_entry(info_dict, b"Author");
        }
    }

    (title, author)
}

fn string_entry(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    let bytes = dict.get(key).ok()?.as_str().ok()?;
    let decoded = String::from_utf8_lossy(bytes);
    if decoded.is_empty() {
        None
    } else {
        Some(decoded.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{encrypted_pdf, sample_pdf};
    use pretty_assertions::assert_eq;

    #[test]
    fn probe_reports_page_count_and_version() {
        let pdf = sample_pdf(5);
        let probe = probe_pdf(&pdf).unwrap();
        assert_eq!(probe.page_count, 5);
        assert_eq!(probe.version, "1.7");
        assert!(!probe.encrypted);
        assert_eq!(probe.size_bytes, pdf.len());
    }

    #[test]
    fn probe_reports_encrypted_documents() {
        let probe = probe_pdf(&encrypted_pdf()).unwrap();
        assert!(probe.encrypted);
        assert_eq!(probe.page_count, 1);
    }

    #[test]
    fn probe_rejects_non_pdf_bytes() {
        assert!(probe_pdf(b"this is not a pdf at all").is_err());
    }

    #[test]
    fn probe_rejects_tiny_files() {
        assert!(probe_pdf(b"tiny").is_err());
    }

    #[test]
    fn quick_check_accepts_valid_pdf() {
        let pdf = sample_pdf(1);
        assert!(quick_check(&pdf).is_ok());
    }

    #[test]
    fn quick_check_rejects_truncated_pdf() {
        let mut pdf = sample_pdf(1);
        pdf.truncate(pdf.len() / 2);
        assert!(quick_check(&pdf).is_err());
    }

    #[test]
    fn header_version_falls_back_on_garbage() {
        assert_eq!(header_version(b"%PDF-\xff\xfe\xfd junk"), "1.4");
    }
}
