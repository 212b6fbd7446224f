//! File intake and validation.
//!
//! Uploads arrive as raw bytes plus whatever name and MIME the browser
//! declared. Validation is fail-fast over the whole batch: the first
//! offending file rejects the entire selection and the workspace keeps
//! its previous contents.

use crate::error::ErrorState;
use crate::tools::ToolCapabilities;
use paperdesk_pdf::{probe_pdf, quick_check};
use serde::Serialize;
use tracing::debug;

/// Hard cap on a single upload.
pub const MAX_FILE_BYTES: usize = 20 * 1024 * 1024;

const SUPPORTED_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/png",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// One validated upload held by the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    pub name: String,
    pub media_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type == "application/pdf" || self.name.to_lowercase().ends_with(".pdf")
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// Validate a batch of candidate uploads.
///
/// All files pass or none do. PDF payloads are additionally probed so
/// that password-protected and unparseable documents are caught at
/// intake rather than mid-export.
pub fn validate_batch(files: &[UploadedFile]) -> Result<(), ErrorState> {
    for file in files {
        validate_file(file)?;
    }
    Ok(())
}

fn validate_file(file: &UploadedFile) -> Result<(), ErrorState> {
    if !is_supported_type(file) {
        return Err(ErrorState::unsupported(format!(
            "\"{}\" is not a supported file type. Please upload a PDF, JPG, PNG or DOCX file.",
            file.name
        )));
    }

    if file.size_bytes() > MAX_FILE_BYTES {
        return Err(ErrorState::generic(format!(
            "\"{}\" is larger than the 20 MB limit.",
            file.name
        )));
    }

    if file.is_pdf() {
        let unreadable = || {
            ErrorState::corrupted(format!(
                "\"{}\" could not be read. The file may be corrupted.",
                file.name
            ))
        };
        // Structural gate before the full parse: obviously truncated
        // uploads never reach the object-model parser.
        quick_check(&file.bytes).map_err(|_| unreadable())?;
        let probe = probe_pdf(&file.bytes).map_err(|_| unreadable())?;
        if probe.encrypted {
            return Err(ErrorState::password(format!(
                "\"{}\" is password protected. Please unlock it first.",
                file.name
            )));
        }
        debug!(
            file = file.name.as_str(),
            pages = probe.page_count,
            "accepted PDF upload"
        );
    }

    Ok(())
}

fn is_supported_type(file: &UploadedFile) -> bool {
    SUPPORTED_TYPES.contains(&file.media_type.as_str())
        || file.name.to_lowercase().ends_with(".pdf")
}

/// How an accepted batch lands in the file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeMode {
    /// New selection replaces whatever was loaded.
    Replace,
    /// New selection appends; multi-file tools only.
    Append,
}

impl IntakeMode {
    pub fn for_capabilities(caps: &ToolCapabilities, already_loaded: bool) -> Self {
        if caps.multi_file && already_loaded {
            IntakeMode::Append
        } else {
            IntakeMode::Replace
        }
    }
}
