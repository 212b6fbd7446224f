//! The tool catalog.
//!
//! Domain model only: a tool is an id, a category and a capability
//! record. Presentation (titles, card copy) lives in a separate
//! mapping so the registry can be matched on without dragging UI
//! strings through the state machine.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Every tool the suite offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolId {
    Merge,
    Split,
    RemovePages,
    ExtractPages,
    Organize,
    Scan,
    Compress,
    Repair,
    Ocr,
    JpgToPdf,
    WordToPdf,
    PptToPdf,
    ExcelToPdf,
    HtmlToPdf,
    PdfToJpg,
    PdfToWord,
    PdfToPpt,
    PdfToExcel,
    PdfToPdfa,
    Rotate,
    PageNumbers,
    Watermark,
    Crop,
    EditPdf,
    Unlock,
    Protect,
    Sign,
    Redact,
    Compare,
    AiSummarize,
    AiChat,
    PdfToOcrWord,
    ScreenshotEditor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Organize,
    Optimize,
    Convert,
    Edit,
    Security,
    Ai,
}

/// Extension/MIME of the artifact a tool downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
    /// Declared seam: resolves a filename but the composer falls back
    /// to passthrough.
    Xlsx,
    /// Declared seam, same as Xlsx.
    Pptx,
    Jpg,
    Bin,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pptx => "pptx",
            ExportFormat::Jpg => "jpg",
            ExportFormat::Bin => "bin",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => "application/msword",
            ExportFormat::Xlsx => "application/vnd.ms-excel",
            ExportFormat::Pptx => "application/vnd.ms-powerpoint",
            ExportFormat::Jpg => "image/jpeg",
            ExportFormat::Bin => "application/octet-stream",
        }
    }
}

/// What a tool can do, independent of how its card is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolCapabilities {
    /// Only the merge tool accepts more than one file.
    pub multi_file: bool,
    /// Tool cannot export without AI-extracted text.
    pub requires_ai: bool,
    /// Tool works from camera captures instead of uploads.
    pub captures_input: bool,
    pub export_format: ExportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub id: ToolId,
    pub category: ToolCategory,
    pub capabilities: ToolCapabilities,
}

impl ToolId {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolId::Merge => "merge",
            ToolId::Split => "split",
            ToolId::RemovePages => "remove-pages",
            ToolId::ExtractPages => "extract-pages",
            ToolId::Organize => "organize",
            ToolId::Scan => "scan",
            ToolId::Compress => "compress",
            ToolId::Repair => "repair",
            ToolId::Ocr => "ocr",
            ToolId::JpgToPdf => "jpg-to-pdf",
            ToolId::WordToPdf => "word-to-pdf",
            ToolId::PptToPdf => "ppt-to-pdf",
            ToolId::ExcelToPdf => "excel-to-pdf",
            ToolId::HtmlToPdf => "html-to-pdf",
            ToolId::PdfToJpg => "pdf-to-jpg",
            ToolId::PdfToWord => "pdf-to-word",
            ToolId::PdfToPpt => "pdf-to-ppt",
            ToolId::PdfToExcel => "pdf-to-excel",
            ToolId::PdfToPdfa => "pdf-to-pdfa",
            ToolId::Rotate => "rotate",
            ToolId::PageNumbers => "page-numbers",
            ToolId::Watermark => "watermark",
            ToolId::Crop => "crop",
            ToolId::EditPdf => "edit-pdf",
            ToolId::Unlock => "unlock",
            ToolId::Protect => "protect",
            ToolId::Sign => "sign",
            ToolId::Redact => "redact",
            ToolId::Compare => "compare",
            ToolId::AiSummarize => "ai-summarize",
            ToolId::AiChat => "ai-chat",
            ToolId::PdfToOcrWord => "pdf-to-ocr-word",
            ToolId::ScreenshotEditor => "screenshot-editor",
        }
    }

    pub fn all() -> &'static [ToolId] {
        &[
            ToolId::Merge,
            ToolId::Split,
            ToolId::RemovePages,
            ToolId::ExtractPages,
            ToolId::Organize,
            ToolId::Scan,
            ToolId::Compress,
            ToolId::Repair,
            ToolId::Ocr,
            ToolId::JpgToPdf,
            ToolId::WordToPdf,
            ToolId::PptToPdf,
            ToolId::ExcelToPdf,
            ToolId::HtmlToPdf,
            ToolId::PdfToJpg,
            ToolId::PdfToWord,
            ToolId::PdfToPpt,
            ToolId::PdfToExcel,
            ToolId::PdfToPdfa,
            ToolId::Rotate,
            ToolId::PageNumbers,
            ToolId::Watermark,
            ToolId::Crop,
            ToolId::EditPdf,
            ToolId::Unlock,
            ToolId::Protect,
            ToolId::Sign,
            ToolId::Redact,
            ToolId::Compare,
            ToolId::AiSummarize,
            ToolId::AiChat,
            ToolId::PdfToOcrWord,
            ToolId::ScreenshotEditor,
        ]
    }

    pub fn category(self) -> ToolCategory {
        match self {
            ToolId::Merge
            | ToolId::Split
            | ToolId::RemovePages
            | ToolId::ExtractPages
            | ToolId::Organize
            | ToolId::Scan => ToolCategory::Organize,
            ToolId::Compress | ToolId::Repair => ToolCategory::Optimize,
            ToolId::Ocr
            | ToolId::JpgToPdf
            | ToolId::WordToPdf
            | ToolId::PptToPdf
            | ToolId::ExcelToPdf
            | ToolId::HtmlToPdf
            | ToolId::PdfToJpg
            | ToolId::PdfToWord
            | ToolId::PdfToPpt
            | ToolId::PdfToExcel
            | ToolId::PdfToPdfa => ToolCategory::Convert,
            ToolId::Rotate
            | ToolId::PageNumbers
            | ToolId::Watermark
            | ToolId::Crop
            | ToolId::EditPdf
            | ToolId::ScreenshotEditor => ToolCategory::Edit,
            ToolId::Unlock | ToolId::Protect | ToolId::Sign | ToolId::Redact | ToolId::Compare => {
                ToolCategory::Security
            }
            ToolId::AiSummarize | ToolId::AiChat | ToolId::PdfToOcrWord => ToolCategory::Ai,
        }
    }

    pub fn capabilities(self) -> ToolCapabilities {
        let export_format = match self {
            ToolId::PdfToWord | ToolId::PdfToOcrWord | ToolId::Ocr => ExportFormat::Docx,
            ToolId::PdfToExcel => ExportFormat::Xlsx,
            ToolId::PdfToPpt => ExportFormat::Pptx,
            ToolId::PdfToJpg | ToolId::ScreenshotEditor => ExportFormat::Jpg,
            ToolId::Compare => ExportFormat::Bin,
            _ => ExportFormat::Pdf,
        };

        ToolCapabilities {
            multi_file: self == ToolId::Merge,
            requires_ai: matches!(
                self,
                ToolId::PdfToWord
                    | ToolId::PdfToOcrWord
                    | ToolId::Ocr
                    | ToolId::AiSummarize
                    | ToolId::AiChat
            ),
            captures_input: self == ToolId::Scan,
            export_format,
        }
    }

    pub fn descriptor(self) -> ToolDescriptor {
        ToolDescriptor {
            id: self,
            category: self.category(),
            capabilities: self.capabilities(),
        }
    }

    /// File-picker filter hint for this tool's category of input.
    pub fn accept_hint(self) -> &'static str {
        match self {
            ToolId::JpgToPdf | ToolId::ScreenshotEditor => "image/jpeg,image/png",
            ToolId::WordToPdf => ".docx,.doc",
            ToolId::PptToPdf => ".pptx,.ppt",
            ToolId::ExcelToPdf => ".xlsx,.xls",
            ToolId::HtmlToPdf => ".html,.htm",
            _ => "application/pdf,.pdf",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolId::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown tool id: {0}")]
pub struct UnknownTool(pub String);

/// Presentation copy for a tool card. Kept out of the domain model on
/// purpose.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToolCopy {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn tool_copy(id: ToolId) -> ToolCopy {
    let (title, description) = match id {
        ToolId::Merge => (
            "Merge PDF",
            "Combine PDFs in the order you want with the easiest PDF merger available.",
        ),
        ToolId::Split => (
            "Split PDF",
            "Separate one page or a whole set for easy conversion into independent PDF files.",
        ),
        ToolId::RemovePages => (
            "Remove Pages",
            "Delete pages from a PDF document and download the modified file.",
        ),
        ToolId::ExtractPages => (
            "Extract Pages",
            "Pull selected pages out of a PDF into a new document.",
        ),
        ToolId::Organize => ("Organize PDF", "Sort, add and delete PDF pages as you like."),
        ToolId::Scan => (
            "Scan to PDF",
            "Capture pages with your camera and bundle them into a single PDF.",
        ),
        ToolId::Compress => (
            "Compress PDF",
            "Reduce file size while optimizing for maximal PDF quality.",
        ),
        ToolId::Repair => (
            "Repair PDF",
            "Recover data from a corrupted or damaged PDF document.",
        ),
        ToolId::Ocr => (
            "OCR PDF",
            "Turn scanned documents into searchable, editable text.",
        ),
        ToolId::JpgToPdf => ("JPG to PDF", "Convert JPG and PNG images to PDF documents."),
        ToolId::WordToPdf => ("WORD to PDF", "The best quality Word to PDF conversion."),
        ToolId::PptToPdf => (
            "POWERPOINT to PDF",
            "Make PPT and PPTX slideshows easy to view by converting them to PDF.",
        ),
        ToolId::ExcelToPdf => (
            "EXCEL to PDF",
            "Make EXCEL spreadsheets easy to read by converting them to PDF.",
        ),
        ToolId::HtmlToPdf => ("HTML to PDF", "Convert web pages to PDF documents."),
        ToolId::PdfToJpg => (
            "PDF to JPG",
            "Convert each PDF page into a JPG or extract images from a PDF.",
        ),
        ToolId::PdfToWord => (
            "PDF to WORD",
            "Convert your PDF to WORD documents with incredible accuracy.",
        ),
        ToolId::PdfToPpt => (
            "PDF to POWERPOINT",
            "Turn your PDF files into editable slideshows.",
        ),
        ToolId::PdfToExcel => (
            "PDF to EXCEL",
            "Extract data directly from PDF to EXCEL spreadsheets in seconds.",
        ),
        ToolId::PdfToPdfa => (
            "PDF to PDF/A",
            "Convert PDFs to the archival PDF/A format.",
        ),
        ToolId::Rotate => (
            "Rotate PDF",
            "Rotate your PDFs the way you need them. Even multiple PDFs at once!",
        ),
        ToolId::PageNumbers => (
            "Add Page Numbers",
            "Stamp page numbers onto your PDF in seconds.",
        ),
        ToolId::Watermark => (
            "Add Watermark",
            "Stamp an image or text over your PDF in seconds.",
        ),
        ToolId::Crop => ("Crop PDF", "Trim the margins of your PDF pages."),
        ToolId::EditPdf => (
            "Edit PDF",
            "Add text, images, shapes or freehand annotations to a PDF document.",
        ),
        ToolId::Unlock => (
            "Unlock PDF",
            "Remove PDF password security, so you can use your PDFs freely.",
        ),
        ToolId::Protect => (
            "Protect PDF",
            "Protect PDF files with a password and encrypt them for security.",
        ),
        ToolId::Sign => (
            "Sign PDF",
            "Sign yourself or request electronic signatures from others.",
        ),
        ToolId::Redact => (
            "Redact PDF",
            "Permanently remove sensitive content from your documents.",
        ),
        ToolId::Compare => (
            "Compare PDF",
            "Show the differences between two versions of a document.",
        ),
        ToolId::AiSummarize => (
            "AI Summarize",
            "Get deep insights and key takeaways from long documents in seconds.",
        ),
        ToolId::AiChat => (
            "Chat with PDF",
            "Ask questions, get summaries, and find data instantly in any document.",
        ),
        ToolId::PdfToOcrWord => (
            "PDF to OCR Word",
            "Turn scanned PDFs into editable Word files with the highest accuracy.",
        ),
        ToolId::ScreenshotEditor => (
            "Screenshot Editor",
            "Tidy up screenshots before sharing or archiving them.",
        ),
    };
    ToolCopy { title, description }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn every_id_round_trips_through_its_string() {
        for &id in ToolId::all() {
            assert_eq!(id.as_str().parse::<ToolId>().unwrap(), id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let strings: HashSet<&str> = ToolId::all().iter().map(|id| id.as_str()).collect();
        assert_eq!(strings.len(), ToolId::all().len());
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!("pdf-to-nothing".parse::<ToolId>().is_err());
    }

    #[test]
    fn only_merge_is_multi_file() {
        for &id in ToolId::all() {
            assert_eq!(id.capabilities().multi_file, id == ToolId::Merge);
        }
    }

    #[test]
    fn only_scan_captures_input() {
        for &id in ToolId::all() {
            assert_eq!(id.capabilities().captures_input, id == ToolId::Scan);
        }
    }

    #[test]
    fn word_tools_export_docx() {
        assert_eq!(
            ToolId::PdfToWord.capabilities().export_format,
            ExportFormat::Docx
        );
        assert_eq!(
            ToolId::PdfToOcrWord.capabilities().export_format,
            ExportFormat::Docx
        );
        assert_eq!(ToolId::Merge.capabilities().export_format, ExportFormat::Pdf);
        assert_eq!(ToolId::Scan.capabilities().export_format, ExportFormat::Pdf);
        assert_eq!(
            ToolId::PdfToJpg.capabilities().export_format,
            ExportFormat::Jpg
        );
    }

    #[test]
    fn every_tool_has_copy() {
        for &id in ToolId::all() {
            let copy = tool_copy(id);
            assert!(!copy.title.is_empty());
            assert!(!copy.description.is_empty());
        }
    }
}
