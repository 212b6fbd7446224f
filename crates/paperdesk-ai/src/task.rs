//! Task and persona presets for the extraction adapter.
//!
//! The persona is a system-level instruction shaping response style;
//! the task prompt is the per-call instruction. Both are fixed per
//! task so output shape stays predictable across runs.

/// What the workspace is asking the model to do with a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionTask {
    /// Condense the document into key takeaways.
    Summarize,
    /// Faithful layout-preserving plain-text transcription, used by
    /// the PDF-to-Word and OCR tools.
    Transcribe,
    /// Answer one question strictly from the document.
    Chat(String),
}

impl ExtractionTask {
    pub fn prompt(&self) -> String {
        match self {
            ExtractionTask::Summarize => "Summarize this document clearly.".to_string(),
            ExtractionTask::Transcribe => "Transcribe this document exactly. Maintain the \
                layout, alignment, bold text, and overall structure as much as possible using \
                plain text and basic spacing. DO NOT add any extra text, titles, or commentary. \
                Start immediately with the document content."
                .to_string(),
            ExtractionTask::Chat(question) => {
                format!("Question about this document: {}", question)
            }
        }
    }

    pub fn persona(&self) -> &'static str {
        match self {
            ExtractionTask::Summarize => {
                "You are a professional document summarizer. Be concise and accurate."
            }
            ExtractionTask::Transcribe => {
                "You are an expert OCR and document reconstruction specialist. Your only task \
                 is to replicate the input document's text and basic layout perfectly. Never \
                 add your own labels or branding."
            }
            ExtractionTask::Chat(_) => {
                "You are an AI assistant answering questions strictly based on the provided file."
            }
        }
    }
}
