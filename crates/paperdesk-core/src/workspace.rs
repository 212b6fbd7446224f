//! The tool workspace state machine.
//!
//! One `Workspace` is the state behind a single open tool: loaded
//! files or captured pages (never both), the preview strip, the
//! extracted-text slot, the chat transcript, a processing phase with a
//! monotonic percentage, and at most one active error. Long-running
//! work is single-flight: a request arriving while one is in progress
//! is ignored.

use crate::capture::CaptureSession;
use crate::error::ErrorState;
use crate::export::{compose, ExportArtifact, ExportInputs};
use crate::intake::{validate_batch, IntakeMode, UploadedFile};
use crate::preview::{build_previews, BlankPageRasterizer, PageRasterizer, PreviewPage};
use crate::tools::{ToolDescriptor, ToolId};
use async_trait::async_trait;
use paperdesk_ai::{AiError, DocumentAi, ExtractionTask};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long a finished download stays in `Done` before the caller
/// resets the workspace to `Idle`.
pub const DOWNLOAD_RESET: Duration = Duration::from_secs(3);

/// Where a long-running operation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingPhase {
    Idle,
    Uploading,
    Converting,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One turn of the document chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Text extraction seam. `DocumentAi` is the production
/// implementation; tests plug in stubs.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(
        &self,
        file_name: &str,
        bytes: &[u8],
        declared_mime: Option<&str>,
        task: &ExtractionTask,
    ) -> Result<String, AiError>;

    fn is_configured(&self) -> bool;
}

#[async_trait]
impl TextExtractor for DocumentAi {
    async fn extract(
        &self,
        file_name: &str,
        bytes: &[u8],
        declared_mime: Option<&str>,
        task: &ExtractionTask,
    ) -> Result<String, AiError> {
        self.process_document(file_name, bytes, declared_mime, task)
            .await
    }

    fn is_configured(&self) -> bool {
        DocumentAi::is_configured(self)
    }
}

/// Observer for progress updates, called on every phase or percent
/// change.
pub type ProgressObserver = Box<dyn Fn(ProcessingPhase, u8) + Send + Sync>;

pub struct Workspace {
    descriptor: ToolDescriptor,
    files: Vec<UploadedFile>,
    captures: CaptureSession,
    previews: Vec<PreviewPage>,
    extracted_text: Option<String>,
    transcript: Vec<ChatMessage>,
    error: Option<ErrorState>,
    phase: ProcessingPhase,
    percent: u8,
    busy: bool,
    rasterizer: Box<dyn PageRasterizer>,
    observer: Option<ProgressObserver>,
}

impl Workspace {
    pub fn new(tool: ToolId) -> Self {
        Self::with_rasterizer(tool, Box::new(BlankPageRasterizer))
    }

    pub fn with_rasterizer(tool: ToolId, rasterizer: Box<dyn PageRasterizer>) -> Self {
        Self {
            descriptor: tool.descriptor(),
            files: Vec::new(),
            captures: CaptureSession::new(),
            previews: Vec::new(),
            extracted_text: None,
            transcript: Vec::new(),
            error: None,
            phase: ProcessingPhase::Idle,
            percent: 0,
            busy: false,
            rasterizer,
            observer: None,
        }
    }

    pub fn set_progress_observer(&mut self, observer: ProgressObserver) {
        self.observer = Some(observer);
    }

    pub fn tool(&self) -> ToolId {
        self.descriptor.id
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn captures(&self) -> &CaptureSession {
        &self.captures
    }

    pub fn previews(&self) -> &[PreviewPage] {
        &self.previews
    }

    pub fn extracted_text(&self) -> Option<&str> {
        self.extracted_text.as_deref()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn error(&self) -> Option<&ErrorState> {
        self.error.as_ref()
    }

    pub fn phase(&self) -> ProcessingPhase {
        self.phase
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Add an upload batch. The whole batch is validated first; one
    /// bad file rejects everything and the workspace is unchanged.
    /// An accepted batch discards every product derived from the old
    /// input, captures included: extracted text, the transcript and
    /// any lingering error belong to files that are no longer what
    /// gets exported.
    pub fn add_files(&mut self, batch: Vec<UploadedFile>) {
        if self.busy {
            debug!("upload ignored while another operation is in flight");
            return;
        }

        self.begin(ProcessingPhase::Uploading);
        if let Err(e) = validate_batch(&batch) {
            warn!(error = %e, "upload batch rejected");
            self.fail(e);
            return;
        }

        self.captures.clear();
        self.extracted_text = None;
        self.transcript.clear();
        self.error = None;

        let mode = IntakeMode::for_capabilities(&self.descriptor.capabilities, !self.files.is_empty());
        match mode {
            IntakeMode::Replace => self.files = batch,
            IntakeMode::Append => self.files.extend(batch),
        }
        info!(
            tool = self.descriptor.id.as_str(),
            count = self.files.len(),
            "files loaded"
        );

        self.advance(50);
        self.previews = build_previews(&self.files, self.rasterizer.as_ref());
        self.finish_idle();
    }

    /// Remove one loaded file and rebuild the preview strip. Removing
    /// the last file empties the workspace and clears every derived
    /// product, error included.
    pub fn remove_file(&mut self, index: usize) {
        if index >= self.files.len() {
            return;
        }
        self.files.remove(index);
        if self.files.is_empty() {
            self.previews.clear();
            self.extracted_text = None;
            self.transcript.clear();
            self.error = None;
        } else {
            self.previews = build_previews(&self.files, self.rasterizer.as_ref());
        }
    }

    /// Append a captured page. Capturing is the capture context: any
    /// loaded files are discarded.
    pub fn capture_page(&mut self, jpeg: Vec<u8>) {
        if !self.files.is_empty() {
            self.switch_context();
            self.files.clear();
            self.previews.clear();
        }
        self.captures.capture(jpeg);
    }

    pub fn remove_capture(&mut self, index: usize) {
        self.captures.remove(index);
        if self.captures.is_empty() {
            self.error = None;
        }
    }

    /// Run the extraction task for the first loaded file. The result
    /// overwrites the single extracted-text slot. No-op while busy or
    /// with nothing loaded.
    pub async fn extract_text(
        &mut self,
        extractor: &dyn TextExtractor,
        task: ExtractionTask,
    ) -> Option<&str> {
        if self.busy {
            debug!("extraction ignored while another operation is in flight");
            return None;
        }
        let file = match self.files.first() {
            Some(f) => f.clone(),
            None => {
                self.error = Some(ErrorState::generic("Please add a file first."));
                return None;
            }
        };

        self.busy = true;
        self.begin(ProcessingPhase::Converting);
        self.advance(30);

        let result = extractor
            .extract(&file.name, &file.bytes, Some(&file.media_type), &task)
            .await;
        self.busy = false;

        match result {
            Ok(text) => {
                self.extracted_text = Some(text);
                self.finish_idle();
                self.extracted_text.as_deref()
            }
            Err(e) => {
                warn!(file = file.name.as_str(), error = %e, "extraction failed");
                self.fail(ErrorState::generic(e.user_message()));
                None
            }
        }
    }

    /// Replace the extracted text with a user edit.
    pub fn set_edited_text(&mut self, text: impl Into<String>) {
        self.extracted_text = Some(text.into());
    }

    /// One chat turn against the loaded document. A failed turn
    /// appends the service's apology as the model message instead of
    /// raising an error.
    pub async fn send_chat(&mut self, extractor: &dyn TextExtractor, message: String) {
        if self.busy {
            debug!("chat ignored while another operation is in flight");
            return;
        }
        let file = match self.files.first() {
            Some(f) => f.clone(),
            None => {
                self.error = Some(ErrorState::generic("Please add a file first."));
                return;
            }
        };

        self.transcript.push(ChatMessage {
            role: Role::User,
            content: message.clone(),
        });

        self.busy = true;
        let result = extractor
            .extract(
                &file.name,
                &file.bytes,
                Some(&file.media_type),
                &ExtractionTask::Chat(message),
            )
            .await;
        self.busy = false;

        let content = match result {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "chat turn failed");
                e.user_message().to_string()
            }
        };
        self.transcript.push(ChatMessage {
            role: Role::Model,
            content,
        });
    }

    /// Produce the download artifact for this tool. Progress runs
    /// through fixed checkpoints; tools that need extracted text run
    /// the extraction first when the slot is empty. On success the
    /// workspace stays in `Done` until `finish_download`.
    pub async fn trigger_download(
        &mut self,
        extractor: &dyn TextExtractor,
    ) -> Option<ExportArtifact> {
        if self.busy {
            debug!("download ignored while another operation is in flight");
            return None;
        }
        self.busy = true;
        self.begin(ProcessingPhase::Converting);
        self.advance(10);

        if self.descriptor.capabilities.requires_ai && self.extracted_text.is_none() {
            self.advance(30);
            let file = match self.files.first() {
                Some(f) => f.clone(),
                None => {
                    self.busy = false;
                    self.fail(ErrorState::generic("Please add a file first."));
                    return None;
                }
            };
            let task = match self.descriptor.id {
                ToolId::AiSummarize => ExtractionTask::Summarize,
                _ => ExtractionTask::Transcribe,
            };
            match extractor
                .extract(&file.name, &file.bytes, Some(&file.media_type), &task)
                .await
            {
                Ok(text) => self.extracted_text = Some(text),
                Err(e) => {
                    self.busy = false;
                    self.fail(ErrorState::generic(e.user_message()));
                    return None;
                }
            }
            self.advance(60);
        }

        let inputs = ExportInputs {
            files: &self.files,
            captures: self.captures.pages(),
            previews: &self.previews,
            extracted_text: self.extracted_text.as_deref(),
        };
        let artifact = match compose(self.descriptor.id, &inputs) {
            Ok(a) => a,
            Err(e) => {
                self.busy = false;
                self.fail(e);
                return None;
            }
        };
        self.advance(90);

        self.advance(100);
        self.phase = ProcessingPhase::Done;
        self.notify();
        self.busy = false;
        info!(
            tool = self.descriptor.id.as_str(),
            file = artifact.filename.as_str(),
            size = artifact.bytes.len(),
            "download composed"
        );
        Some(artifact)
    }

    /// Return to `Idle` after the post-download dwell. The caller
    /// waits `DOWNLOAD_RESET` before invoking this.
    pub fn finish_download(&mut self) {
        if self.phase == ProcessingPhase::Done {
            self.phase = ProcessingPhase::Idle;
            self.percent = 0;
            self.notify();
        }
    }

    /// Clear everything back to a fresh workspace for the same tool.
    pub fn reset(&mut self) {
        self.files.clear();
        self.captures.clear();
        self.previews.clear();
        self.extracted_text = None;
        self.transcript.clear();
        self.error = None;
        self.phase = ProcessingPhase::Idle;
        self.percent = 0;
        self.busy = false;
    }

    /// Switching between the file and capture contexts discards every
    /// derived product of the old context.
    fn switch_context(&mut self) {
        debug!(tool = self.descriptor.id.as_str(), "input context switched");
        self.extracted_text = None;
        self.transcript.clear();
        self.error = None;
    }

    fn begin(&mut self, phase: ProcessingPhase) {
        self.phase = phase;
        self.percent = 0;
        self.notify();
    }

    /// Percent only ever climbs within a run.
    fn advance(&mut self, percent: u8) {
        if percent > self.percent {
            self.percent = percent;
            self.notify();
        }
    }

    fn finish_idle(&mut self) {
        self.advance(100);
        self.phase = ProcessingPhase::Idle;
        self.percent = 0;
        self.notify();
    }

    fn fail(&mut self, error: ErrorState) {
        self.error = Some(error);
        self.phase = ProcessingPhase::Idle;
        self.percent = 0;
        self.notify();
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            observer(self.phase, self.percent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_support::{sample_jpeg, sample_pdf};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    struct StubExtractor {
        response: Result<String, AiError>,
    }

    impl StubExtractor {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
            }
        }

        fn err(e: AiError) -> Self {
            Self { response: Err(e) }
        }
    }

    #[async_trait]
    impl TextExtractor for StubExtractor {
        async fn extract(
            &self,
            _file_name: &str,
            _bytes: &[u8],
            _declared_mime: Option<&str>,
            _task: &ExtractionTask,
        ) -> Result<String, AiError> {
            self.response.clone()
        }

        fn is_configured(&self) -> bool {
            true
        }
    }

    fn pdf_file(name: &str, pages: u32) -> UploadedFile {
        UploadedFile::new(name, "application/pdf", sample_pdf(pages))
    }

    #[test]
    fn single_file_tool_replaces_on_new_upload() {
        let mut ws = Workspace::new(ToolId::Split);
        ws.add_files(vec![pdf_file("first.pdf", 1)]);
        ws.add_files(vec![pdf_file("second.pdf", 2)]);

        assert_eq!(ws.files().len(), 1);
        assert_eq!(ws.files()[0].name, "second.pdf");
        assert_eq!(ws.previews().len(), 2);
    }

    #[test]
    fn merge_appends_across_uploads() {
        let mut ws = Workspace::new(ToolId::Merge);
        ws.add_files(vec![pdf_file("a.pdf", 1)]);
        ws.add_files(vec![pdf_file("b.pdf", 1)]);

        assert_eq!(ws.files().len(), 2);
        assert_eq!(ws.previews().len(), 2);
    }

    #[tokio::test]
    async fn new_upload_drops_stale_extraction_and_transcript() {
        let mut ws = Workspace::new(ToolId::PdfToWord);
        ws.add_files(vec![pdf_file("first.pdf", 1)]);
        ws.extract_text(&StubExtractor::ok("first body"), ExtractionTask::Transcribe)
            .await;
        ws.send_chat(&StubExtractor::ok("It is a memo."), "What is this?".into())
            .await;

        ws.add_files(vec![pdf_file("second.pdf", 1)]);
        assert_eq!(ws.extracted_text(), None);
        assert!(ws.transcript().is_empty());

        // The next download must transcribe the replacement file, not
        // reuse text extracted from the first one.
        let artifact = ws
            .trigger_download(&StubExtractor::ok("second body"))
            .await
            .unwrap();
        let html = String::from_utf8(artifact.bytes).unwrap();
        assert!(html.contains("second body"));
        assert!(!html.contains("first body"));
    }

    #[test]
    fn accepted_upload_clears_a_prior_error() {
        let mut ws = Workspace::new(ToolId::Split);
        ws.add_files(vec![UploadedFile::new(
            "bad.txt",
            "text/plain",
            b"nope".to_vec(),
        )]);
        assert_eq!(ws.error().unwrap().kind, ErrorKind::Unsupported);

        ws.add_files(vec![pdf_file("good.pdf", 1)]);
        assert!(ws.error().is_none());
        assert_eq!(ws.files().len(), 1);
    }

    #[test]
    fn rejected_batch_leaves_workspace_unchanged() {
        let mut ws = Workspace::new(ToolId::Merge);
        ws.add_files(vec![pdf_file("good.pdf", 1)]);

        ws.add_files(vec![
            pdf_file("more.pdf", 1),
            UploadedFile::new("bad.txt", "text/plain", b"nope".to_vec()),
        ]);

        assert_eq!(ws.files().len(), 1);
        assert_eq!(ws.files()[0].name, "good.pdf");
        assert_eq!(ws.error().unwrap().kind, ErrorKind::Unsupported);
        assert_eq!(ws.phase(), ProcessingPhase::Idle);
    }

    #[test]
    fn contexts_are_exclusive() {
        let mut ws = Workspace::new(ToolId::Scan);
        ws.add_files(vec![pdf_file("doc.pdf", 1)]);
        ws.set_edited_text("leftover");

        ws.capture_page(sample_jpeg(40, 30));

        assert!(ws.files().is_empty());
        assert!(ws.previews().is_empty());
        assert_eq!(ws.extracted_text(), None);
        assert_eq!(ws.captures().len(), 1);

        // And back: loading files discards the captures.
        ws.add_files(vec![pdf_file("doc.pdf", 1)]);
        assert!(ws.captures().is_empty());
        assert_eq!(ws.files().len(), 1);
    }

    #[test]
    fn removing_the_last_file_empties_the_workspace_and_clears_errors() {
        let mut ws = Workspace::new(ToolId::Merge);
        ws.add_files(vec![pdf_file("a.pdf", 1), pdf_file("b.pdf", 1)]);

        // Provoke an error so we can see it cleared.
        ws.add_files(vec![UploadedFile::new(
            "bad.txt",
            "text/plain",
            b"nope".to_vec(),
        )]);
        assert!(ws.error().is_some());

        ws.remove_file(0);
        assert_eq!(ws.files().len(), 1);
        assert!(ws.error().is_some());

        ws.remove_file(0);
        assert!(ws.files().is_empty());
        assert!(ws.previews().is_empty());
        assert!(ws.error().is_none());
    }

    #[tokio::test]
    async fn extraction_overwrites_the_single_slot() {
        let mut ws = Workspace::new(ToolId::AiSummarize);
        ws.add_files(vec![pdf_file("doc.pdf", 1)]);

        ws.extract_text(&StubExtractor::ok("first pass"), ExtractionTask::Summarize)
            .await;
        assert_eq!(ws.extracted_text(), Some("first pass"));

        ws.extract_text(&StubExtractor::ok("second pass"), ExtractionTask::Transcribe)
            .await;
        assert_eq!(ws.extracted_text(), Some("second pass"));
    }

    #[tokio::test]
    async fn failed_extraction_sets_an_error_and_keeps_the_slot_empty() {
        let mut ws = Workspace::new(ToolId::AiSummarize);
        ws.add_files(vec![pdf_file("doc.pdf", 1)]);

        let out = ws
            .extract_text(
                &StubExtractor::err(AiError::Service("boom".into())),
                ExtractionTask::Summarize,
            )
            .await;

        assert_eq!(out, None);
        assert_eq!(ws.extracted_text(), None);
        assert_eq!(ws.error().unwrap().kind, ErrorKind::Generic);
    }

    #[tokio::test]
    async fn chat_failure_lands_in_the_transcript_not_the_error_state() {
        let mut ws = Workspace::new(ToolId::AiChat);
        ws.add_files(vec![pdf_file("doc.pdf", 1)]);

        ws.send_chat(&StubExtractor::ok("42 pages."), "How long is it?".into())
            .await;
        ws.send_chat(
            &StubExtractor::err(AiError::Auth),
            "And the author?".into(),
        )
        .await;

        let transcript = ws.transcript();
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[0].role, Role::User);
        assert_eq!(transcript[1].content, "42 pages.");
        assert_eq!(transcript[3].role, Role::Model);
        assert_eq!(transcript[3].content, AiError::Auth.user_message());
        assert!(ws.error().is_none());
    }

    #[tokio::test]
    async fn download_runs_extraction_when_the_tool_needs_it() {
        let mut ws = Workspace::new(ToolId::PdfToWord);
        ws.add_files(vec![pdf_file("doc.pdf", 1)]);

        let artifact = ws
            .trigger_download(&StubExtractor::ok("Transcribed body"))
            .await
            .unwrap();

        assert!(artifact.filename.starts_with("pdf-to-word-"));
        assert_eq!(artifact.mime, "application/msword");
        assert_eq!(ws.extracted_text(), Some("Transcribed body"));
        assert_eq!(ws.phase(), ProcessingPhase::Done);
        assert_eq!(ws.percent(), 100);
    }

    #[tokio::test]
    async fn download_reuses_edited_text_instead_of_re_extracting() {
        let mut ws = Workspace::new(ToolId::PdfToWord);
        ws.add_files(vec![pdf_file("doc.pdf", 1)]);
        ws.set_edited_text("Edited by hand");

        let artifact = ws
            .trigger_download(&StubExtractor::err(AiError::Auth))
            .await
            .unwrap();

        let html = String::from_utf8(artifact.bytes).unwrap();
        assert!(html.contains("Edited by hand"));
    }

    #[tokio::test]
    async fn failed_implicit_extraction_aborts_the_download() {
        let mut ws = Workspace::new(ToolId::PdfToWord);
        ws.add_files(vec![pdf_file("doc.pdf", 1)]);

        let artifact = ws
            .trigger_download(&StubExtractor::err(AiError::Service("down".into())))
            .await;

        assert_eq!(artifact, None);
        assert_eq!(ws.error().unwrap().kind, ErrorKind::Generic);
        assert_eq!(ws.extracted_text(), None);
        assert_eq!(ws.phase(), ProcessingPhase::Idle);
        assert_eq!(ws.percent(), 0);
    }

    #[tokio::test]
    async fn scan_download_skips_removed_captures() {
        let mut ws = Workspace::new(ToolId::Scan);
        ws.capture_page(sample_jpeg(40, 30));
        ws.capture_page(sample_jpeg(50, 30));
        ws.capture_page(sample_jpeg(60, 30));

        ws.remove_capture(1);

        let artifact = ws.trigger_download(&StubExtractor::ok("")).await.unwrap();
        assert_eq!(paperdesk_pdf::page_count(&artifact.bytes).unwrap(), 2);
    }

    #[tokio::test]
    async fn finish_download_returns_to_idle() {
        let mut ws = Workspace::new(ToolId::Merge);
        ws.add_files(vec![pdf_file("a.pdf", 1), pdf_file("b.pdf", 1)]);

        ws.trigger_download(&StubExtractor::ok("")).await.unwrap();
        assert_eq!(ws.phase(), ProcessingPhase::Done);

        ws.finish_download();
        assert_eq!(ws.phase(), ProcessingPhase::Idle);
        assert_eq!(ws.percent(), 0);
    }

    #[tokio::test]
    async fn failed_download_produces_no_artifact() {
        let mut ws = Workspace::new(ToolId::Merge);
        // Nothing loaded.
        let artifact = ws.trigger_download(&StubExtractor::ok("")).await;
        assert_eq!(artifact, None);
        assert_eq!(ws.error().unwrap().kind, ErrorKind::Generic);
        assert_eq!(ws.phase(), ProcessingPhase::Idle);
    }

    #[tokio::test]
    async fn progress_is_monotonic_within_a_run() {
        let mut ws = Workspace::new(ToolId::Merge);
        let seen: Arc<Mutex<Vec<(ProcessingPhase, u8)>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        ws.set_progress_observer(Box::new(move |phase, percent| {
            sink.lock().unwrap().push((phase, percent));
        }));

        ws.add_files(vec![pdf_file("a.pdf", 1), pdf_file("b.pdf", 1)]);
        ws.trigger_download(&StubExtractor::ok("")).await.unwrap();

        let seen = seen.lock().unwrap();
        let mut last_percent = 0;
        for &(phase, percent) in seen.iter() {
            if percent == 0 {
                // Run boundary.
                last_percent = 0;
                continue;
            }
            assert!(percent >= last_percent, "{:?} went backwards", phase);
            last_percent = percent;
        }
        assert!(seen
            .iter()
            .any(|&(phase, pct)| phase == ProcessingPhase::Done && pct == 100));
    }

    #[test]
    fn reset_clears_everything() {
        let mut ws = Workspace::new(ToolId::Merge);
        ws.add_files(vec![pdf_file("a.pdf", 1)]);
        ws.set_edited_text("text");

        ws.reset();

        assert!(ws.files().is_empty());
        assert!(ws.previews().is_empty());
        assert_eq!(ws.extracted_text(), None);
        assert!(ws.transcript().is_empty());
        assert!(ws.error().is_none());
        assert_eq!(ws.phase(), ProcessingPhase::Idle);
    }
}
