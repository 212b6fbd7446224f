//! Workspace orchestration for the Paperdesk tool suite.
//!
//! Ties the PDF operations and the AI extraction adapter together
//! behind a single state machine:
//! - `tools`: the tool catalog and per-tool capabilities
//! - `intake`: upload validation
//! - `preview`: thumbnail generation
//! - `capture`: camera capture sessions for the scan tool
//! - `export`: artifact composition and naming
//! - `workspace`: the per-tool state machine
//! - `appearance`: theme preference handling

pub mod appearance;
pub mod capture;
pub mod error;
pub mod export;
pub mod intake;
pub mod preview;
pub mod tools;
pub mod workspace;

pub use capture::{CaptureSession, CaptureStream, CapturedPage, FrameSource};
pub use error::{ErrorKind, ErrorState};
pub use export::{compose, ExportArtifact, ExportInputs};
pub use intake::{validate_batch, UploadedFile, MAX_FILE_BYTES};
pub use preview::{build_previews, PageRasterizer, PreviewPage, PREVIEW_PAGE_CAP};
pub use tools::{ExportFormat, ToolCategory, ToolDescriptor, ToolId};
pub use workspace::{
    ChatMessage, ProcessingPhase, Role, TextExtractor, Workspace, DOWNLOAD_RESET,
};
