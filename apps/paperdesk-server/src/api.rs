//! API handlers for the Paperdesk server
//!
//! Provides REST endpoints for:
//! - Tool catalog listing
//! - File processing
//! - Document chat

use axum::{extract::State, Json};
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ServerError;
use crate::AppState;

use paperdesk_core::tools::{tool_copy, ToolCategory};
use paperdesk_core::workspace::Role;
use paperdesk_core::{ToolId, UploadedFile, Workspace};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "paperdesk-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Tool list response
#[derive(Serialize)]
pub struct ToolListResponse {
    pub success: bool,
    pub tools: Vec<ToolInfo>,
    pub count: usize,
}

/// Tool metadata
#[derive(Serialize)]
pub struct ToolInfo {
    pub id: String,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
    pub multi_file: bool,
    pub requires_ai: bool,
    pub accept: &'static str,
}

/// Handler: GET /api/tools
pub async fn handle_list_tools() -> Json<ToolListResponse> {
    let tools: Vec<ToolInfo> = ToolId::all()
        .iter()
        .map(|&id| {
            let caps = id.capabilities();
            let copy = tool_copy(id);
            ToolInfo {
                id: id.as_str().to_string(),
                title: copy.title,
                description: copy.description,
                category: id.category(),
                multi_file: caps.multi_file,
                requires_ai: caps.requires_ai,
                accept: id.accept_hint(),
            }
        })
        .collect();

    let count = tools.len();

    Json(ToolListResponse {
        success: true,
        tools,
        count,
    })
}

/// One uploaded file in a request body
#[derive(Deserialize)]
pub struct FilePayload {
    pub name: String,

    /// MIME type as declared by the browser; may be empty
    #[serde(default)]
    pub media_type: String,

    /// Base64-encoded file content
    pub data: String,
}

impl FilePayload {
    fn decode(self) -> Result<UploadedFile, ServerError> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|_| {
                ServerError::InvalidRequest(format!("File '{}' is not valid base64", self.name))
            })?;
        Ok(UploadedFile::new(self.name, self.media_type, bytes))
    }
}

/// Process request body
#[derive(Deserialize)]
pub struct ProcessApiRequest {
    /// Tool id (e.g. "merge", "pdf-to-word")
    pub tool: String,

    /// Uploaded files, in workspace order
    #[serde(default)]
    pub files: Vec<FilePayload>,

    /// Captured stills for the scan tool, base64 JPEG
    #[serde(default)]
    pub captures: Vec<String>,

    /// Pre-extracted or user-edited text; skips the AI round trip
    pub extracted_text: Option<String>,
}

/// Process response
#[derive(Serialize)]
pub struct ProcessApiResponse {
    pub success: bool,
    /// Base64-encoded artifact
    pub data: Option<String>,
    /// MIME type of the artifact
    pub mime_type: Option<String>,
    /// Suggested download filename
    pub filename: Option<String>,
    /// Text produced by the AI adapter, when the tool ran it
    pub extracted_text: Option<String>,
    /// Error message if failed
    pub error: Option<String>,
}

/// Handler: POST /api/process
pub async fn handle_process(
    State(state): State<AppState>,
    Json(req): Json<ProcessApiRequest>,
) -> Result<Json<ProcessApiResponse>, ServerError> {
    info!(
        "Process request: tool={}, files={}, captures={}",
        req.tool,
        req.files.len(),
        req.captures.len()
    );

    let tool: ToolId = req
        .tool
        .parse()
        .map_err(|_| ServerError::UnknownTool(req.tool.clone()))?;

    let mut workspace = Workspace::new(tool);

    if !req.files.is_empty() {
        let batch: Vec<UploadedFile> = req
            .files
            .into_iter()
            .map(FilePayload::decode)
            .collect::<Result<_, _>>()?;
        workspace.add_files(batch);
        if let Some(error) = workspace.error() {
            return Err(ServerError::Workspace(error.clone()));
        }
    }

    for (i, capture) in req.captures.iter().enumerate() {
        let jpeg = base64::engine::general_purpose::STANDARD
            .decode(capture)
            .map_err(|_| {
                ServerError::InvalidRequest(format!("Capture {} is not valid base64", i))
            })?;
        workspace.capture_page(jpeg);
    }

    if let Some(text) = req.extracted_text {
        workspace.set_edited_text(text);
    }

    debug!("workspace loaded, composing artifact");

    let artifact = workspace.trigger_download(state.ai.as_ref()).await;
    match artifact {
        Some(artifact) => Ok(Json(ProcessApiResponse {
            success: true,
            data: Some(base64::engine::general_purpose::STANDARD.encode(&artifact.bytes)),
            mime_type: Some(artifact.mime.to_string()),
            filename: Some(artifact.filename),
            extracted_text: workspace.extracted_text().map(String::from),
            error: None,
        })),
        None => {
            let error = workspace
                .error()
                .cloned()
                .unwrap_or_else(|| paperdesk_core::ErrorState::generic("Processing failed."));
            Err(ServerError::Workspace(error))
        }
    }
}

/// Chat request body
#[derive(Deserialize)]
pub struct ChatApiRequest {
    /// The document the conversation is about
    pub file: FilePayload,

    /// The user's message
    pub message: String,
}

/// Chat response
#[derive(Serialize)]
pub struct ChatApiResponse {
    pub success: bool,
    /// The model's reply; service failures surface here as an apology
    pub reply: String,
    pub transcript: Vec<ChatTurn>,
}

/// One transcript entry
#[derive(Serialize)]
pub struct ChatTurn {
    pub role: &'static str,
    pub content: String,
}

/// Handler: POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatApiRequest>,
) -> Result<Json<ChatApiResponse>, ServerError> {
    info!("Chat request: file={}", req.file.name);

    let mut workspace = Workspace::new(ToolId::AiChat);
    workspace.add_files(vec![req.file.decode()?]);
    if let Some(error) = workspace.error() {
        return Err(ServerError::Workspace(error.clone()));
    }

    workspace.send_chat(state.ai.as_ref(), req.message).await;

    let transcript: Vec<ChatTurn> = workspace
        .transcript()
        .iter()
        .map(|m| ChatTurn {
            role: match m.role {
                Role::User => "user",
                Role::Model => "model",
            },
            content: m.content.clone(),
        })
        .collect();

    let reply = transcript
        .last()
        .map(|t| t.content.clone())
        .ok_or_else(|| ServerError::Internal("Chat produced no reply".into()))?;

    Ok(Json(ChatApiResponse {
        success: true,
        reply,
        transcript,
    }))
}
