//! Generative-AI extraction adapter.
//!
//! One logical operation: document bytes plus a task instruction and a
//! persona go out as a single generateContent request; plain text (or
//! a typed failure) comes back. The adapter never panics and never
//! lets a raw transport error cross its boundary. Latency is whatever
//! the service takes; the caller is responsible for not issuing a
//! second request while one is outstanding.

pub mod error;
pub mod task;
mod wire;

pub use error::AiError;
pub use task::ExtractionTask;

use base64::Engine;
use std::time::Duration;
use tracing::{debug, warn};
use wire::{
    GenerateRequest, GenerationConfig, InlineData, Part, SystemInstruction, TextPart, TurnContent,
};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Low temperature keeps transcription faithful to the source.
const TEMPERATURE: f32 = 0.1;

/// Configuration for the extraction adapter.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key; `None` means every request fails fast with `AiError::Auth`.
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl AiConfig {
    /// Read the key from `PAPERDESK_AI_KEY`, defaulting everything else.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("PAPERDESK_AI_KEY").ok().filter(|k| !k.is_empty()),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Client for the hosted generative-text service.
pub struct DocumentAi {
    http: reqwest::Client,
    config: AiConfig,
}

impl DocumentAi {
    pub fn new(config: AiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(20))
            .build()
            .map_err(|e| AiError::Service(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    /// Whether a key is configured at all. Lets the UI disable AI
    /// actions instead of failing on click.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Send one document with a task preset and return the produced
    /// text.
    pub async fn process_document(
        &self,
        file_name: &str,
        bytes: &[u8],
        declared_mime: Option<&str>,
        task: &ExtractionTask,
    ) -> Result<String, AiError> {
        let key = self.config.api_key.as_deref().ok_or(AiError::Auth)?;

        let mime = resolve_mime(declared_mime, bytes);
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);

        debug!(
            file = file_name,
            mime,
            payload_len = payload.len(),
            "sending extraction request"
        );

        let body = GenerateRequest {
            contents: vec![TurnContent {
                role: "user".to_string(),
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime.to_string(),
                            data: payload,
                        },
                    },
                    Part::Text { text: task.prompt() },
                ],
            }],
            system_instruction: SystemInstruction {
                parts: vec![TextPart {
                    text: task.persona().to_string(),
                }],
            },
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Service(format!("request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            warn!(file = file_name, %status, "AI service rejected the API key");
            return Err(AiError::Auth);
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(file = file_name, %status, "AI service returned an error");
            return Err(AiError::Service(format!("{}: {}", status, detail)));
        }

        let parsed: wire::GenerateResponse = response
            .json()
            .await
            .map_err(|e| AiError::Service(format!("unreadable response: {}", e)))?;

        Ok(parsed
            .first_text()
            .unwrap_or("No output could be generated.")
            .to_string())
    }
}

/// Declared type wins; otherwise sniff magic numbers; PDFs are by far
/// the most common upload, so that is the final fallback.
fn resolve_mime<'a>(declared: Option<&'a str>, bytes: &[u8]) -> &'a str {
    match declared {
        Some(mime) if !mime.is_empty() => mime,
        _ => sniff_mime(bytes),
    }
}

fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"%PDF-") {
        return "application/pdf";
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return "image/jpeg";
    }
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        return "image/png";
    }
    // DOCX is a ZIP container
    if bytes.starts_with(b"PK\x03\x04") {
        return "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
    }
    "application/pdf"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sniffs_common_formats() {
        assert_eq!(sniff_mime(b"%PDF-1.7 rest"), "application/pdf");
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_mime(&[0x89, b'P', b'N', b'G', 0x0D]), "image/png");
        assert_eq!(
            sniff_mime(b"PK\x03\x04rest"),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(sniff_mime(b"mystery"), "application/pdf");
    }

    #[test]
    fn declared_mime_wins_over_sniffing() {
        assert_eq!(
            resolve_mime(Some("image/png"), b"%PDF-1.7"),
            "image/png"
        );
        assert_eq!(resolve_mime(Some(""), b"%PDF-1.7"), "application/pdf");
    }

    #[tokio::test]
    async fn missing_key_fails_fast_without_network() {
        let ai = DocumentAi::new(AiConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            // Unroutable endpoint: a network attempt would fail loudly
            // with Service, not Auth.
            endpoint: "http://127.0.0.1:1".to_string(),
        })
        .unwrap();

        let result = ai
            .process_document("doc.pdf", b"%PDF-1.7", None, &ExtractionTask::Summarize)
            .await;
        assert_eq!(result, Err(AiError::Auth));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_service_error() {
        let ai = DocumentAi::new(AiConfig {
            api_key: Some("test-key".into()),
            model: DEFAULT_MODEL.to_string(),
            endpoint: "http://127.0.0.1:1".to_string(),
        })
        .unwrap();

        let result = ai
            .process_document("doc.pdf", b"%PDF-1.7", None, &ExtractionTask::Summarize)
            .await;
        assert!(matches!(result, Err(AiError::Service(_))));
    }
}
