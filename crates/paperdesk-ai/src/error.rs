use thiserror::Error;

/// Failures of the extraction adapter.
///
/// Authentication problems are distinguished from everything else so
/// the workspace can tell a misconfigured key apart from a flaky
/// service. Nothing else leaks past the adapter boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("AI service authentication failed (missing or rejected API key)")]
    Auth,

    #[error("AI service request failed: {0}")]
    Service(String),
}

impl AiError {
    /// Message shown in place of extracted text when a request fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            AiError::Auth => {
                "The AI service is not configured. Please set a valid API key and try again."
            }
            AiError::Service(_) => {
                "An error occurred while the AI was reading your document. \
                 Please ensure the file is valid and not password protected."
            }
        }
    }
}
