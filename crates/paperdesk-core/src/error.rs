//! The single error surface shown in the workspace UI.
//!
//! Every component converts its own failures into one `ErrorState`;
//! at most one is active per workspace and clearing it is an explicit
//! action.

use serde::Serialize;
use std::fmt;

/// Broad classification of what went wrong, used by the UI to pick
/// copy and iconography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Wrong file type
    Unsupported,
    /// Processing threw on a file that should have worked
    Corrupted,
    /// Password-protected input
    Password,
    /// Size limit, service failure, empty input on export
    Generic,
}

/// One user-displayable error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorState {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorState {
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Unsupported,
            message: message.into(),
        }
    }

    pub fn corrupted(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Corrupted,
            message: message.into(),
        }
    }

    pub fn password(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Password,
            message: message.into(),
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Generic,
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ErrorState {}
