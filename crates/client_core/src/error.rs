//! Error types for local validation and collaborator calls.

use shared::{domain::MAX_UPLOAD_BYTES, error::ErrorCode};
use thiserror::Error;

use crate::notify::Fallbacks;

/// Rejections raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input text is empty")]
    EmptyText,
    #[error("unsupported file type '{mime_type}'")]
    UnsupportedFileType { mime_type: String },
    #[error("file is {byte_size} bytes, limit is {limit}")]
    FileTooLarge { byte_size: u64, limit: u64 },
}

impl ValidationError {
    pub fn file_too_large(byte_size: u64) -> Self {
        Self::FileTooLarge {
            byte_size,
            limit: MAX_UPLOAD_BYTES,
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyText => "Enter some text to translate",
            ValidationError::UnsupportedFileType { .. } => {
                "Only PDF, DOCX and TXT files are supported"
            }
            ValidationError::FileTooLarge { .. } => "File size must not exceed 50MB",
        }
    }
}

/// Failures of a translation or extraction round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("service responded with status {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String> },
    #[error("request could not be delivered: {0}")]
    Transport(String),
    #[error("unexpected response payload: {0}")]
    UnexpectedResponse(String),
    #[error("failed to read file: {0}")]
    FileRead(String),
}

impl CollaboratorError {
    /// Text shown to the user: the service's own message when it sent one, else the
    /// fallback matching how the request failed.
    pub fn user_message(&self, fallbacks: Fallbacks) -> String {
        match self {
            CollaboratorError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            CollaboratorError::Server { .. } | CollaboratorError::UnexpectedResponse(_) => {
                fallbacks.rejected.to_string()
            }
            CollaboratorError::Transport(_) | CollaboratorError::FileRead(_) => {
                fallbacks.unreachable.to_string()
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CollaboratorError::Server { status, .. } => ErrorCode::from_status(*status),
            CollaboratorError::Transport(_) => ErrorCode::Upstream,
            CollaboratorError::UnexpectedResponse(_) | CollaboratorError::FileRead(_) => {
                ErrorCode::Internal
            }
        }
    }
}

impl From<reqwest::Error> for CollaboratorError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Self::UnexpectedResponse(value.to_string())
        } else {
            Self::Transport(value.to_string())
        }
    }
}
