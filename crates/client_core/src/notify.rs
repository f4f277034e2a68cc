//! User-facing notifications ("toasts") produced by the session reducer.

use shared::error::{ApiError, ErrorCode};

pub const SUCCESS_TITLE: &str = "Done!";
pub const ERROR_TITLE: &str = "Error";
pub const COPIED_TITLE: &str = "Copied!";

pub const TRANSLATION_SUCCEEDED: &str = "Text translated successfully";

/// Messages shown for a failed request when the service supplied none of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallbacks {
    /// The service answered with an error status or an unusable body.
    pub rejected: &'static str,
    /// No answer arrived, or the file could not be read.
    pub unreachable: &'static str,
}

pub const TRANSLATION_FALLBACKS: Fallbacks = Fallbacks {
    rejected: "Translation failed",
    unreachable: "Could not translate text",
};
pub const EXTRACTION_FALLBACKS: Fallbacks = Fallbacks {
    rejected: "Could not extract text",
    unreachable: "Could not process file",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    /// Set for error notifications only.
    pub code: Option<ErrorCode>,
}

impl Notification {
    pub fn to_api_error(&self) -> Option<ApiError> {
        self.code
            .map(|code| ApiError::new(code, self.message.clone()))
    }
}

/// Ordered queue of notifications awaiting display or dismissal.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    next_id: u64,
    pending: Vec<Notification>,
}

impl Notifications {
    pub fn success(&mut self, title: &str, message: impl Into<String>) -> u64 {
        self.push(Severity::Success, title, message.into(), None)
    }

    pub fn error(&mut self, code: ErrorCode, message: impl Into<String>) -> u64 {
        self.push(Severity::Error, ERROR_TITLE, message.into(), Some(code))
    }

    fn push(
        &mut self,
        severity: Severity,
        title: &str,
        message: String,
        code: Option<ErrorCode>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        match severity {
            Severity::Success => tracing::info!(notification_id = id, "{title} {message}"),
            Severity::Error => tracing::warn!(notification_id = id, "{title}: {message}"),
        }
        self.pending.push(Notification {
            id,
            severity,
            title: title.to_string(),
            message,
            code,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.pending.len();
        self.pending.retain(|notification| notification.id != id);
        before != self.pending.len()
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.pending.last()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

pub fn extraction_succeeded(text_length: u64, file_name: &str) -> String {
    format!("Extracted {text_length} characters from {file_name}")
}
