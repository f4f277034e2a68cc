//! JSON bodies exchanged with the translation and extraction services.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::domain::DocumentKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_length: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractRequest {
    /// Standard base64 of the raw file bytes, without any `data:` URI prefix.
    pub file_content: String,
    pub file_type: String,
}

impl ExtractRequest {
    pub fn from_bytes(bytes: &[u8], kind: DocumentKind) -> Self {
        Self {
            file_content: STANDARD.encode(bytes),
            file_type: kind.mime_type().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub extracted_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

impl ExtractResponse {
    /// Character count as reported by the service, falling back to counting locally.
    pub fn reported_length(&self) -> u64 {
        self.text_length
            .unwrap_or_else(|| self.extracted_text.chars().count() as u64)
    }
}

/// Body of a non-2xx response from either service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
