//! File intake: metadata-only validation first, content read only once a file is accepted.

use std::path::{Path, PathBuf};

use shared::domain::{DocumentKind, MAX_UPLOAD_BYTES};

use crate::error::{CollaboratorError, ValidationError};

const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// A file the user picked or dropped, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: String,
    pub source: FileSource,
}

impl FileCandidate {
    /// Builds a candidate from filesystem metadata; the file body is not touched.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("'{}' is not a regular file", path.display()),
            ));
        }
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("document")
            .to_string();

        Ok(Self {
            name,
            byte_size: metadata.len(),
            mime_type: guess_mime_type(path),
            source: FileSource::Path(path.to_path_buf()),
        })
    }

    pub fn from_bytes(name: impl Into<String>, mime_type: Option<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = mime_type
            .filter(|mime| !mime.trim().is_empty())
            .unwrap_or_else(|| guess_mime_type(Path::new(&name)));
        Self {
            name,
            byte_size: bytes.len() as u64,
            mime_type,
            source: FileSource::Bytes(bytes),
        }
    }
}

pub fn guess_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(UNKNOWN_MIME_TYPE)
        .to_string()
}

/// Type is checked before size, matching the order users see the errors in.
pub fn validate(candidate: &FileCandidate) -> Result<DocumentKind, ValidationError> {
    let kind = DocumentKind::from_mime_type(&candidate.mime_type).ok_or_else(|| {
        ValidationError::UnsupportedFileType {
            mime_type: candidate.mime_type.clone(),
        }
    })?;
    if candidate.byte_size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::file_too_large(candidate.byte_size));
    }
    Ok(kind)
}

pub async fn read_content(candidate: &FileCandidate) -> Result<Vec<u8>, CollaboratorError> {
    let bytes = match &candidate.source {
        FileSource::Bytes(bytes) => bytes.clone(),
        FileSource::Path(path) => tokio::fs::read(path).await.map_err(|err| {
            CollaboratorError::FileRead(format!("{}: {err}", path.display()))
        })?,
    };
    if bytes.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(CollaboratorError::FileRead(format!(
            "{} grew past the upload limit after it was selected",
            candidate.name
        )));
    }
    Ok(bytes)
}

pub fn size_label(byte_size: u64) -> String {
    format!("{:.2} KB", byte_size as f64 / 1024.0)
}
