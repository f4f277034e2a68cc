use serde::{Deserialize, Serialize};

/// Upper bound for an uploaded document, inclusive.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Source-language sentinel asking the translation service to detect the language itself.
pub const AUTO_DETECT: &str = "Auto-detect";

pub const SOURCE_LANGUAGES: [&str; 4] = [AUTO_DETECT, "Russian", "English", "Chinese"];
pub const TARGET_LANGUAGES: [&str; 4] = ["English", "Russian", "Chinese", "Spanish"];

pub const DEFAULT_SOURCE_LANGUAGE: &str = AUTO_DETECT;
pub const DEFAULT_TARGET_LANGUAGE: &str = "English";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Portfolio,
    Blog,
    Faq,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Portfolio,
        Section::Blog,
        Section::Faq,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Portfolio => "Portfolio",
            Section::Blog => "Blog",
            Section::Faq => "FAQ",
            Section::Contact => "Contact",
        }
    }
}

/// Document formats the extraction service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PlainText,
    Pdf,
    WordDocument,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::PlainText,
        DocumentKind::Pdf,
        DocumentKind::WordDocument,
    ];

    pub fn mime_type(self) -> &'static str {
        match self {
            DocumentKind::PlainText => "text/plain",
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::WordDocument => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::PlainText => "txt",
            DocumentKind::Pdf => "pdf",
            DocumentKind::WordDocument => "docx",
        }
    }

    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        let mime_type = mime_type.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.mime_type().eq_ignore_ascii_case(mime_type))
    }
}
