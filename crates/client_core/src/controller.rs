//! Session state and the reducer that drives it.
//!
//! Every user interaction and every collaborator completion is an [`Action`]. [`reduce`]
//! applies it to the [`SessionState`] and returns the [`Effect`]s the caller must run;
//! completions of those effects come back in as further actions. The reducer itself never
//! performs I/O.

use serde::Deserialize;
use shared::{
    domain::{DocumentKind, Section, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE},
    error::ErrorCode,
    protocol::{ExtractResponse, TranslateRequest, TranslateResponse},
};
use tracing::{debug, info, warn};

use crate::{
    error::{CollaboratorError, ValidationError},
    intake::{self, FileCandidate},
    notify::{
        self, Notifications, COPIED_TITLE, EXTRACTION_FALLBACKS, SUCCESS_TITLE,
        TRANSLATION_FALLBACKS, TRANSLATION_SUCCEEDED,
    },
};

/// Identifies one issued request; strictly increasing within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(pub u64);

/// What to do with a completion that is not the most recently issued one for its flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Apply every completion in arrival order.
    #[default]
    LastWriteWins,
    /// Drop completions superseded by a newer request of the same flow.
    DiscardStale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Upload,
    PasteText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub byte_size: u64,
    pub kind: DocumentKind,
}

#[derive(Debug, Clone)]
pub enum Action {
    Navigate(Section),
    SetInputMode(InputMode),
    EditInputText(String),
    SetSourceLanguage(String),
    SetTargetLanguage(String),
    SelectFile(FileCandidate),
    ClearFile,
    RequestTranslation,
    ExtractionCompleted {
        token: RequestToken,
        file_name: String,
        outcome: Result<ExtractResponse, CollaboratorError>,
    },
    TranslationCompleted {
        token: RequestToken,
        outcome: Result<TranslateResponse, CollaboratorError>,
    },
    CopyResult,
    DismissNotification(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Extract {
        token: RequestToken,
        file: FileCandidate,
        kind: DocumentKind,
    },
    Translate {
        token: RequestToken,
        request: TranslateRequest,
    },
    CopyToClipboard(String),
}

#[derive(Debug, Clone)]
pub struct SessionState {
    section: Section,
    input_mode: InputMode,
    input_text: String,
    source_language: String,
    target_language: String,
    translated_text: String,
    selected_file: Option<SelectedFile>,
    is_extracting: bool,
    is_translating: bool,
    next_token: u64,
    latest_extraction: Option<RequestToken>,
    latest_translation: Option<RequestToken>,
    stale_policy: StaleResponsePolicy,
    notifications: Notifications,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(StaleResponsePolicy::default())
    }
}

impl SessionState {
    pub fn new(stale_policy: StaleResponsePolicy) -> Self {
        Self {
            section: Section::Home,
            input_mode: InputMode::default(),
            input_text: String::new(),
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            translated_text: String::new(),
            selected_file: None,
            is_extracting: false,
            is_translating: false,
            next_token: 0,
            latest_extraction: None,
            latest_translation: None,
            stale_policy,
            notifications: Notifications::default(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn is_extracting(&self) -> bool {
        self.is_extracting
    }

    pub fn is_translating(&self) -> bool {
        self.is_translating
    }

    pub fn stale_policy(&self) -> StaleResponsePolicy {
        self.stale_policy
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    fn issue_token(&mut self) -> RequestToken {
        self.next_token += 1;
        RequestToken(self.next_token)
    }

    fn is_stale(&self, token: RequestToken, latest: Option<RequestToken>) -> bool {
        self.stale_policy == StaleResponsePolicy::DiscardStale && latest != Some(token)
    }
}

pub fn reduce(state: &mut SessionState, action: Action) -> Vec<Effect> {
    match action {
        Action::Navigate(section) => {
            state.section = section;
            Vec::new()
        }
        Action::SetInputMode(mode) => {
            state.input_mode = mode;
            Vec::new()
        }
        Action::EditInputText(text) => {
            state.input_text = text;
            Vec::new()
        }
        Action::SetSourceLanguage(language) => {
            state.source_language = language;
            Vec::new()
        }
        Action::SetTargetLanguage(language) => {
            state.target_language = language;
            Vec::new()
        }
        Action::SelectFile(file) => select_file(state, file),
        Action::ClearFile => {
            state.selected_file = None;
            state.input_text.clear();
            if state.stale_policy == StaleResponsePolicy::DiscardStale && state.is_extracting {
                // The pending extraction belongs to the discarded file.
                debug!("abandoning pending extraction");
                state.latest_extraction = None;
                state.is_extracting = false;
            }
            Vec::new()
        }
        Action::RequestTranslation => request_translation(state),
        Action::ExtractionCompleted {
            token,
            file_name,
            outcome,
        } => {
            complete_extraction(state, token, &file_name, outcome);
            Vec::new()
        }
        Action::TranslationCompleted { token, outcome } => {
            complete_translation(state, token, outcome);
            Vec::new()
        }
        Action::CopyResult => {
            if state.translated_text.is_empty() {
                return Vec::new();
            }
            state.notifications.success(COPIED_TITLE, "");
            vec![Effect::CopyToClipboard(state.translated_text.clone())]
        }
        Action::DismissNotification(id) => {
            state.notifications.dismiss(id);
            Vec::new()
        }
    }
}

fn select_file(state: &mut SessionState, file: FileCandidate) -> Vec<Effect> {
    let kind = match intake::validate(&file) {
        Ok(kind) => kind,
        Err(err) => {
            warn!(
                file_name = %file.name,
                byte_size = file.byte_size,
                mime_type = %file.mime_type,
                "rejected file: {err}"
            );
            state
                .notifications
                .error(ErrorCode::Validation, err.user_message());
            return Vec::new();
        }
    };

    let token = state.issue_token();
    state.selected_file = Some(SelectedFile {
        name: file.name.clone(),
        byte_size: file.byte_size,
        kind,
    });
    state.input_text.clear();
    state.is_extracting = true;
    state.latest_extraction = Some(token);
    info!(
        token = token.0,
        file_name = %file.name,
        byte_size = file.byte_size,
        mime_type = kind.mime_type(),
        "requesting text extraction"
    );
    vec![Effect::Extract { token, file, kind }]
}

fn request_translation(state: &mut SessionState) -> Vec<Effect> {
    if state.input_text.trim().is_empty() {
        state.notifications.error(
            ErrorCode::Validation,
            ValidationError::EmptyText.user_message(),
        );
        return Vec::new();
    }

    let token = state.issue_token();
    state.is_translating = true;
    state.translated_text.clear();
    state.latest_translation = Some(token);
    info!(
        token = token.0,
        chars = state.input_text.chars().count(),
        source_lang = %state.source_language,
        target_lang = %state.target_language,
        "requesting translation"
    );
    vec![Effect::Translate {
        token,
        request: TranslateRequest {
            text: state.input_text.clone(),
            source_lang: state.source_language.clone(),
            target_lang: state.target_language.clone(),
        },
    }]
}

fn complete_extraction(
    state: &mut SessionState,
    token: RequestToken,
    file_name: &str,
    outcome: Result<ExtractResponse, CollaboratorError>,
) {
    if state.is_stale(token, state.latest_extraction) {
        debug!(token = token.0, file_name, "dropping superseded extraction result");
        return;
    }

    state.is_extracting = false;
    match outcome {
        Ok(response) => {
            let text_length = response.reported_length();
            info!(token = token.0, file_name, text_length, "extraction succeeded");
            state.input_text = response.extracted_text;
            state
                .notifications
                .success(SUCCESS_TITLE, notify::extraction_succeeded(text_length, file_name));
        }
        Err(err) => {
            warn!(token = token.0, file_name, "extraction failed: {err}");
            state.selected_file = None;
            state
                .notifications
                .error(err.code(), err.user_message(EXTRACTION_FALLBACKS));
        }
    }
}

fn complete_translation(
    state: &mut SessionState,
    token: RequestToken,
    outcome: Result<TranslateResponse, CollaboratorError>,
) {
    if state.is_stale(token, state.latest_translation) {
        debug!(token = token.0, "dropping superseded translation result");
        return;
    }

    state.is_translating = false;
    match outcome {
        Ok(response) => {
            info!(
                token = token.0,
                chars = response.translated_text.chars().count(),
                "translation succeeded"
            );
            state.translated_text = response.translated_text;
            state
                .notifications
                .success(SUCCESS_TITLE, TRANSLATION_SUCCEEDED);
        }
        Err(err) => {
            warn!(token = token.0, "translation failed: {err}");
            state.translated_text.clear();
            state
                .notifications
                .error(err.code(), err.user_message(TRANSLATION_FALLBACKS));
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
