use super::*;
use crate::{intake::FileSource, notify::Severity};
use shared::domain::MAX_UPLOAD_BYTES;

fn text_file(name: &str, bytes: &[u8]) -> FileCandidate {
    FileCandidate::from_bytes(name, Some("text/plain".into()), bytes.to_vec())
}

fn extract_token(effects: &[Effect]) -> RequestToken {
    match effects {
        [Effect::Extract { token, .. }] => *token,
        other => panic!("expected a single extract effect, got {other:?}"),
    }
}

fn translate_token(effects: &[Effect]) -> RequestToken {
    match effects {
        [Effect::Translate { token, .. }] => *token,
        other => panic!("expected a single translate effect, got {other:?}"),
    }
}

fn latest_message(state: &SessionState) -> (Severity, String) {
    let latest = state.notifications().latest().expect("notification");
    (latest.severity, latest.message.clone())
}

#[test]
fn starts_on_home_with_default_languages() {
    let state = SessionState::default();
    assert_eq!(state.section(), Section::Home);
    assert_eq!(state.source_language(), "Auto-detect");
    assert_eq!(state.target_language(), "English");
    assert!(!state.is_extracting());
    assert!(!state.is_translating());
    assert!(state.notifications().is_empty());
}

#[test]
fn navigation_keeps_translation_and_file_state() {
    let mut state = SessionState::default();
    reduce(&mut state, Action::EditInputText("Hello".into()));
    let effects = reduce(&mut state, Action::SelectFile(text_file("a.txt", b"abc")));
    assert_eq!(effects.len(), 1);

    for section in Section::ALL {
        assert!(reduce(&mut state, Action::Navigate(section)).is_empty());
        assert_eq!(state.section(), section);
    }
    assert!(state.is_extracting());
    assert_eq!(state.selected_file().map(|f| f.name.as_str()), Some("a.txt"));
}

#[test]
fn oversized_file_is_rejected_without_request() {
    let mut state = SessionState::default();
    reduce(&mut state, Action::EditInputText("keep me".into()));
    let huge = FileCandidate {
        name: "huge.pdf".into(),
        byte_size: MAX_UPLOAD_BYTES + 1,
        mime_type: "application/pdf".into(),
        source: FileSource::Path("huge.pdf".into()),
    };

    let effects = reduce(&mut state, Action::SelectFile(huge));

    assert!(effects.is_empty());
    assert!(state.selected_file().is_none());
    assert!(!state.is_extracting());
    assert_eq!(state.input_text(), "keep me");
    assert_eq!(
        latest_message(&state),
        (Severity::Error, "File size must not exceed 50MB".to_string())
    );
}

#[test]
fn disallowed_types_are_rejected_without_request() {
    for mime_type in ["image/png", "application/msword", "text/html", ""] {
        let mut state = SessionState::default();
        let file = FileCandidate {
            name: "file".into(),
            byte_size: 10,
            mime_type: mime_type.into(),
            source: FileSource::Bytes(vec![0; 10]),
        };
        assert!(reduce(&mut state, Action::SelectFile(file)).is_empty());
        assert!(state.selected_file().is_none());
        assert_eq!(
            latest_message(&state).1,
            "Only PDF, DOCX and TXT files are supported"
        );
    }
}

#[test]
fn rejection_leaves_previous_selection_untouched() {
    let mut state = SessionState::default();
    let token = extract_token(&reduce(&mut state, Action::SelectFile(text_file("a.txt", b"hi"))));
    reduce(
        &mut state,
        Action::ExtractionCompleted {
            token,
            file_name: "a.txt".into(),
            outcome: Ok(ExtractResponse {
                extracted_text: "hi".into(),
                text_length: Some(2),
                file_type: None,
            }),
        },
    );

    let effects = reduce(
        &mut state,
        Action::SelectFile(FileCandidate::from_bytes("b.png", None, vec![1, 2, 3])),
    );

    assert!(effects.is_empty());
    assert_eq!(state.selected_file().map(|f| f.name.as_str()), Some("a.txt"));
    assert_eq!(state.input_text(), "hi");
}

#[test]
fn accepted_file_clears_input_and_requests_extraction() {
    let mut state = SessionState::default();
    reduce(&mut state, Action::EditInputText("old text".into()));

    let effects = reduce(
        &mut state,
        Action::SelectFile(text_file("notes.txt", b"0123456789")),
    );

    match effects.as_slice() {
        [Effect::Extract { file, kind, .. }] => {
            assert_eq!(*kind, DocumentKind::PlainText);
            assert_eq!(file.name, "notes.txt");
        }
        other => panic!("unexpected effects: {other:?}"),
    }
    assert_eq!(state.input_text(), "");
    assert!(state.is_extracting());
    assert_eq!(
        state.selected_file(),
        Some(&SelectedFile {
            name: "notes.txt".into(),
            byte_size: 10,
            kind: DocumentKind::PlainText,
        })
    );
}

#[test]
fn extraction_success_fills_input_and_reports_length() {
    let mut state = SessionState::default();
    let token = extract_token(&reduce(
        &mut state,
        Action::SelectFile(text_file("notes.txt", b"0123456789")),
    ));

    reduce(
        &mut state,
        Action::ExtractionCompleted {
            token,
            file_name: "notes.txt".into(),
            outcome: Ok(ExtractResponse {
                extracted_text: "hello".into(),
                text_length: Some(5),
                file_type: Some("text/plain".into()),
            }),
        },
    );

    assert_eq!(state.input_text(), "hello");
    assert!(!state.is_extracting());
    let (severity, message) = latest_message(&state);
    assert_eq!(severity, Severity::Success);
    assert!(message.contains('5'), "{message}");
    assert!(message.contains("notes.txt"), "{message}");
}

#[test]
fn extraction_failure_clears_selection_and_surfaces_server_message() {
    let mut state = SessionState::default();
    let token = extract_token(&reduce(
        &mut state,
        Action::SelectFile(text_file("empty.txt", b" ")),
    ));

    reduce(
        &mut state,
        Action::ExtractionCompleted {
            token,
            file_name: "empty.txt".into(),
            outcome: Err(CollaboratorError::Server {
                status: 400,
                message: Some("No text found in document".into()),
            }),
        },
    );

    assert!(state.selected_file().is_none());
    assert!(!state.is_extracting());
    assert_eq!(
        latest_message(&state),
        (Severity::Error, "No text found in document".to_string())
    );
}

#[test]
fn extraction_transport_failure_uses_fallback() {
    let mut state = SessionState::default();
    let token = extract_token(&reduce(&mut state, Action::SelectFile(text_file("a.txt", b"a"))));
    reduce(
        &mut state,
        Action::ExtractionCompleted {
            token,
            file_name: "a.txt".into(),
            outcome: Err(CollaboratorError::Transport("connection reset".into())),
        },
    );
    assert_eq!(latest_message(&state).1, "Could not process file");
}

#[test]
fn whitespace_only_text_is_rejected_without_request() {
    for text in ["", " ", "\n\t  \r\n"] {
        let mut state = SessionState::default();
        reduce(&mut state, Action::EditInputText(text.into()));
        assert!(reduce(&mut state, Action::RequestTranslation).is_empty());
        assert!(!state.is_translating());
        assert_eq!(
            latest_message(&state),
            (Severity::Error, "Enter some text to translate".to_string())
        );
    }
}

#[test]
fn translation_request_carries_text_and_languages_verbatim() {
    let mut state = SessionState::default();
    reduce(&mut state, Action::EditInputText("  Hello  ".into()));
    reduce(&mut state, Action::SetSourceLanguage("English".into()));
    reduce(&mut state, Action::SetTargetLanguage("Spanish".into()));

    let effects = reduce(&mut state, Action::RequestTranslation);

    match effects.as_slice() {
        [Effect::Translate { request, .. }] => assert_eq!(
            request,
            &TranslateRequest {
                text: "  Hello  ".into(),
                source_lang: "English".into(),
                target_lang: "Spanish".into(),
            }
        ),
        other => panic!("unexpected effects: {other:?}"),
    }
    assert!(state.is_translating());
}

#[test]
fn translation_success_is_displayed_exactly() {
    let mut state = SessionState::default();
    reduce(&mut state, Action::EditInputText("Hello".into()));
    let token = translate_token(&reduce(&mut state, Action::RequestTranslation));

    reduce(
        &mut state,
        Action::TranslationCompleted {
            token,
            outcome: Ok(TranslateResponse {
                translated_text: "Bonjour".into(),
                source_lang: None,
                target_lang: None,
                original_length: None,
                translated_length: None,
            }),
        },
    );

    assert_eq!(state.translated_text(), "Bonjour");
    assert!(!state.is_translating());
    assert_eq!(
        latest_message(&state),
        (Severity::Success, "Text translated successfully".to_string())
    );
}

#[test]
fn translation_failure_keeps_result_empty_and_shows_server_error() {
    let mut state = SessionState::default();
    reduce(&mut state, Action::EditInputText("Hello".into()));
    let token = translate_token(&reduce(&mut state, Action::RequestTranslation));

    reduce(
        &mut state,
        Action::TranslationCompleted {
            token,
            outcome: Err(CollaboratorError::Server {
                status: 500,
                message: Some("rate limited".into()),
            }),
        },
    );

    assert_eq!(state.translated_text(), "");
    assert!(!state.is_translating());
    assert_eq!(latest_message(&state).1, "rate limited");
}

#[test]
fn new_translation_clears_previous_result() {
    let mut state = SessionState::default();
    reduce(&mut state, Action::EditInputText("Hello".into()));
    let token = translate_token(&reduce(&mut state, Action::RequestTranslation));
    reduce(
        &mut state,
        Action::TranslationCompleted {
            token,
            outcome: Ok(TranslateResponse {
                translated_text: "Hola".into(),
                source_lang: None,
                target_lang: None,
                original_length: None,
                translated_length: None,
            }),
        },
    );

    reduce(&mut state, Action::RequestTranslation);
    assert_eq!(state.translated_text(), "");
    assert!(state.is_translating());
}

#[test]
fn new_selection_replaces_pending_file_metadata() {
    let mut state = SessionState::default();
    let first = extract_token(&reduce(&mut state, Action::SelectFile(text_file("first.txt", b"1"))));
    let second = extract_token(&reduce(
        &mut state,
        Action::SelectFile(text_file("second.txt", b"22")),
    ));

    assert!(second > first);
    assert_eq!(
        state.selected_file().map(|f| f.name.as_str()),
        Some("second.txt")
    );
    assert!(state.is_extracting());
}

#[test]
fn last_write_wins_applies_stale_completion() {
    let mut state = SessionState::new(StaleResponsePolicy::LastWriteWins);
    reduce(&mut state, Action::EditInputText("one".into()));
    let first = translate_token(&reduce(&mut state, Action::RequestTranslation));
    let second = translate_token(&reduce(&mut state, Action::RequestTranslation));

    let ok = |text: &str| TranslateResponse {
        translated_text: text.into(),
        source_lang: None,
        target_lang: None,
        original_length: None,
        translated_length: None,
    };
    reduce(
        &mut state,
        Action::TranslationCompleted {
            token: second,
            outcome: Ok(ok("newer")),
        },
    );
    reduce(
        &mut state,
        Action::TranslationCompleted {
            token: first,
            outcome: Ok(ok("older")),
        },
    );

    assert_eq!(state.translated_text(), "older");
}

#[test]
fn discard_stale_ignores_superseded_completions() {
    let mut state = SessionState::new(StaleResponsePolicy::DiscardStale);
    let first = extract_token(&reduce(&mut state, Action::SelectFile(text_file("first.txt", b"1"))));
    let second = extract_token(&reduce(
        &mut state,
        Action::SelectFile(text_file("second.txt", b"22")),
    ));

    reduce(
        &mut state,
        Action::ExtractionCompleted {
            token: first,
            file_name: "first.txt".into(),
            outcome: Err(CollaboratorError::Transport("late failure".into())),
        },
    );
    assert!(state.is_extracting());
    assert_eq!(
        state.selected_file().map(|f| f.name.as_str()),
        Some("second.txt")
    );
    assert!(state.notifications().is_empty());

    reduce(
        &mut state,
        Action::ExtractionCompleted {
            token: second,
            file_name: "second.txt".into(),
            outcome: Ok(ExtractResponse {
                extracted_text: "22".into(),
                text_length: None,
                file_type: None,
            }),
        },
    );
    assert!(!state.is_extracting());
    assert_eq!(state.input_text(), "22");
}

#[test]
fn clear_file_resets_selection_and_text() {
    let mut state = SessionState::default();
    reduce(&mut state, Action::SelectFile(text_file("a.txt", b"abc")));
    reduce(&mut state, Action::EditInputText("extracted".into()));

    assert!(reduce(&mut state, Action::ClearFile).is_empty());
    assert!(state.selected_file().is_none());
    assert_eq!(state.input_text(), "");
}

#[test]
fn copy_requires_a_result() {
    let mut state = SessionState::default();
    assert!(reduce(&mut state, Action::CopyResult).is_empty());
    assert!(state.notifications().is_empty());

    reduce(&mut state, Action::EditInputText("Hello".into()));
    let token = translate_token(&reduce(&mut state, Action::RequestTranslation));
    reduce(
        &mut state,
        Action::TranslationCompleted {
            token,
            outcome: Ok(TranslateResponse {
                translated_text: "Hallo".into(),
                source_lang: None,
                target_lang: None,
                original_length: None,
                translated_length: None,
            }),
        },
    );

    let effects = reduce(&mut state, Action::CopyResult);
    assert_eq!(effects, vec![Effect::CopyToClipboard("Hallo".into())]);
    assert_eq!(
        state.notifications().latest().map(|n| n.title.as_str()),
        Some("Copied!")
    );
}

#[test]
fn dismiss_removes_notification() {
    let mut state = SessionState::default();
    reduce(&mut state, Action::RequestTranslation);
    let id = state.notifications().latest().expect("notification").id;
    reduce(&mut state, Action::DismissNotification(id));
    assert!(state.notifications().is_empty());
}

#[test]
fn error_notifications_carry_a_classification() {
    let mut state = SessionState::default();
    reduce(&mut state, Action::RequestTranslation);
    assert_eq!(
        state.notifications().latest().and_then(|n| n.code),
        Some(ErrorCode::Validation)
    );

    reduce(&mut state, Action::EditInputText("Hello".into()));
    let token = translate_token(&reduce(&mut state, Action::RequestTranslation));
    reduce(
        &mut state,
        Action::TranslationCompleted {
            token,
            outcome: Err(CollaboratorError::Server {
                status: 429,
                message: Some("slow down".into()),
            }),
        },
    );
    let api_error = state
        .notifications()
        .latest()
        .and_then(|n| n.to_api_error())
        .expect("api error");
    assert_eq!(api_error.code, ErrorCode::RateLimited);
    assert_eq!(api_error.message, "slow down");
}

fn translated(token: RequestToken, text: &str) -> Action {
    Action::TranslationCompleted {
        token,
        outcome: Ok(TranslateResponse {
            translated_text: text.into(),
            source_lang: None,
            target_lang: None,
            original_length: None,
            translated_length: None,
        }),
    }
}

fn extracted(token: RequestToken, file_name: &str, text: &str) -> Action {
    Action::ExtractionCompleted {
        token,
        file_name: file_name.into(),
        outcome: Ok(ExtractResponse {
            extracted_text: text.into(),
            text_length: None,
            file_type: None,
        }),
    }
}

/// Starts a translation, then picks a file while it is still in flight.
fn overlapping_requests(state: &mut SessionState) -> (RequestToken, RequestToken) {
    reduce(state, Action::EditInputText("Hello".into()));
    let translation = translate_token(&reduce(state, Action::RequestTranslation));
    let extraction = extract_token(&reduce(state, Action::SelectFile(text_file("a.txt", b"abc"))));
    assert!(state.is_translating());
    assert!(state.is_extracting());
    assert_eq!(state.input_text(), "");
    (translation, extraction)
}

#[test]
fn translation_finishing_first_leaves_pending_extraction_alone() {
    let mut state = SessionState::default();
    let (translation, extraction) = overlapping_requests(&mut state);

    reduce(&mut state, translated(translation, "Bonjour"));
    assert!(!state.is_translating());
    assert_eq!(state.translated_text(), "Bonjour");
    assert!(state.is_extracting());
    assert_eq!(state.selected_file().map(|f| f.name.as_str()), Some("a.txt"));
    assert_eq!(state.input_text(), "");

    reduce(&mut state, extracted(extraction, "a.txt", "abc"));
    assert!(!state.is_extracting());
    assert_eq!(state.input_text(), "abc");
    assert_eq!(state.selected_file().map(|f| f.name.as_str()), Some("a.txt"));
    assert!(!state.is_translating());
    assert_eq!(state.translated_text(), "Bonjour");
}

#[test]
fn extraction_finishing_first_leaves_pending_translation_alone() {
    let mut state = SessionState::default();
    let (translation, extraction) = overlapping_requests(&mut state);

    reduce(&mut state, extracted(extraction, "a.txt", "abc"));
    assert!(!state.is_extracting());
    assert_eq!(state.input_text(), "abc");
    assert_eq!(state.selected_file().map(|f| f.name.as_str()), Some("a.txt"));
    assert!(state.is_translating());
    assert_eq!(state.translated_text(), "");

    reduce(&mut state, translated(translation, "Bonjour"));
    assert!(!state.is_translating());
    assert_eq!(state.translated_text(), "Bonjour");
    assert!(!state.is_extracting());
    assert_eq!(state.input_text(), "abc");
    assert_eq!(state.selected_file().map(|f| f.name.as_str()), Some("a.txt"));
}

#[test]
fn failed_extraction_does_not_touch_pending_translation() {
    let mut state = SessionState::default();
    let (translation, extraction) = overlapping_requests(&mut state);

    reduce(
        &mut state,
        Action::ExtractionCompleted {
            token: extraction,
            file_name: "a.txt".into(),
            outcome: Err(CollaboratorError::Transport("reset".into())),
        },
    );
    assert!(state.selected_file().is_none());
    assert!(!state.is_extracting());
    assert!(state.is_translating());

    reduce(&mut state, translated(translation, "Bonjour"));
    assert_eq!(state.translated_text(), "Bonjour");
}

#[test]
fn translation_transport_failure_uses_its_own_fallback() {
    let mut state = SessionState::default();
    reduce(&mut state, Action::EditInputText("Hello".into()));
    let token = translate_token(&reduce(&mut state, Action::RequestTranslation));
    reduce(
        &mut state,
        Action::TranslationCompleted {
            token,
            outcome: Err(CollaboratorError::Transport("connection refused".into())),
        },
    );
    assert_eq!(
        latest_message(&state),
        (Severity::Error, "Could not translate text".to_string())
    );
}

#[test]
fn choosing_another_file_abandons_pending_extraction_when_discarding_stale() {
    let mut state = SessionState::new(StaleResponsePolicy::DiscardStale);
    let token = extract_token(&reduce(
        &mut state,
        Action::SelectFile(text_file("discarded.txt", b"ghost")),
    ));

    assert!(reduce(&mut state, Action::ClearFile).is_empty());
    assert!(!state.is_extracting());
    assert!(state.selected_file().is_none());

    reduce(&mut state, extracted(token, "discarded.txt", "ghost"));
    assert_eq!(state.input_text(), "");
    assert!(state.selected_file().is_none());
    assert!(state.notifications().is_empty());

    let next = extract_token(&reduce(&mut state, Action::SelectFile(text_file("b.txt", b"b"))));
    reduce(&mut state, extracted(next, "b.txt", "b"));
    assert_eq!(state.input_text(), "b");
    assert!(!state.is_extracting());
}

#[test]
fn choosing_another_file_keeps_pending_extraction_under_last_write_wins() {
    let mut state = SessionState::default();
    let token = extract_token(&reduce(
        &mut state,
        Action::SelectFile(text_file("discarded.txt", b"ghost")),
    ));

    reduce(&mut state, Action::ClearFile);
    assert!(state.is_extracting());
    assert!(state.selected_file().is_none());

    reduce(&mut state, extracted(token, "discarded.txt", "ghost"));
    assert!(!state.is_extracting());
    assert_eq!(state.input_text(), "ghost");
}
