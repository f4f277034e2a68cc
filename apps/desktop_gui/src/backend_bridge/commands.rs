//! Backend commands queued from UI to backend worker.

use client_core::{
    controller::{Effect, RequestToken},
    intake::FileCandidate,
};
use shared::{domain::DocumentKind, protocol::TranslateRequest};

pub enum BackendCommand {
    Extract {
        token: RequestToken,
        file: FileCandidate,
        kind: DocumentKind,
    },
    Translate {
        token: RequestToken,
        request: TranslateRequest,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Extract { .. } => "extract",
            BackendCommand::Translate { .. } => "translate",
        }
    }

    pub fn token(&self) -> RequestToken {
        match self {
            BackendCommand::Extract { token, .. } | BackendCommand::Translate { token, .. } => {
                *token
            }
        }
    }

    pub fn into_effect(self) -> Effect {
        match self {
            BackendCommand::Extract { token, file, kind } => Effect::Extract { token, file, kind },
            BackendCommand::Translate { token, request } => Effect::Translate { token, request },
        }
    }
}
