use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use shared::protocol::{
    ErrorBody, ExtractRequest, ExtractResponse, TranslateRequest, TranslateResponse,
};
use tracing::{info, warn};

pub mod config;
pub mod controller;
pub mod error;
pub mod intake;
pub mod notify;

use config::Settings;
use controller::{reduce, Action, Effect, SessionState};
use error::CollaboratorError;

#[async_trait]
pub trait TranslationService: Send + Sync {
    async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslateResponse, CollaboratorError>;
}

#[async_trait]
pub trait ExtractionService: Send + Sync {
    async fn extract(&self, request: ExtractRequest)
        -> Result<ExtractResponse, CollaboratorError>;
}

/// Both remote services reached over HTTPS with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpCollaborators {
    http: Client,
    translate_url: String,
    extract_url: String,
}

impl HttpCollaborators {
    pub fn new(translate_url: impl Into<String>, extract_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), translate_url, extract_url)
    }

    /// Uses a caller-configured client (proxy, TLS or timeout settings).
    pub fn with_client(
        http: Client,
        translate_url: impl Into<String>,
        extract_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            translate_url: translate_url.into(),
            extract_url: extract_url.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.translate_url.clone(), settings.extract_url.clone())
    }

    pub fn translate_url(&self) -> &str {
        &self.translate_url
    }

    pub fn extract_url(&self) -> &str {
        &self.extract_url
    }

    async fn post_json<Req, Resp>(&self, url: &str, body: &Req) -> Result<Resp, CollaboratorError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.error);
            warn!(url, status = status.as_u16(), "service returned an error status");
            return Err(CollaboratorError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| CollaboratorError::UnexpectedResponse(err.to_string()))
    }
}

#[async_trait]
impl TranslationService for HttpCollaborators {
    async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslateResponse, CollaboratorError> {
        self.post_json(&self.translate_url, &request).await
    }
}

#[async_trait]
impl ExtractionService for HttpCollaborators {
    async fn extract(
        &self,
        request: ExtractRequest,
    ) -> Result<ExtractResponse, CollaboratorError> {
        self.post_json(&self.extract_url, &request).await
    }
}

/// Runs one network effect and returns the completion to feed back into [`reduce`].
///
/// Clipboard effects belong to the presentation layer and yield `None`.
pub async fn execute<S>(services: &S, effect: Effect) -> Option<Action>
where
    S: TranslationService + ExtractionService + ?Sized,
{
    match effect {
        Effect::Extract { token, file, kind } => {
            let outcome = match intake::read_content(&file).await {
                Ok(bytes) => {
                    info!(token = token.0, bytes = bytes.len(), "uploading file for extraction");
                    services
                        .extract(ExtractRequest::from_bytes(&bytes, kind))
                        .await
                }
                Err(err) => Err(err),
            };
            Some(Action::ExtractionCompleted {
                token,
                file_name: file.name,
                outcome,
            })
        }
        Effect::Translate { token, request } => Some(Action::TranslationCompleted {
            token,
            outcome: services.translate(request).await,
        }),
        Effect::CopyToClipboard(_) => None,
    }
}

/// Drives a [`SessionState`] to quiescence by awaiting each network effect in turn.
pub struct SessionDriver<S> {
    state: SessionState,
    services: S,
}

impl<S> SessionDriver<S>
where
    S: TranslationService + ExtractionService,
{
    pub fn new(state: SessionState, services: S) -> Self {
        Self { state, services }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    /// Returns the effects the driver cannot run itself (clipboard).
    pub async fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let mut pending = reduce(&mut self.state, action);
        let mut local = Vec::new();
        while let Some(effect) = pending.pop() {
            if matches!(effect, Effect::CopyToClipboard(_)) {
                local.push(effect);
                continue;
            }
            if let Some(completion) = execute(&self.services, effect).await {
                pending.extend(reduce(&mut self.state, completion));
            }
        }
        local
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
