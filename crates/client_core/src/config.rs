use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::controller::StaleResponsePolicy;

pub const DEFAULT_TRANSLATE_URL: &str =
    "https://functions.poehali.dev/804c924f-daed-4cfb-a74d-c1fb367ee287";
pub const DEFAULT_EXTRACT_URL: &str =
    "https://functions.poehali.dev/7a236db2-425a-4480-aa64-2ee4da74d621";
pub const SETTINGS_FILE: &str = "translator.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file: {0}")]
    File(#[from] toml::de::Error),
    #[error("invalid {name} '{value}': {reason}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("unknown stale response policy '{0}' (expected last_write_wins or discard_stale)")]
    UnknownStalePolicy(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub translate_url: String,
    pub extract_url: String,
    pub stale_policy: StaleResponsePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translate_url: DEFAULT_TRANSLATE_URL.into(),
            extract_url: DEFAULT_EXTRACT_URL.into(),
            stale_policy: StaleResponsePolicy::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    translate_url: Option<String>,
    extract_url: Option<String>,
    stale_responses: Option<StaleResponsePolicy>,
}

/// Defaults, then `translator.toml` in the working directory, then the environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let file = match fs::read_to_string(SETTINGS_FILE) {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            tracing::warn!("ignoring unreadable {SETTINGS_FILE}: {err}");
            None
        }
    };
    Settings::from_sources(file.as_deref(), |name| std::env::var(name).ok())
}

pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Settings::from_sources(Some(&raw), |name| std::env::var(name).ok())
}

impl Settings {
    pub fn from_sources(
        file: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Some(raw) = file {
            let file_cfg: FileSettings = toml::from_str(raw)?;
            if let Some(v) = file_cfg.translate_url {
                settings.translate_url = v;
            }
            if let Some(v) = file_cfg.extract_url {
                settings.extract_url = v;
            }
            if let Some(v) = file_cfg.stale_responses {
                settings.stale_policy = v;
            }
        }

        let non_empty = |name: &str| env(name).filter(|value| !value.trim().is_empty());

        if let Some(v) = non_empty("TRANSLATE_API_URL") {
            settings.translate_url = v;
        }
        if let Some(v) = non_empty("APP__TRANSLATE_API_URL") {
            settings.translate_url = v;
        }

        if let Some(v) = non_empty("EXTRACT_API_URL") {
            settings.extract_url = v;
        }
        if let Some(v) = non_empty("APP__EXTRACT_API_URL") {
            settings.extract_url = v;
        }

        if let Some(v) = non_empty("APP__STALE_RESPONSES") {
            settings.stale_policy = parse_stale_policy(&v)?;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("translate_url", &self.translate_url)?;
        check_url("extract_url", &self.extract_url)?;
        Ok(())
    }
}

pub fn parse_stale_policy(raw: &str) -> Result<StaleResponsePolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "last_write_wins" => Ok(StaleResponsePolicy::LastWriteWins),
        "discard_stale" => Ok(StaleResponsePolicy::DiscardStale),
        other => Err(ConfigError::UnknownStalePolicy(other.to_string())),
    }
}

fn check_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        name,
        value: value.to_string(),
        reason,
    };
    let parsed = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!("unsupported scheme '{scheme}'"))),
    }
}
