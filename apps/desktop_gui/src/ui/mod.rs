//! UI layer for the desktop GUI: app shell, page content, theme, and toasts.

pub mod app;
pub mod content;
pub mod theme;
pub mod toasts;

pub use app::{StartupConfig, TranslatorApp};
