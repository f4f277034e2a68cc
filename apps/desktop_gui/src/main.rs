mod backend_bridge;
mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::config::{self, Settings};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{StartupConfig, TranslatorApp};

#[derive(Parser, Debug)]
#[command(about = "Desktop document translator")]
struct Args {
    /// Settings file to use instead of ./translator.toml
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    translate_url: Option<String>,
    #[arg(long)]
    extract_url: Option<String>,
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => config::load_settings_from(path)?,
        None => config::load_settings()?,
    };
    if let Some(url) = &args.translate_url {
        settings.translate_url = url.clone();
    }
    if let Some(url) = &args.extract_url {
        settings.extract_url = url.clone();
    }
    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = load_settings(&args).context("invalid translator settings")?;
    let startup = StartupConfig {
        stale_policy: settings.stale_policy,
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(&settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AI Translator")
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([760.0, 560.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "AI Translator",
        options,
        Box::new(move |cc| Ok(Box::new(TranslatorApp::new(cc, startup, cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))
}
