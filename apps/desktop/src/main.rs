use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::{self, Settings},
    controller::{Action, SessionState},
    intake::{self, FileCandidate},
    notify::Severity,
    HttpCollaborators, SessionDriver,
};
use shared::domain::{DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Translate text or documents through the remote translation services")]
struct Args {
    /// Settings file to use instead of ./translator.toml
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    translate_url: Option<String>,
    #[arg(long)]
    extract_url: Option<String>,
    /// Print results and errors as JSON
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate literal text
    Translate {
        text: String,
        #[arg(long, default_value = DEFAULT_SOURCE_LANGUAGE)]
        from: String,
        #[arg(long, default_value = DEFAULT_TARGET_LANGUAGE)]
        to: String,
    },
    /// Extract text from a PDF, DOCX or TXT file, optionally translating it
    Extract {
        file: PathBuf,
        /// Translate the extracted text into this language
        #[arg(long)]
        translate_to: Option<String>,
        #[arg(long, default_value = DEFAULT_SOURCE_LANGUAGE)]
        from: String,
    },
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

/// Prints queued notifications; returns the first error as a failure.
fn flush_notifications(
    driver: &mut SessionDriver<HttpCollaborators>,
    json: bool,
) -> Result<()> {
    let mut first_error = None;
    for notification in driver.state_mut().notifications_mut().drain() {
        match notification.severity {
            Severity::Success => eprintln!("{} {}", notification.title, notification.message),
            Severity::Error => {
                if json {
                    if let Some(api_error) = notification.to_api_error() {
                        println!("{}", serde_json::to_string(&api_error)?);
                    }
                } else {
                    eprintln!("{}: {}", notification.title, notification.message);
                }
                first_error.get_or_insert(notification.message);
            }
        }
    }
    match first_error {
        Some(message) => bail!(message),
        None => Ok(()),
    }
}

async fn translate(
    driver: &mut SessionDriver<HttpCollaborators>,
    from: String,
    to: String,
    json: bool,
) -> Result<()> {
    driver.dispatch(Action::SetSourceLanguage(from)).await;
    driver.dispatch(Action::SetTargetLanguage(to)).await;
    driver.dispatch(Action::RequestTranslation).await;
    flush_notifications(driver, json)?;

    let translated = driver.state().translated_text();
    if json {
        println!(
            "{}",
            serde_json::json!({ "translated_text": translated })
        );
    } else {
        println!("{translated}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings(&args)?;
    let services = HttpCollaborators::from_settings(&settings);
    tracing::info!(
        translate_url = services.translate_url(),
        extract_url = services.extract_url(),
        "using translation services"
    );
    let mut driver = SessionDriver::new(SessionState::new(settings.stale_policy), services);

    match args.command {
        Command::Translate { text, from, to } => {
            driver.dispatch(Action::EditInputText(text)).await;
            translate(&mut driver, from, to, args.json).await
        }
        Command::Extract {
            file,
            translate_to,
            from,
        } => {
            let candidate = FileCandidate::from_path(&file)
                .with_context(|| format!("cannot open '{}'", file.display()))?;
            driver.dispatch(Action::SelectFile(candidate)).await;
            flush_notifications(&mut driver, args.json)?;

            if let Some(selected) = driver.state().selected_file() {
                tracing::info!(
                    file_name = %selected.name,
                    size = %intake::size_label(selected.byte_size),
                    "extracted"
                );
            }

            match translate_to {
                Some(to) => translate(&mut driver, from, to, args.json).await,
                None => {
                    let text = driver.state().input_text();
                    if args.json {
                        println!(
                            "{}",
                            serde_json::json!({
                                "extracted_text": text,
                                "text_length": text.chars().count(),
                            })
                        );
                    } else {
                        println!("{text}");
                    }
                    Ok(())
                }
            }
        }
    }
}
