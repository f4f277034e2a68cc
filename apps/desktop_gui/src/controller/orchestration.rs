//! Routes reducer effects: network work to the backend queue, clipboard writes locally.

use client_core::{
    controller::{reduce, Action, Effect, SessionState},
    error::CollaboratorError,
};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|err| err.to_string())?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|err| err.to_string())
    }
}

/// Applies `action` and routes every effect it produces.
pub fn dispatch(
    state: &mut SessionState,
    action: Action,
    cmd_tx: &Sender<BackendCommand>,
    clipboard: &mut dyn ClipboardSink,
) {
    let mut pending = vec![action];
    while let Some(action) = pending.pop() {
        for effect in reduce(state, action) {
            if let Some(failure) = route_effect(effect, cmd_tx, clipboard) {
                pending.push(failure);
            }
        }
    }
}

/// Returns a failed completion when the effect could not be handed to the backend.
fn route_effect(
    effect: Effect,
    cmd_tx: &Sender<BackendCommand>,
    clipboard: &mut dyn ClipboardSink,
) -> Option<Action> {
    let cmd = match effect {
        Effect::CopyToClipboard(text) => {
            if let Err(err) = clipboard.set_text(&text) {
                tracing::warn!("clipboard write failed: {err}");
            }
            return None;
        }
        Effect::Extract { token, file, kind } => BackendCommand::Extract { token, file, kind },
        Effect::Translate { token, request } => BackendCommand::Translate { token, request },
    };
    dispatch_backend_command(cmd_tx, cmd).err()
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), Action> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(cmd)) => {
            tracing::warn!(command = cmd_name, "backend command queue is full");
            Err(undelivered(cmd, "Request queue is full; please retry"))
        }
        Err(TrySendError::Disconnected(cmd)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            Err(undelivered(
                cmd,
                "Backend command processor disconnected (possible startup/runtime failure)",
            ))
        }
    }
}

fn undelivered(cmd: BackendCommand, reason: &str) -> Action {
    let err = CollaboratorError::Transport(reason.to_string());
    match cmd {
        BackendCommand::Extract { token, file, .. } => Action::ExtractionCompleted {
            token,
            file_name: file.name,
            outcome: Err(err),
        },
        BackendCommand::Translate { token, .. } => Action::TranslationCompleted {
            token,
            outcome: Err(err),
        },
    }
}
