//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{config::Settings, HttpCollaborators};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(settings: &Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    let services = Arc::new(HttpCollaborators::from_settings(settings));
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!(
                translate_url = services.translate_url(),
                extract_url = services.extract_url(),
                "backend worker ready"
            );
            // Each request runs on its own task so extraction and translation can overlap.
            while let Ok(cmd) = cmd_rx.recv() {
                let services = services.clone();
                let ui_tx = ui_tx.clone();
                tracing::debug!(command = cmd.name(), token = cmd.token().0, "backend: running");
                tokio::spawn(async move {
                    if let Some(completion) =
                        client_core::execute(services.as_ref(), cmd.into_effect()).await
                    {
                        if ui_tx.send(UiEvent::Completed(completion)).is_err() {
                            tracing::debug!("ui closed before request completed");
                        }
                    }
                });
            }
            tracing::info!("backend command queue closed; worker exiting");
        });
    });
}
