//! Events flowing from the backend worker back to the UI thread.

use client_core::controller::Action;

pub enum UiEvent {
    /// A collaborator call finished; feed it through the reducer.
    Completed(Action),
    BackendUnavailable(String),
}
