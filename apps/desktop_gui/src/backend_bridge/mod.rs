//! Backend worker: owns the async runtime and the HTTP collaborators.

pub mod commands;
pub mod runtime;
