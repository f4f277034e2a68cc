//! Controller layer: UI events, session reduction, and command orchestration.

pub mod events;
pub mod orchestration;
