//! Controller layer: UI events, section actions, and command orchestration.

pub mod events;
pub mod orchestration;
