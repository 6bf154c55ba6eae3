//! Built-in behaviors

pub mod entity_controller;

pub use entity_controller::{ControllerConfig, EntityController, LifeState};
