//! Behavior runtime
//!
//! Provides entity identity, the behavior lifecycle interface, and the
//! single-threaded scheduler that drives registered behaviors.

pub mod behavior;
pub mod entity;
pub mod scheduler;

pub use behavior::{Behavior, BehaviorContext, TickOutcome};
pub use entity::EntityId;
pub use scheduler::Scheduler;
