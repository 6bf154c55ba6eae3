//! # Tick Engine
//!
//! A small runtime for per-entity behavior components driven by a
//! host simulation loop.
//!
//! ## Features
//!
//! - **Behavior Interface**: Explicit `on_create` / `on_tick` / `on_overlap`
//!   lifecycle trait instead of convention-based dispatch
//! - **Scheduler**: Single-threaded tick loop with per-entity activation state
//! - **Diagnostics**: Injected one-way sink, testable without a live host
//! - **Configuration**: Immutable per-entity config records loaded from TOML/RON
//!
//! ## Quick Start
//!
//! ```rust
//! use tick_engine::prelude::*;
//!
//! let mut scheduler = Scheduler::new();
//! let config = ControllerConfig::default();
//! let id = scheduler.spawn(Box::new(EntityController::new(config)));
//!
//! // One simulation frame, then a collision broadcast from the host.
//! scheduler.tick();
//! scheduler.notify_overlap(id, EntityId::UNKNOWN);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod diagnostics;
pub mod runtime;
pub mod behaviors;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        behaviors::{ControllerConfig, EntityController, LifeState},
        config::{Config, ConfigError},
        diagnostics::{DiagnosticSink, LogSink, MemorySink},
        foundation::math::Vec3,
        runtime::{Behavior, BehaviorContext, EntityId, Scheduler, TickOutcome},
    };
}
