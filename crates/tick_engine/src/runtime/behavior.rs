//! Behavior lifecycle interface
//!
//! Behaviors are registered with a [`Scheduler`](super::Scheduler),
//! which guarantees `on_create` runs before the first `on_tick` and
//! that at most one entry point is in flight per entity at a time.

use crate::diagnostics::DiagnosticSink;

use super::EntityId;

/// Result of one tick of a behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking this entity on subsequent frames
    Continue,
    /// Stop ticking this entity; the scheduler marks it inactive
    Deactivate,
}

/// Per-invocation context handed to behavior entry points
///
/// Carries the entity's own id and the diagnostics sink so behaviors
/// never reach for a global logging channel.
pub struct BehaviorContext<'a> {
    /// Id of the entity this invocation is for
    pub entity: EntityId,
    /// One-way diagnostic sink, fire and forget
    pub diagnostics: &'a mut dyn DiagnosticSink,
}

impl<'a> BehaviorContext<'a> {
    /// Create a context for a single entry-point invocation
    pub fn new(entity: EntityId, diagnostics: &'a mut dyn DiagnosticSink) -> Self {
        Self { entity, diagnostics }
    }

    /// Emit a diagnostic record for this entity
    pub fn record(&mut self, message: &str) {
        self.diagnostics.record(self.entity, message);
    }
}

/// Lifecycle trait for per-entity behaviors
///
/// All entry points are total: they neither fail nor block. A behavior
/// that wants the host to stop driving it returns
/// [`TickOutcome::Deactivate`] rather than raising an error.
pub trait Behavior {
    /// Called once after the entity is registered, before any tick
    fn on_create(&mut self, ctx: &mut BehaviorContext);

    /// Called once per simulation frame while the entity is active
    fn on_tick(&mut self, ctx: &mut BehaviorContext) -> TickOutcome;

    /// Called when the host's collision phase reports an overlap with
    /// another entity; `other` may be [`EntityId::UNKNOWN`]
    fn on_overlap(&mut self, ctx: &mut BehaviorContext, other: EntityId);
}
