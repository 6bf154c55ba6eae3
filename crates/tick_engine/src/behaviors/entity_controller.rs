//! Entity controller behavior
//!
//! Tracks an entity's health and movement intent and reacts to the
//! host's ticks and overlap notifications. Death is detected on the
//! tick where health reaches zero or below; the controller reports it
//! once, enters a terminal state, and asks the scheduler to stop
//! ticking it.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::Vec3;
use crate::runtime::{Behavior, BehaviorContext, EntityId, TickOutcome};

/// Default movement speed in units per second
pub const DEFAULT_SPEED: f32 = 5.0;

/// Default initial health
pub const DEFAULT_INITIAL_HEALTH: i32 = 100;

/// Immutable per-entity configuration record
///
/// Constructed once before `on_create` runs, typically from the
/// host's entity-configuration data; never mutated afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Movement speed in units per second
    #[serde(default = "default_speed")]
    pub speed: f32,

    /// Health value assigned at initialization
    #[serde(default = "default_initial_health")]
    pub initial_health: i32,
}

fn default_speed() -> f32 {
    DEFAULT_SPEED
}

fn default_initial_health() -> i32 {
    DEFAULT_INITIAL_HEALTH
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            initial_health: DEFAULT_INITIAL_HEALTH,
        }
    }
}

impl Config for ControllerConfig {}

/// Life state of a controlled entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    /// Created but `on_create` has not run yet
    Uninitialized,
    /// Initialized and ticking normally
    Alive,
    /// Death condition observed; terminal
    Dead,
}

/// Behavior component owning an entity's health and movement intent
#[derive(Debug, Clone)]
pub struct EntityController {
    config: ControllerConfig,

    /// Current health; non-positive values signal death. Never
    /// clamped by the controller itself.
    pub health: i32,

    /// Per-tick movement scratch value; not persisted across ticks by
    /// the controller
    pub movement_intent: Vec3,

    state: LifeState,
}

impl EntityController {
    /// Create a controller from an immutable configuration record
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            health: config.initial_health,
            movement_intent: Vec3::zeros(),
            state: LifeState::Uninitialized,
        }
    }

    /// Configured movement speed, read-only after creation
    pub fn speed(&self) -> f32 {
        self.config.speed
    }

    /// Current life state
    pub fn state(&self) -> LifeState {
        self.state
    }

    /// Whether the entity has entered its terminal state
    pub fn is_dead(&self) -> bool {
        self.state == LifeState::Dead
    }
}

impl Default for EntityController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl Behavior for EntityController {
    /// Arms the controller: sets health to the configured value and
    /// enters `Alive`. Repeat invocations re-arm; the last call wins.
    fn on_create(&mut self, ctx: &mut BehaviorContext) {
        self.health = self.config.initial_health;
        self.movement_intent = Vec3::zeros();
        self.state = LifeState::Alive;
        ctx.record("entity ready");
    }

    fn on_tick(&mut self, ctx: &mut BehaviorContext) -> TickOutcome {
        match self.state {
            // The host guarantees on_create runs first; a stray early
            // tick is a silent no-op.
            LifeState::Uninitialized => TickOutcome::Continue,
            LifeState::Alive => {
                ctx.record("tick");
                if self.health <= 0 {
                    ctx.record("entity died");
                    self.state = LifeState::Dead;
                    TickOutcome::Deactivate
                } else {
                    TickOutcome::Continue
                }
            }
            LifeState::Dead => TickOutcome::Deactivate,
        }
    }

    /// Gameplay hook point: reports the overlap and nothing else.
    fn on_overlap(&mut self, ctx: &mut BehaviorContext, other: EntityId) {
        ctx.record(&format!("overlap with {other}"));
    }
}
