//! Behavior scheduling
//!
//! Drives registered behaviors through their lifecycle: `on_create` at
//! spawn, `on_tick` once per frame, and `on_overlap` when the host's
//! collision phase reports an intersection. Execution is
//! single-threaded and cooperative; entities are visited in spawn
//! order and at most one entry point runs per entity at a time.

use crate::diagnostics::{DiagnosticSink, LogSink};

use super::{Behavior, BehaviorContext, EntityId, TickOutcome};

struct Slot {
    id: EntityId,
    behavior: Box<dyn Behavior>,
    active: bool,
}

/// Single-threaded behavior scheduler
///
/// Owns the registered behaviors and the injected diagnostic sink.
/// The hosting runtime calls [`tick`](Scheduler::tick) once per
/// simulation frame and [`notify_overlap`](Scheduler::notify_overlap)
/// during its collision broadcast phase.
pub struct Scheduler<S: DiagnosticSink> {
    sink: S,
    next_id: u32,
    slots: Vec<Slot>,
}

impl Scheduler<LogSink> {
    /// Create a scheduler that reports diagnostics through the `log` facade
    pub fn new() -> Self {
        Self::with_sink(LogSink)
    }
}

impl Default for Scheduler<LogSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DiagnosticSink> Scheduler<S> {
    /// Create a scheduler with an injected diagnostic sink
    pub fn with_sink(sink: S) -> Self {
        Self {
            sink,
            next_id: 0,
            slots: Vec::new(),
        }
    }

    /// Register a behavior and run its `on_create` entry point
    ///
    /// Initialization always completes before the entity's first tick.
    pub fn spawn(&mut self, mut behavior: Box<dyn Behavior>) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;

        let mut ctx = BehaviorContext::new(id, &mut self.sink);
        behavior.on_create(&mut ctx);

        self.slots.push(Slot {
            id,
            behavior,
            active: true,
        });
        id
    }

    /// Advance the simulation by one frame
    ///
    /// Ticks every active entity in spawn order. A behavior returning
    /// [`TickOutcome::Deactivate`] is marked inactive and receives no
    /// further ticks or overlap notifications.
    pub fn tick(&mut self) {
        for slot in &mut self.slots {
            if !slot.active {
                continue;
            }
            let mut ctx = BehaviorContext::new(slot.id, &mut self.sink);
            if slot.behavior.on_tick(&mut ctx) == TickOutcome::Deactivate {
                slot.active = false;
            }
        }
    }

    /// Deliver an overlap notification to `target`
    ///
    /// `other` identifies the second collider and may be
    /// [`EntityId::UNKNOWN`]. Unknown or inactive targets are skipped;
    /// a symmetric collision is two calls by the host.
    pub fn notify_overlap(&mut self, target: EntityId, other: EntityId) {
        let Some(slot) = self.slots.iter_mut().find(|s| s.id == target) else {
            log::warn!("overlap for unregistered {target} dropped");
            return;
        };
        if !slot.active {
            return;
        }
        let mut ctx = BehaviorContext::new(slot.id, &mut self.sink);
        slot.behavior.on_overlap(&mut ctx, other);
    }

    /// Remove an entity from the scheduler
    ///
    /// There is no teardown entry point; the behavior is dropped.
    /// Returns false if the id was not registered.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.id != id);
        before != self.slots.len()
    }

    /// Whether an entity is registered and still being ticked
    pub fn is_active(&self, id: EntityId) -> bool {
        self.slots.iter().any(|s| s.id == id && s.active)
    }

    /// Number of registered entities, active or not
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no entities are registered
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Access the diagnostic sink
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemorySink;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counters {
        created: u32,
        ticked: u32,
        overlaps: u32,
    }

    struct TestBehavior {
        counters: Rc<RefCell<Counters>>,
        deactivate_after: Option<u32>,
    }

    impl TestBehavior {
        fn new(counters: Rc<RefCell<Counters>>) -> Self {
            Self {
                counters,
                deactivate_after: None,
            }
        }

        fn deactivating(counters: Rc<RefCell<Counters>>, ticks: u32) -> Self {
            Self {
                counters,
                deactivate_after: Some(ticks),
            }
        }
    }

    impl Behavior for TestBehavior {
        fn on_create(&mut self, ctx: &mut BehaviorContext) {
            self.counters.borrow_mut().created += 1;
            ctx.record("created");
        }

        fn on_tick(&mut self, _ctx: &mut BehaviorContext) -> TickOutcome {
            let mut counters = self.counters.borrow_mut();
            counters.ticked += 1;
            match self.deactivate_after {
                Some(limit) if counters.ticked >= limit => TickOutcome::Deactivate,
                _ => TickOutcome::Continue,
            }
        }

        fn on_overlap(&mut self, _ctx: &mut BehaviorContext, _other: EntityId) {
            self.counters.borrow_mut().overlaps += 1;
        }
    }

    #[test]
    fn test_spawn_runs_on_create_before_first_tick() {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let mut scheduler = Scheduler::with_sink(MemorySink::new());

        scheduler.spawn(Box::new(TestBehavior::new(Rc::clone(&counters))));
        assert_eq!(counters.borrow().created, 1);
        assert_eq!(counters.borrow().ticked, 0);

        scheduler.tick();
        assert_eq!(counters.borrow().ticked, 1);
    }

    #[test]
    fn test_tick_visits_every_active_entity() {
        let a = Rc::new(RefCell::new(Counters::default()));
        let b = Rc::new(RefCell::new(Counters::default()));
        let mut scheduler = Scheduler::with_sink(MemorySink::new());

        scheduler.spawn(Box::new(TestBehavior::new(Rc::clone(&a))));
        scheduler.spawn(Box::new(TestBehavior::new(Rc::clone(&b))));

        scheduler.tick();
        scheduler.tick();

        assert_eq!(a.borrow().ticked, 2);
        assert_eq!(b.borrow().ticked, 2);
    }

    #[test]
    fn test_deactivate_stops_ticking() {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let mut scheduler = Scheduler::with_sink(MemorySink::new());

        let id = scheduler.spawn(Box::new(TestBehavior::deactivating(
            Rc::clone(&counters),
            2,
        )));

        for _ in 0..5 {
            scheduler.tick();
        }

        // Two ticks ran, then the entity went inactive.
        assert_eq!(counters.borrow().ticked, 2);
        assert!(!scheduler.is_active(id));
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_overlap_delivered_to_target_only() {
        let a = Rc::new(RefCell::new(Counters::default()));
        let b = Rc::new(RefCell::new(Counters::default()));
        let mut scheduler = Scheduler::with_sink(MemorySink::new());

        let id_a = scheduler.spawn(Box::new(TestBehavior::new(Rc::clone(&a))));
        let _id_b = scheduler.spawn(Box::new(TestBehavior::new(Rc::clone(&b))));

        scheduler.notify_overlap(id_a, EntityId::UNKNOWN);

        assert_eq!(a.borrow().overlaps, 1);
        assert_eq!(b.borrow().overlaps, 0);
    }

    #[test]
    fn test_overlap_skipped_for_inactive_target() {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let mut scheduler = Scheduler::with_sink(MemorySink::new());

        let id = scheduler.spawn(Box::new(TestBehavior::deactivating(
            Rc::clone(&counters),
            1,
        )));
        scheduler.tick();
        assert!(!scheduler.is_active(id));

        scheduler.notify_overlap(id, EntityId::UNKNOWN);
        assert_eq!(counters.borrow().overlaps, 0);
    }

    #[test]
    fn test_overlap_for_unknown_target_is_dropped() {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let mut scheduler = Scheduler::with_sink(MemorySink::new());
        let id = scheduler.spawn(Box::new(TestBehavior::new(Rc::clone(&counters))));
        scheduler.despawn(id);

        // Completes without delivering anything.
        scheduler.notify_overlap(id, EntityId::UNKNOWN);
        assert_eq!(counters.borrow().overlaps, 0);
    }

    #[test]
    fn test_despawn() {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let mut scheduler = Scheduler::with_sink(MemorySink::new());

        let id = scheduler.spawn(Box::new(TestBehavior::new(Rc::clone(&counters))));
        assert!(scheduler.despawn(id));
        assert!(!scheduler.despawn(id));
        assert!(scheduler.is_empty());

        scheduler.tick();
        assert_eq!(counters.borrow().ticked, 0);
    }

    #[test]
    fn test_sink_receives_records() {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let mut scheduler = Scheduler::with_sink(MemorySink::new());

        let id = scheduler.spawn(Box::new(TestBehavior::new(counters)));

        let records = scheduler.sink().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], (id, "created".to_string()));
    }
}
