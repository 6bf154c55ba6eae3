//! Entity identity

/// Opaque entity identifier
///
/// Assigned by the [`Scheduler`](super::Scheduler) at spawn time.
/// Overlap notifications carry the other party's id; a host that
/// cannot identify the other collider passes [`EntityId::UNKNOWN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId {
    id: u32,
}

impl EntityId {
    /// Sentinel for a collider the host cannot identify
    pub const UNKNOWN: EntityId = EntityId { id: u32::MAX };

    /// Create a new entity id with the given value
    pub(super) fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the raw id value
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Self::UNKNOWN {
            write!(f, "entity(?)")
        } else {
            write!(f, "entity({})", self.id)
        }
    }
}
