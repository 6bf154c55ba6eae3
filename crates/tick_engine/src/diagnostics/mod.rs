//! Diagnostic sink
//!
//! Behaviors report through a one-way, fire-and-forget text channel
//! injected by the host. The sink is observability only and never
//! drives control flow.

use crate::runtime::EntityId;

/// One-way diagnostic channel for behavior components
pub trait DiagnosticSink {
    /// Record a human-readable message for an entity
    fn record(&mut self, entity: EntityId, message: &str);
}

/// Sink that forwards records to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, entity: EntityId, message: &str) {
        log::info!("{entity}: {message}");
    }
}

/// Sink that retains records in memory
///
/// Used by headless tests and tools that need to observe component
/// output without a live host.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<(EntityId, String)>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in arrival order
    pub fn records(&self) -> &[(EntityId, String)] {
        &self.records
    }

    /// Records for a single entity, in arrival order
    pub fn records_for(&self, entity: EntityId) -> Vec<&str> {
        self.records
            .iter()
            .filter(|(id, _)| *id == entity)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }

    /// Number of records whose message contains `needle`
    pub fn count_containing(&self, needle: &str) -> usize {
        self.records
            .iter()
            .filter(|(_, msg)| msg.contains(needle))
            .count()
    }

    /// Drop all retained records
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&mut self, entity: EntityId, message: &str) {
        self.records.push((entity, message.to_string()));
    }
}
