//! Audit sink implementations.
//!
//! Records allocation outcomes in memory for inspection by tests and
//! development tooling. Durable audit storage is outside this crate.

use std::collections::VecDeque;

use crate::core::space::SpaceCategory;
use crate::util::clock::now_ms;

/// A recorded allocation outcome.
#[derive(Debug, Clone)]
pub struct ParkingEvent {
    /// Event identifier.
    pub event_id: String,
    /// Plate of the vehicle involved.
    pub plate: String,
    /// Action taken (park, reject).
    pub action: String,
    /// Category committed; the sentinel for rejections.
    pub category: SpaceCategory,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
    /// Additional context.
    pub detail: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: ParkingEvent);
}

/// In-memory audit sink with a bounded buffer; oldest events drop first.
pub struct InMemoryAuditSink {
    events: VecDeque<ParkingEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink retaining at most `max_events` events.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<ParkingEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: ParkingEvent) {
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Helper to build a parking event from context.
pub fn build_parking_event(
    event_id: impl Into<String>,
    plate: impl Into<String>,
    action: impl Into<String>,
    category: SpaceCategory,
    detail: Option<String>,
) -> ParkingEvent {
    ParkingEvent {
        event_id: event_id.into(),
        plate: plate.into(),
        action: action.into(),
        category,
        created_at_ms: now_ms(),
        detail,
    }
}
