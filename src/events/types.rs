// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! domain_event {
    ($ty:ident) => {
        impl DomainEvent for $ty {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($ty)
            }
        }
    };
}

// ============================================================================
// SIBLING SET EVENTS
// ============================================================================

/// Emitted when a record is appended to its sibling set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: String, // "episode", "season", "genre", ...
    pub record_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub position: u32,
}

impl RecordAdded {
    pub fn new(kind: &str, record_id: Uuid, parent_id: Option<Uuid>, position: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind: kind.to_string(),
            record_id,
            parent_id,
            position,
        }
    }
}

domain_event!(RecordAdded);

/// Emitted when a record is removed and the gap behind it is closed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: String,
    pub record_id: Uuid,
    pub parent_id: Option<Uuid>,
    /// Position the record held before removal
    pub position: u32,
    /// Siblings moved one step up to close the gap
    pub shifted: usize,
}

impl RecordRemoved {
    pub fn new(
        kind: &str,
        record_id: Uuid,
        parent_id: Option<Uuid>,
        position: u32,
        shifted: usize,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind: kind.to_string(),
            record_id,
            parent_id,
            position,
            shifted,
        }
    }
}

domain_event!(RecordRemoved);

/// Emitted when a record swaps places with an adjacent sibling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordMoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: String,
    pub record_id: Uuid,
    /// The sibling that took the record's old position
    pub displaced_id: Uuid,
    pub from: u32,
    pub to: u32,
}

impl RecordMoved {
    pub fn new(kind: &str, record_id: Uuid, displaced_id: Uuid, from: u32, to: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind: kind.to_string(),
            record_id,
            displaced_id,
            from,
            to,
        }
    }
}

domain_event!(RecordMoved);

/// Emitted when a copy of a record is inserted directly after it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDuplicated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: String,
    pub source_id: Uuid,
    pub duplicate_id: Uuid,
    pub parent_id: Option<Uuid>,
    /// Position of the new copy
    pub position: u32,
    /// Siblings moved one step down to make room
    pub shifted: usize,
}

impl RecordDuplicated {
    pub fn new(
        kind: &str,
        source_id: Uuid,
        duplicate_id: Uuid,
        parent_id: Option<Uuid>,
        position: u32,
        shifted: usize,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind: kind.to_string(),
            source_id,
            duplicate_id,
            parent_id,
            position,
            shifted,
        }
    }
}

domain_event!(RecordDuplicated);

/// Emitted when a record's payload is replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: String,
    pub record_id: Uuid,
}

impl RecordUpdated {
    pub fn new(kind: &str, record_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind: kind.to_string(),
            record_id,
        }
    }
}

domain_event!(RecordUpdated);

/// Emitted after a sibling set is renumbered to 0..n
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiblingsNormalized {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: String,
    pub parent_id: Option<Uuid>,
    /// Records whose position actually changed
    pub changed: usize,
}

impl SiblingsNormalized {
    pub fn new(kind: &str, parent_id: Option<Uuid>, changed: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind: kind.to_string(),
            parent_id,
            changed,
        }
    }
}

domain_event!(SiblingsNormalized);
