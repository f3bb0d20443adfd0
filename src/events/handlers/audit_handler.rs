// events/handlers/audit_handler.rs
//
// Writes one log line per sibling set change.

use crate::events::bus::EventBus;
use crate::events::types::{
    RecordAdded, RecordDuplicated, RecordMoved, RecordRemoved, RecordUpdated, SiblingsNormalized,
};

/// Subscribe the audit log to every ordering event.
pub fn register_audit_handlers(bus: &EventBus) {
    bus.subscribe::<RecordAdded, _>(|event| {
        log::info!(
            "{} {} added at position {}",
            event.kind,
            event.record_id,
            event.position
        );
    });

    bus.subscribe::<RecordRemoved, _>(|event| {
        log::info!(
            "{} {} removed from position {} ({} sibling(s) shifted)",
            event.kind,
            event.record_id,
            event.position,
            event.shifted
        );
    });

    bus.subscribe::<RecordMoved, _>(|event| {
        log::info!(
            "{} {} moved {} -> {}, displacing {}",
            event.kind,
            event.record_id,
            event.from,
            event.to,
            event.displaced_id
        );
    });

    bus.subscribe::<RecordDuplicated, _>(|event| {
        log::info!(
            "{} {} duplicated as {} at position {} ({} sibling(s) shifted)",
            event.kind,
            event.source_id,
            event.duplicate_id,
            event.position,
            event.shifted
        );
    });

    bus.subscribe::<RecordUpdated, _>(|event| {
        log::info!("{} {} updated", event.kind, event.record_id);
    });

    bus.subscribe::<SiblingsNormalized, _>(|event| {
        if event.changed > 0 {
            log::warn!(
                "{} positions repaired under {:?}: {} record(s) renumbered",
                event.kind,
                event.parent_id,
                event.changed
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_one_handler_per_event() {
        let bus = EventBus::new();
        register_audit_handlers(&bus);

        assert_eq!(bus.subscriber_count::<RecordAdded>(), 1);
        assert_eq!(bus.subscriber_count::<RecordRemoved>(), 1);
        assert_eq!(bus.subscriber_count::<RecordMoved>(), 1);
        assert_eq!(bus.subscriber_count::<RecordDuplicated>(), 1);
        assert_eq!(bus.subscriber_count::<RecordUpdated>(), 1);
        assert_eq!(bus.subscriber_count::<SiblingsNormalized>(), 1);
    }
}
