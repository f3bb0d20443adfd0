// src/repositories/ordered_repository.rs
//
// Record store contract for position-ordered sibling sets.
//
// The store is a dumb data mapper: it never renumbers, never validates
// payloads, never emits events. Ordering rules live in the manager.

use uuid::Uuid;

use crate::domain::Orderable;
use crate::error::AppResult;

// ---------------------------------------------------------------------
// Repository contract
// ---------------------------------------------------------------------
pub trait OrderedRepository<T: Orderable>: Send + Sync {
    /// All siblings under `parent`, sorted by `(position, id)`.
    fn find_all_ordered(&self, parent: T::Parent) -> AppResult<Vec<T>>;

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<T>>;

    /// Insert or update one record, assigning a fresh identity if absent.
    fn save(&self, record: T) -> AppResult<T>;

    /// Update a batch of already-persisted records atomically.
    fn save_all(&self, records: &[T]) -> AppResult<()>;

    /// Delete by identity. Child sibling sets go with it.
    fn delete(&self, record: &T) -> AppResult<()>;

    /// Number of records of this kind under every parent.
    fn count_all(&self) -> AppResult<u64>;
}
