// src/services/ordered_collection.rs
//
// Ordered Collection Manager - Sibling Set Reordering
//
// CRITICAL RULES:
// - Every operation re-reads the sibling set from the store (no caching)
// - Only records whose position changed are written back
// - Position batches go through save_all (one transaction in SQLite)
// - Store errors are returned unchanged, never retried
// - Preconditions are checked against the stored record, not the caller's copy
// - Events are emitted after the write lock is released, so handlers may
//   call back into the same manager
//
// KNOWN RISK: remove (delete, then shift) and duplicate (shift, then insert)
// are two store calls. A failure between them leaves the set non-dense;
// `normalize` repairs it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::domain::{locate_sibling, sort_siblings, Orderable, ParentScope};
use crate::error::{AppError, AppResult};
use crate::events::{
    EventBus, RecordAdded, RecordDuplicated, RecordMoved, RecordRemoved, RecordUpdated,
    SiblingsNormalized,
};
use crate::repositories::OrderedRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Keeps one kind's sibling sets densely numbered.
pub struct OrderedCollectionManager<T: Orderable> {
    repo: Arc<dyn OrderedRepository<T>>,
    event_bus: Arc<EventBus>,
    /// Serializes read-modify-write sequences within this process
    write_lock: Mutex<()>,
}

/// Sibling set read for one operation, with the target's index in it.
struct Located<T: Orderable> {
    parent: T::Parent,
    siblings: Vec<T>,
    index: usize,
    id: Uuid,
}

fn identity_of<T: Orderable>(record: &T) -> AppResult<Uuid> {
    record
        .id()
        .ok_or_else(|| AppError::precondition(format!("{} has not been saved yet", T::KIND)))
}

fn position_of<T: Orderable>(record: &T) -> AppResult<u32> {
    record.position().ok_or_else(|| {
        AppError::precondition(format!("{} has no position assigned", T::KIND))
    })
}

impl<T: Orderable> OrderedCollectionManager<T> {
    pub fn new(repo: Arc<dyn OrderedRepository<T>>, event_bus: Arc<EventBus>) -> Self {
        Self {
            repo,
            event_bus,
            write_lock: Mutex::new(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn siblings(&self, parent: T::Parent) -> AppResult<Vec<T>> {
        let mut siblings = self.repo.find_all_ordered(parent)?;
        sort_siblings(&mut siblings);
        Ok(siblings)
    }

    /// Read the sibling set a persisted record belongs to.
    fn locate(&self, record: &T) -> AppResult<Located<T>> {
        let id = identity_of(record)?;
        position_of(record)?;
        let parent = record.parent().ok_or_else(|| {
            AppError::precondition(format!("{} {} is not attached to a parent", T::KIND, id))
        })?;

        let siblings = self.siblings(parent)?;
        let index =
            locate_sibling(&siblings, id).ok_or_else(|| AppError::not_found(T::KIND, id))?;

        Ok(Located {
            parent,
            siblings,
            index,
            id,
        })
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// The sibling set under `parent`, in display order.
    pub fn list(&self, parent: T::Parent) -> AppResult<Vec<T>> {
        self.siblings(parent)
    }

    pub fn get(&self, id: Uuid) -> AppResult<Option<T>> {
        self.repo.get_by_id(id)
    }

    /// Records of this kind under every parent.
    pub fn count(&self) -> AppResult<u64> {
        self.repo.count_all()
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Append a new record at the end of the sibling set under `parent`.
    ///
    /// The record must be unsaved and unpositioned. No other sibling changes.
    pub fn add(&self, parent: T::Parent, mut record: T) -> AppResult<T> {
        if record.id().is_some() {
            return Err(AppError::precondition(format!(
                "{} is already saved; use update instead",
                T::KIND
            )));
        }
        if record.position().is_some() {
            return Err(AppError::precondition(format!(
                "new {} must not carry a position",
                T::KIND
            )));
        }
        record.validate()?;

        let (saved, id, position) = {
            let _guard = self.lock();
            let position = self.siblings(parent)?.len() as u32;
            record.attach(parent);
            record.set_position(position);

            let saved = self.repo.save(record)?;
            let id = identity_of(&saved)?;
            (saved, id, position)
        };

        self.event_bus
            .emit(RecordAdded::new(T::KIND, id, parent.as_uuid(), position));
        Ok(saved)
    }

    /// Delete a record and close the gap behind it.
    pub fn remove(&self, record: &T) -> AppResult<()> {
        let event = self.remove_locked(record)?;
        self.event_bus.emit(event);
        Ok(())
    }

    fn remove_locked(&self, record: &T) -> AppResult<RecordRemoved> {
        let _guard = self.lock();
        let located = self.locate(record)?;
        let removed = &located.siblings[located.index];
        let position = position_of(removed)?;

        self.repo.delete(removed)?;

        let mut shifted = Vec::new();
        for sibling in &located.siblings {
            let current = position_of(sibling)?;
            if current > position {
                let mut sibling = sibling.clone();
                sibling.set_position(current - 1);
                shifted.push(sibling);
            }
        }
        log::debug!(
            "removing {} {} at {}: {} sibling(s) shift up",
            T::KIND,
            located.id,
            position,
            shifted.len()
        );
        self.repo.save_all(&shifted)?;

        Ok(RecordRemoved::new(
            T::KIND,
            located.id,
            located.parent.as_uuid(),
            position,
            shifted.len(),
        ))
    }

    /// Swap a record with the sibling directly before it.
    pub fn move_up(&self, record: &T) -> AppResult<()> {
        self.swap_with_neighbour(record, Direction::Up)
    }

    /// Swap a record with the sibling directly after it.
    pub fn move_down(&self, record: &T) -> AppResult<()> {
        self.swap_with_neighbour(record, Direction::Down)
    }

    fn swap_with_neighbour(&self, record: &T, direction: Direction) -> AppResult<()> {
        let event = self.swap_locked(record, direction)?;
        self.event_bus.emit(event);
        Ok(())
    }

    fn swap_locked(&self, record: &T, direction: Direction) -> AppResult<RecordMoved> {
        let _guard = self.lock();
        let located = self.locate(record)?;
        let last = located.siblings.len() - 1;

        let neighbour = match direction {
            Direction::Up if located.index > 0 => located.index - 1,
            Direction::Down if located.index < last => located.index + 1,
            Direction::Up => {
                return Err(AppError::precondition(format!(
                    "{} {} is already first",
                    T::KIND,
                    located.id
                )));
            }
            Direction::Down => {
                return Err(AppError::precondition(format!(
                    "{} {} is already last",
                    T::KIND,
                    located.id
                )));
            }
        };

        let mut moved = located.siblings[located.index].clone();
        let mut displaced = located.siblings[neighbour].clone();
        let from = position_of(&moved)?;
        let to = position_of(&displaced)?;
        let displaced_id = identity_of(&displaced)?;

        moved.set_position(to);
        displaced.set_position(from);
        self.repo.save_all(&[moved, displaced])?;

        Ok(RecordMoved::new(T::KIND, located.id, displaced_id, from, to))
    }

    /// Insert a payload copy of a record directly after it.
    ///
    /// Later siblings shift down first; the copy is written last so no two
    /// stored siblings ever share its position.
    pub fn duplicate(&self, record: &T) -> AppResult<T> {
        let (saved, event) = self.duplicate_locked(record)?;
        self.event_bus.emit(event);
        Ok(saved)
    }

    fn duplicate_locked(&self, record: &T) -> AppResult<(T, RecordDuplicated)> {
        let _guard = self.lock();
        let located = self.locate(record)?;
        let source = &located.siblings[located.index];
        let insertion = position_of(source)? + 1;

        let mut shifted = Vec::new();
        for sibling in &located.siblings {
            let current = position_of(sibling)?;
            if current >= insertion {
                let mut sibling = sibling.clone();
                sibling.set_position(current + 1);
                shifted.push(sibling);
            }
        }
        log::debug!(
            "duplicating {} {} into {}: {} sibling(s) shift down",
            T::KIND,
            located.id,
            insertion,
            shifted.len()
        );
        self.repo.save_all(&shifted)?;

        let mut copy = source.clone_payload();
        copy.attach(located.parent);
        copy.set_position(insertion);
        let saved = self.repo.save(copy)?;
        let duplicate_id = identity_of(&saved)?;

        let event = RecordDuplicated::new(
            T::KIND,
            located.id,
            duplicate_id,
            located.parent.as_uuid(),
            insertion,
            shifted.len(),
        );
        Ok((saved, event))
    }

    /// Replace the payload of a stored record.
    ///
    /// Position and parent are taken from the stored record; callers cannot
    /// reorder or re-parent through an update.
    pub fn update(&self, mut record: T) -> AppResult<T> {
        let id = identity_of(&record)?;
        record.validate()?;

        let saved = {
            let _guard = self.lock();
            let stored = self
                .repo
                .get_by_id(id)?
                .ok_or_else(|| AppError::not_found(T::KIND, id))?;
            record.set_position(position_of(&stored)?);
            if let Some(parent) = stored.parent() {
                record.attach(parent);
            }
            self.repo.save(record)?
        };

        self.event_bus.emit(RecordUpdated::new(T::KIND, id));
        Ok(saved)
    }

    /// Renumber the sibling set under `parent` to 0..n in its current order.
    ///
    /// Returns how many records were rewritten (0 for a healthy set).
    pub fn normalize(&self, parent: T::Parent) -> AppResult<usize> {
        let rewritten = {
            let _guard = self.lock();
            let changed: Vec<T> = self
                .siblings(parent)?
                .into_iter()
                .enumerate()
                .filter_map(|(index, mut record)| {
                    let target = index as u32;
                    if record.position() == Some(target) {
                        None
                    } else {
                        record.set_position(target);
                        Some(record)
                    }
                })
                .collect();

            self.repo.save_all(&changed)?;
            changed.len()
        };

        self.event_bus
            .emit(SiblingsNormalized::new(T::KIND, parent.as_uuid(), rewritten));
        Ok(rewritten)
    }
}
