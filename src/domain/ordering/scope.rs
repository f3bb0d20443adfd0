use std::fmt::Debug;

use uuid::Uuid;

use crate::domain::{DomainError, DomainResult};

/// Key of the scope owning a sibling set.
///
/// Catalog-root kinds (movies, shows, music, games, programs, genres) use `()`;
/// child kinds (seasons, episodes, songs) use the owning record's `Uuid`.
pub trait ParentScope: Copy + Eq + Debug + Send + Sync + 'static {
    /// Column value persisted for this scope (`None` for the root).
    fn as_uuid(&self) -> Option<Uuid>;

    /// Rebuild a scope from an optional id, rejecting mismatches.
    fn from_uuid(id: Option<Uuid>) -> DomainResult<Self>;
}

impl ParentScope for () {
    fn as_uuid(&self) -> Option<Uuid> {
        None
    }

    fn from_uuid(id: Option<Uuid>) -> DomainResult<Self> {
        match id {
            None => Ok(()),
            Some(id) => Err(DomainError::PreconditionViolation(format!(
                "catalog-root records have no parent, got {}",
                id
            ))),
        }
    }
}

impl ParentScope for Uuid {
    fn as_uuid(&self) -> Option<Uuid> {
        Some(*self)
    }

    fn from_uuid(id: Option<Uuid>) -> DomainResult<Self> {
        id.ok_or_else(|| {
            DomainError::PreconditionViolation("a parent id is required".to_string())
        })
    }
}
