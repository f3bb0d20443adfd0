//! Ordering capability shared by every catalog kind.
//!
//! Critical Sibling Set Invariants:
//!
//! 1. Positions within one parent scope form the dense sequence 0..n
//! 2. No two live siblings share a position
//! 3. Sorting by position equals sorting by (position, id)
//! 4. Positions are assigned and changed only by the ordered collection manager
//! 5. Identity is assigned once, by the store, and never changes

pub mod invariants;
pub mod scope;

pub use invariants::{locate_sibling, sort_siblings, validate_dense_positions};
pub use scope::ParentScope;

use std::fmt::Debug;

use uuid::Uuid;

use crate::domain::DomainResult;

/// A record that lives in a position-ordered sibling set.
pub trait Orderable: Clone + Debug + Send + Sync + 'static {
    /// Scope that owns the sibling set (`()` for catalog-root kinds).
    type Parent: ParentScope;

    /// Stable kind name used in events, logs and table lookups.
    const KIND: &'static str;

    fn id(&self) -> Option<Uuid>;

    /// The store assigns identity on first insert; callers set it only to
    /// address a record that already exists.
    fn set_id(&mut self, id: Uuid);

    fn position(&self) -> Option<u32>;

    fn set_position(&mut self, position: u32);

    /// `None` while the record is not attached to any parent.
    fn parent(&self) -> Option<Self::Parent>;

    fn attach(&mut self, parent: Self::Parent);

    /// Copy of every payload field, with identity and position cleared.
    fn clone_payload(&self) -> Self;

    /// Field-level checks for this kind.
    fn validate(&self) -> DomainResult<()>;
}

/// Implements [`Orderable`] for an entity with `id` and `position` fields.
///
/// The scoped form names the `Option<Uuid>` field holding the parent id.
macro_rules! impl_orderable {
    ($ty:ident, kind = $kind:literal, validate = $validate:path) => {
        impl $crate::domain::ordering::Orderable for $ty {
            type Parent = ();

            const KIND: &'static str = $kind;

            fn id(&self) -> Option<::uuid::Uuid> {
                self.id
            }

            fn set_id(&mut self, id: ::uuid::Uuid) {
                self.id = Some(id);
            }

            fn position(&self) -> Option<u32> {
                self.position
            }

            fn set_position(&mut self, position: u32) {
                self.position = Some(position);
            }

            fn parent(&self) -> Option<()> {
                Some(())
            }

            fn attach(&mut self, _parent: ()) {}

            fn clone_payload(&self) -> Self {
                $ty {
                    id: None,
                    position: None,
                    ..self.clone()
                }
            }

            fn validate(&self) -> $crate::domain::DomainResult<()> {
                $validate(self)
            }
        }
    };
    ($ty:ident, kind = $kind:literal, parent = $field:ident, validate = $validate:path) => {
        impl $crate::domain::ordering::Orderable for $ty {
            type Parent = ::uuid::Uuid;

            const KIND: &'static str = $kind;

            fn id(&self) -> Option<::uuid::Uuid> {
                self.id
            }

            fn set_id(&mut self, id: ::uuid::Uuid) {
                self.id = Some(id);
            }

            fn position(&self) -> Option<u32> {
                self.position
            }

            fn set_position(&mut self, position: u32) {
                self.position = Some(position);
            }

            fn parent(&self) -> Option<::uuid::Uuid> {
                self.$field
            }

            fn attach(&mut self, parent: ::uuid::Uuid) {
                self.$field = Some(parent);
            }

            fn clone_payload(&self) -> Self {
                $ty {
                    id: None,
                    position: None,
                    ..self.clone()
                }
            }

            fn validate(&self) -> $crate::domain::DomainResult<()> {
                $validate(self)
            }
        }
    };
}

pub(crate) use impl_orderable;
