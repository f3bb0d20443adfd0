//! Critical Genre Invariants:
//!
//! 1. Genre name cannot be empty
//! 2. Genres are ordered at the catalog root

pub mod entity;

pub use entity::Genre;

use crate::domain::ordering::impl_orderable;
use crate::domain::validation::require_non_blank;
use crate::domain::DomainResult;

/// Validates Genre invariants
pub fn validate_genre(genre: &Genre) -> DomainResult<()> {
    require_non_blank("Genre name", &genre.name)
}

impl_orderable!(Genre, kind = "genre", validate = validate_genre);
