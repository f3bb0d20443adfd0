pub mod entity;
pub mod invariants;

pub use entity::Movie;
pub use invariants::validate_movie;

use crate::domain::ordering::impl_orderable;

impl_orderable!(Movie, kind = "movie", validate = validate_movie);
