pub mod entity;
pub mod invariants;

pub use entity::{Episode, Season, Show};
pub use invariants::{validate_episode, validate_season, validate_show};

use crate::domain::ordering::impl_orderable;

impl_orderable!(Show, kind = "show", validate = validate_show);
impl_orderable!(Season, kind = "season", parent = show_id, validate = validate_season);
impl_orderable!(Episode, kind = "episode", parent = season_id, validate = validate_episode);
