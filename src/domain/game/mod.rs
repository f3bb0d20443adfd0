//! Critical Game Invariants:
//!
//! 1. Title cannot be empty
//! 2. A game ships on at least one medium

pub mod entity;

pub use entity::Game;

use crate::domain::ordering::impl_orderable;
use crate::domain::validation::{require_non_blank, require_positive};
use crate::domain::DomainResult;

/// Validates Game invariants
pub fn validate_game(game: &Game) -> DomainResult<()> {
    require_non_blank("Game title", &game.title)?;
    require_positive("Game media count", game.media_count)?;
    Ok(())
}

impl_orderable!(Game, kind = "game", validate = validate_game);
