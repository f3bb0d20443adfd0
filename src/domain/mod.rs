// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod game;
pub mod genre;
pub mod movie;
pub mod music;
pub mod ordering;
pub mod program;
pub mod show;
pub mod validation;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Ordering capability shared by every kind
pub use ordering::{
    locate_sibling, sort_siblings, validate_dense_positions, Orderable, ParentScope,
};

// Movie Domain
pub use movie::{validate_movie, Movie};

// Show Domain (shows own seasons, seasons own episodes)
pub use show::{validate_episode, validate_season, validate_show, Episode, Season, Show};

// Music Domain (albums own songs)
pub use music::{validate_music, validate_song, Music, Song};

// Game Domain
pub use game::{validate_game, Game};

// Program Domain
pub use program::{validate_program, Program};

// Genre Domain
pub use genre::{validate_genre, Genre};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    /// The caller asked for an operation whose precondition does not hold
    /// (moving the first record up, removing an unsaved record, ...).
    #[error("Precondition violation: {0}")]
    PreconditionViolation(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
