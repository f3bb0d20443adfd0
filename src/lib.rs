// src/lib.rs
// MediaCatalog - Local media catalog with position-ordered lists
//
// Architecture:
// - Domain-centric: entities and their invariants live in `domain`
// - One ordering capability: every kind is Orderable, one generic manager
// - Event-driven: services emit events, handlers observe them
// - Explicit: positions change only through the manager, never implicitly

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_dense_positions,
    validate_episode,
    validate_game,
    validate_genre,
    validate_movie,
    validate_music,
    validate_program,
    validate_season,
    validate_show,
    validate_song,
    DomainError,
    // Catalog root kinds
    Game,
    Genre,
    Movie,
    Music,
    // Ordering capability
    Orderable,
    ParentScope,
    Program,
    Show,
    // Child kinds
    Episode,
    Season,
    Song,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    register_audit_handlers,
    DomainEvent,
    EventBus,
    EventLogEntry,
    RecordAdded,
    RecordDuplicated,
    RecordMoved,
    RecordRemoved,
    RecordUpdated,
    SiblingsNormalized,
};

// ============================================================================
// PUBLIC API - Configuration & Database
// ============================================================================

pub use config::CatalogConfig;
pub use db::{create_connection_pool, create_memory_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    CatalogRepositories, OrderedRepository, SqliteMapping, SqliteOrderedRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CatalogService, CatalogTotals, OrderedCollectionManager};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{execute, AppState, Cli, ErrorResponse};
