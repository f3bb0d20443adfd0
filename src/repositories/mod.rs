// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO position arithmetic
// - NO event emission
// - NO cross-repository calls
// - Explicit SQL only

pub mod catalog_repositories;
pub mod ordered_repository;
pub mod sqlite;

pub use catalog_repositories::CatalogRepositories;
pub use ordered_repository::OrderedRepository;
pub use sqlite::{SqliteMapping, SqliteOrderedRepository};
