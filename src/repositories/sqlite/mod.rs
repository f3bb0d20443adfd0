// src/repositories/sqlite/mod.rs

pub mod mappings;
pub mod sqlite_ordered_repository;

pub use mappings::SqliteMapping;
pub use sqlite_ordered_repository::SqliteOrderedRepository;
