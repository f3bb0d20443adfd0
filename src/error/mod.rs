// src/error/mod.rs
//
// Crate-wide error type. Store failures (rusqlite, r2d2) pass through
// unchanged; domain rule violations arrive wrapped in `AppError::Domain`.

pub mod types;

pub use types::{AppError, AppResult};
