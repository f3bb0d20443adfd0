// src/domain/validation.rs
//
// Field-presence checks shared by the per-kind validators.

use super::{DomainError, DomainResult};

/// Earliest year accepted for release and season years.
pub const MIN_YEAR: i32 = 1930;

/// Latest year accepted for release and season years.
pub const MAX_YEAR: i32 = 2100;

pub fn require_non_blank(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

pub fn require_year(field: &str, year: i32) -> DomainResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DomainError::InvariantViolation(format!(
            "{} must be between {} and {}, got {}",
            field, MIN_YEAR, MAX_YEAR, year
        )));
    }
    Ok(())
}

pub fn require_positive(field: &str, value: u32) -> DomainResult<()> {
    if value == 0 {
        return Err(DomainError::InvariantViolation(format!(
            "{} must be positive",
            field
        )));
    }
    Ok(())
}

/// Optional free-text fields may be absent, but not present-and-blank.
pub fn require_non_blank_if_present(field: &str, value: Option<&str>) -> DomainResult<()> {
    match value {
        Some(v) => require_non_blank(field, v),
        None => Ok(()),
    }
}

/// Every entry of a language list must be non-blank.
pub fn require_non_blank_entries(field: &str, values: &[String]) -> DomainResult<()> {
    values
        .iter()
        .try_for_each(|value| require_non_blank(field, value))
}
