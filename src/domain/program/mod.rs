pub mod entity;

pub use entity::Program;

use crate::domain::ordering::impl_orderable;
use crate::domain::validation::{require_non_blank, require_positive};
use crate::domain::DomainResult;

/// Validates Program invariants
pub fn validate_program(program: &Program) -> DomainResult<()> {
    require_non_blank("Program title", &program.title)?;
    require_positive("Program media count", program.media_count)?;
    Ok(())
}

impl_orderable!(Program, kind = "program", validate = validate_program);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_program() {
        assert!(validate_program(&Program::new("GIMP", 1)).is_ok());
        assert!(validate_program(&Program::new("", 1)).is_err());
    }
}
