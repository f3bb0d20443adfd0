use super::entity::Movie;
use crate::domain::validation::{
    require_non_blank, require_non_blank_entries, require_non_blank_if_present,
    require_positive, require_year,
};
use crate::domain::DomainResult;

/// Validates all Movie invariants
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    require_non_blank("Movie title", &movie.title)?;
    require_non_blank_if_present("Movie original title", movie.original_title.as_deref())?;
    require_year("Movie year", movie.year)?;
    require_non_blank("Movie language", &movie.language)?;
    require_non_blank_entries("Movie subtitles", &movie.subtitles)?;
    require_positive("Movie length", movie.length_minutes)?;
    Ok(())
}

/// Critical Movie Invariants:
///
/// 1. Title and language are required
/// 2. Year is within the catalog's accepted range
/// 3. Length is known (non-zero)
/// 4. Movies are ordered at the catalog root

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        let mut movie = Movie::new("Alien", 1979, "en");
        movie.length_minutes = 117;
        movie
    }

    #[test]
    fn test_valid_movie() {
        assert!(validate_movie(&movie()).is_ok());
    }

    #[test]
    fn test_year_out_of_range_fails() {
        let mut m = movie();
        m.year = 1800;
        assert!(validate_movie(&m).is_err());
    }

    #[test]
    fn test_zero_length_fails() {
        let mut m = movie();
        m.length_minutes = 0;
        assert!(validate_movie(&m).is_err());
    }

    #[test]
    fn test_blank_subtitle_fails() {
        let mut m = movie();
        m.subtitles = vec!["cs".to_string(), "".to_string()];
        assert!(validate_movie(&m).is_err());
    }
}
