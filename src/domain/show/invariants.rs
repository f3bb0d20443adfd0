use super::entity::{Episode, Season, Show};
use crate::domain::validation::{
    require_non_blank, require_non_blank_entries, require_non_blank_if_present,
    require_positive, require_year,
};
use crate::domain::{DomainError, DomainResult};

/// Validates Show invariants
pub fn validate_show(show: &Show) -> DomainResult<()> {
    require_non_blank("Show title", &show.title)?;
    require_non_blank_if_present("Show original title", show.original_title.as_deref())?;
    Ok(())
}

/// Validates Season invariants
///
/// Year range:
/// 1. Both years within the accepted range
/// 2. A season cannot end before it starts
pub fn validate_season(season: &Season) -> DomainResult<()> {
    require_positive("Season number", season.number)?;
    require_year("Season start year", season.start_year)?;
    require_year("Season end year", season.end_year)?;
    if season.start_year > season.end_year {
        return Err(DomainError::InvariantViolation(format!(
            "Season starts in {} but ends in {}",
            season.start_year, season.end_year
        )));
    }
    require_non_blank("Season language", &season.language)?;
    require_non_blank_entries("Season subtitles", &season.subtitles)?;
    Ok(())
}

/// Validates Episode invariants
pub fn validate_episode(episode: &Episode) -> DomainResult<()> {
    require_positive("Episode number", episode.number)?;
    require_non_blank("Episode title", &episode.title)?;
    Ok(())
}

/// Critical Show Invariants:
///
/// 1. A Season belongs to exactly one Show, an Episode to exactly one Season
/// 2. The parent reference never changes after add
/// 3. Deleting a Show deletes its Seasons; deleting a Season deletes its Episodes
/// 4. Season and Episode numbers are labels, positions are the order

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_show() {
        assert!(validate_show(&Show::new("The Wire")).is_ok());
    }

    #[test]
    fn test_blank_original_title_fails() {
        let mut show = Show::new("The Wire");
        show.original_title = Some(" ".to_string());
        assert!(validate_show(&show).is_err());
    }

    #[test]
    fn test_valid_season() {
        let season = Season::new(1, 2002, 2002, "en");
        assert!(validate_season(&season).is_ok());
    }

    #[test]
    fn test_season_ending_before_start_fails() {
        let season = Season::new(1, 2004, 2002, "en");
        assert!(validate_season(&season).is_err());
    }

    #[test]
    fn test_season_number_zero_fails() {
        let season = Season::new(0, 2002, 2002, "en");
        assert!(validate_season(&season).is_err());
    }

    #[test]
    fn test_episode_title_required() {
        assert!(validate_episode(&Episode::new(1, "The Target")).is_ok());
        assert!(validate_episode(&Episode::new(1, "")).is_err());
    }
}
