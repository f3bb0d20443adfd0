//! Critical Music Invariants:
//!
//! 1. Album title cannot be empty, an album has at least one disc
//! 2. A Song belongs to exactly one album and keeps it for life
//! 3. Deleting an album deletes its songs

pub mod entity;

pub use entity::{Music, Song};

use crate::domain::ordering::impl_orderable;
use crate::domain::validation::{require_non_blank, require_positive};
use crate::domain::DomainResult;

/// Validates Music album invariants
pub fn validate_music(music: &Music) -> DomainResult<()> {
    require_non_blank("Music title", &music.title)?;
    require_positive("Music disc count", music.disc_count)?;
    Ok(())
}

/// Validates Song invariants
pub fn validate_song(song: &Song) -> DomainResult<()> {
    require_non_blank("Song title", &song.title)
}

impl_orderable!(Music, kind = "music", validate = validate_music);
impl_orderable!(Song, kind = "song", parent = music_id, validate = validate_song);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Orderable;
    use uuid::Uuid;

    #[test]
    fn test_valid_music() {
        assert!(validate_music(&Music::new("Kind of Blue", 1)).is_ok());
    }

    #[test]
    fn test_zero_discs_fails() {
        assert!(validate_music(&Music::new("Kind of Blue", 0)).is_err());
    }

    #[test]
    fn test_song_title_required() {
        assert!(validate_song(&Song::new("So What", 562)).is_ok());
        assert!(validate_song(&Song::new("", 562)).is_err());
    }

    #[test]
    fn test_attach_sets_parent() {
        let album = Uuid::new_v4();
        let mut song = Song::new("So What", 562);
        assert_eq!(song.parent(), None);

        song.attach(album);
        assert_eq!(song.parent(), Some(album));
        assert_eq!(song.music_id, Some(album));
    }

    #[test]
    fn test_display_song_length() {
        assert_eq!(Song::new("So What", 562).to_string(), "So What (9:22)");
    }
}
