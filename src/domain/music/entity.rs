use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A music album in the catalog root list
/// Albums own an ordered list of songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Music {
    pub id: Option<Uuid>,

    pub position: Option<u32>,

    pub title: String,

    /// Number of physical discs
    pub disc_count: u32,

    pub note: Option<String>,
}

/// A song on a music album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: Option<Uuid>,

    /// Reference to parent Music album (set on add)
    pub music_id: Option<Uuid>,

    /// Track order on the album
    pub position: Option<u32>,

    pub title: String,

    /// Running time in seconds (0 when unknown)
    pub length_seconds: u32,

    pub note: Option<String>,
}

impl Music {
    pub fn new(title: impl Into<String>, disc_count: u32) -> Self {
        Self {
            id: None,
            position: None,
            title: title.into(),
            disc_count,
            note: None,
        }
    }
}

impl Song {
    pub fn new(title: impl Into<String>, length_seconds: u32) -> Self {
        Self {
            id: None,
            music_id: None,
            position: None,
            title: title.into(),
            length_seconds,
            note: None,
        }
    }
}

impl std::fmt::Display for Music {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}:{:02})",
            self.title,
            self.length_seconds / 60,
            self.length_seconds % 60
        )
    }
}
