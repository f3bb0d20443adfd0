use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A movie in the catalog root list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Assigned by the store on first save
    pub id: Option<Uuid>,

    /// Rank in the catalog's movie list
    pub position: Option<u32>,

    /// Display title
    pub title: String,

    /// Title in the original language (optional)
    pub original_title: Option<String>,

    /// Release year
    pub year: i32,

    /// Spoken language of the owned copy
    pub language: String,

    /// Subtitle languages available on the owned copy
    #[serde(default)]
    pub subtitles: Vec<String>,

    /// Running time in minutes
    pub length_minutes: u32,

    pub note: Option<String>,
}

impl Movie {
    /// Create a new, unsaved Movie
    pub fn new(title: impl Into<String>, year: i32, language: impl Into<String>) -> Self {
        Self {
            id: None,
            position: None,
            title: title.into(),
            original_title: None,
            year,
            language: language.into(),
            subtitles: Vec::new(),
            length_minutes: 0,
            note: None,
        }
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}
