use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A TV show in the catalog root list
/// Shows own an ordered list of seasons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Assigned by the store on first save
    pub id: Option<Uuid>,

    /// Rank in the catalog's show list
    pub position: Option<u32>,

    pub title: String,

    pub original_title: Option<String>,

    pub note: Option<String>,
}

/// A season belonging to a Show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: Option<Uuid>,

    /// Reference to parent Show (set on add)
    pub show_id: Option<Uuid>,

    /// Rank among the show's seasons
    pub position: Option<u32>,

    /// Season number as printed on the release
    pub number: u32,

    pub start_year: i32,

    pub end_year: i32,

    pub language: String,

    #[serde(default)]
    pub subtitles: Vec<String>,

    pub note: Option<String>,
}

/// A single episode belonging to a Season
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: Option<Uuid>,

    /// Reference to parent Season (set on add)
    pub season_id: Option<Uuid>,

    /// Rank among the season's episodes
    pub position: Option<u32>,

    /// Episode number within the season
    pub number: u32,

    pub title: String,

    /// Running time in minutes (0 when unknown)
    pub length_minutes: u32,

    pub note: Option<String>,
}

impl Show {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            position: None,
            title: title.into(),
            original_title: None,
            note: None,
        }
    }
}

impl Season {
    /// Create a new, unattached Season
    pub fn new(number: u32, start_year: i32, end_year: i32, language: impl Into<String>) -> Self {
        Self {
            id: None,
            show_id: None,
            position: None,
            number,
            start_year,
            end_year,
            language: language.into(),
            subtitles: Vec::new(),
            note: None,
        }
    }
}

impl Episode {
    /// Create a new, unattached Episode
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            id: None,
            season_id: None,
            position: None,
            number,
            title: title.into(),
            length_minutes: 0,
            note: None,
        }
    }
}

impl std::fmt::Display for Show {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Season {} ({}-{})",
            self.number, self.start_year, self.end_year
        )
    }
}

impl std::fmt::Display for Episode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number, self.title)
    }
}
