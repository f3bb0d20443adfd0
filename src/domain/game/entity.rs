use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A game in the catalog root list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: Option<Uuid>,

    pub position: Option<u32>,

    pub title: String,

    /// Number of installation media (discs, cartridges, ...)
    pub media_count: u32,

    /// Whether the game needs an external patch to run
    #[serde(default)]
    pub needs_patch: bool,

    pub note: Option<String>,
}

impl Game {
    pub fn new(title: impl Into<String>, media_count: u32) -> Self {
        Self {
            id: None,
            position: None,
            title: title.into(),
            media_count,
            needs_patch: false,
            note: None,
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
