use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A software program in the catalog root list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: Option<Uuid>,

    pub position: Option<u32>,

    pub title: String,

    pub media_count: u32,

    pub note: Option<String>,
}

impl Program {
    pub fn new(title: impl Into<String>, media_count: u32) -> Self {
        Self {
            id: None,
            position: None,
            title: title.into(),
            media_count,
            note: None,
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
