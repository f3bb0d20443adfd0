use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A genre label shown in the catalog's genre list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Assigned by the store on first save
    pub id: Option<Uuid>,

    /// Rank in the catalog's genre list
    pub position: Option<u32>,

    pub name: String,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            position: None,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
