// src/repositories/sqlite/mappings.rs
//
// Table layout of every orderable kind.
//
// All parse failures are explicit conversion errors, never silent defaults.

use rusqlite::types::{Type, Value};
use rusqlite::Row;
use uuid::Uuid;

use crate::domain::{
    Episode, Game, Genre, Movie, Music, Orderable, Program, Season, Show, Song,
};
use crate::error::AppResult;

/// How one orderable kind is laid out in its table.
///
/// Every table has `id TEXT PRIMARY KEY` and `position INTEGER`; child
/// kinds add the parent column. `PAYLOAD_COLUMNS` and `payload_values`
/// must list the same columns in the same order.
pub trait SqliteMapping: Orderable {
    const TABLE: &'static str;

    const PARENT_COLUMN: Option<&'static str>;

    const PAYLOAD_COLUMNS: &'static [&'static str];

    fn payload_values(&self) -> AppResult<Vec<Value>>;

    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

fn conversion_error(
    row: &Row,
    column: &str,
    error: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    let index = row.as_ref().column_index(column).unwrap_or(0);
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(error))
}

fn uuid_column(row: &Row, column: &str) -> rusqlite::Result<Uuid> {
    let raw: String = row.get(column)?;
    Uuid::parse_str(&raw).map_err(|e| conversion_error(row, column, e))
}

fn optional_uuid_column(row: &Row, column: &str) -> rusqlite::Result<Option<Uuid>> {
    let raw: Option<String> = row.get(column)?;
    raw.map(|raw| Uuid::parse_str(&raw).map_err(|e| conversion_error(row, column, e)))
        .transpose()
}

/// Language lists are stored as a JSON array in a TEXT column.
fn list_column(row: &Row, column: &str) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(column)?;
    serde_json::from_str(&raw).map_err(|e| conversion_error(row, column, e))
}

fn list_value(values: &[String]) -> AppResult<Value> {
    Ok(Value::Text(serde_json::to_string(values)?))
}

// ---------------------------------------------------------------------
// Catalog-root kinds
// ---------------------------------------------------------------------

impl SqliteMapping for Movie {
    const TABLE: &'static str = "movies";
    const PARENT_COLUMN: Option<&'static str> = None;
    const PAYLOAD_COLUMNS: &'static [&'static str] = &[
        "title",
        "original_title",
        "year",
        "language",
        "subtitles",
        "length_minutes",
        "note",
    ];

    fn payload_values(&self) -> AppResult<Vec<Value>> {
        Ok(vec![
            Value::from(self.title.clone()),
            Value::from(self.original_title.clone()),
            Value::from(self.year),
            Value::from(self.language.clone()),
            list_value(&self.subtitles)?,
            Value::from(self.length_minutes),
            Value::from(self.note.clone()),
        ])
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Movie {
            id: Some(uuid_column(row, "id")?),
            position: Some(row.get("position")?),
            title: row.get("title")?,
            original_title: row.get("original_title")?,
            year: row.get("year")?,
            language: row.get("language")?,
            subtitles: list_column(row, "subtitles")?,
            length_minutes: row.get("length_minutes")?,
            note: row.get("note")?,
        })
    }
}

impl SqliteMapping for Show {
    const TABLE: &'static str = "shows";
    const PARENT_COLUMN: Option<&'static str> = None;
    const PAYLOAD_COLUMNS: &'static [&'static str] = &["title", "original_title", "note"];

    fn payload_values(&self) -> AppResult<Vec<Value>> {
        Ok(vec![
            Value::from(self.title.clone()),
            Value::from(self.original_title.clone()),
            Value::from(self.note.clone()),
        ])
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Show {
            id: Some(uuid_column(row, "id")?),
            position: Some(row.get("position")?),
            title: row.get("title")?,
            original_title: row.get("original_title")?,
            note: row.get("note")?,
        })
    }
}

impl SqliteMapping for Music {
    const TABLE: &'static str = "music";
    const PARENT_COLUMN: Option<&'static str> = None;
    const PAYLOAD_COLUMNS: &'static [&'static str] = &["title", "disc_count", "note"];

    fn payload_values(&self) -> AppResult<Vec<Value>> {
        Ok(vec![
            Value::from(self.title.clone()),
            Value::from(self.disc_count),
            Value::from(self.note.clone()),
        ])
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Music {
            id: Some(uuid_column(row, "id")?),
            position: Some(row.get("position")?),
            title: row.get("title")?,
            disc_count: row.get("disc_count")?,
            note: row.get("note")?,
        })
    }
}

impl SqliteMapping for Game {
    const TABLE: &'static str = "games";
    const PARENT_COLUMN: Option<&'static str> = None;
    const PAYLOAD_COLUMNS: &'static [&'static str] =
        &["title", "media_count", "needs_patch", "note"];

    fn payload_values(&self) -> AppResult<Vec<Value>> {
        Ok(vec![
            Value::from(self.title.clone()),
            Value::from(self.media_count),
            Value::from(self.needs_patch),
            Value::from(self.note.clone()),
        ])
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Game {
            id: Some(uuid_column(row, "id")?),
            position: Some(row.get("position")?),
            title: row.get("title")?,
            media_count: row.get("media_count")?,
            needs_patch: row.get("needs_patch")?,
            note: row.get("note")?,
        })
    }
}

impl SqliteMapping for Program {
    const TABLE: &'static str = "programs";
    const PARENT_COLUMN: Option<&'static str> = None;
    const PAYLOAD_COLUMNS: &'static [&'static str] = &["title", "media_count", "note"];

    fn payload_values(&self) -> AppResult<Vec<Value>> {
        Ok(vec![
            Value::from(self.title.clone()),
            Value::from(self.media_count),
            Value::from(self.note.clone()),
        ])
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Program {
            id: Some(uuid_column(row, "id")?),
            position: Some(row.get("position")?),
            title: row.get("title")?,
            media_count: row.get("media_count")?,
            note: row.get("note")?,
        })
    }
}

impl SqliteMapping for Genre {
    const TABLE: &'static str = "genres";
    const PARENT_COLUMN: Option<&'static str> = None;
    const PAYLOAD_COLUMNS: &'static [&'static str] = &["name"];

    fn payload_values(&self) -> AppResult<Vec<Value>> {
        Ok(vec![Value::from(self.name.clone())])
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Genre {
            id: Some(uuid_column(row, "id")?),
            position: Some(row.get("position")?),
            name: row.get("name")?,
        })
    }
}

// ---------------------------------------------------------------------
// Child kinds
// ---------------------------------------------------------------------

impl SqliteMapping for Season {
    const TABLE: &'static str = "seasons";
    const PARENT_COLUMN: Option<&'static str> = Some("show_id");
    const PAYLOAD_COLUMNS: &'static [&'static str] = &[
        "number",
        "start_year",
        "end_year",
        "language",
        "subtitles",
        "note",
    ];

    fn payload_values(&self) -> AppResult<Vec<Value>> {
        Ok(vec![
            Value::from(self.number),
            Value::from(self.start_year),
            Value::from(self.end_year),
            Value::from(self.language.clone()),
            list_value(&self.subtitles)?,
            Value::from(self.note.clone()),
        ])
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Season {
            id: Some(uuid_column(row, "id")?),
            show_id: optional_uuid_column(row, "show_id")?,
            position: Some(row.get("position")?),
            number: row.get("number")?,
            start_year: row.get("start_year")?,
            end_year: row.get("end_year")?,
            language: row.get("language")?,
            subtitles: list_column(row, "subtitles")?,
            note: row.get("note")?,
        })
    }
}

impl SqliteMapping for Episode {
    const TABLE: &'static str = "episodes";
    const PARENT_COLUMN: Option<&'static str> = Some("season_id");
    const PAYLOAD_COLUMNS: &'static [&'static str] =
        &["number", "title", "length_minutes", "note"];

    fn payload_values(&self) -> AppResult<Vec<Value>> {
        Ok(vec![
            Value::from(self.number),
            Value::from(self.title.clone()),
            Value::from(self.length_minutes),
            Value::from(self.note.clone()),
        ])
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Episode {
            id: Some(uuid_column(row, "id")?),
            season_id: optional_uuid_column(row, "season_id")?,
            position: Some(row.get("position")?),
            number: row.get("number")?,
            title: row.get("title")?,
            length_minutes: row.get("length_minutes")?,
            note: row.get("note")?,
        })
    }
}

impl SqliteMapping for Song {
    const TABLE: &'static str = "songs";
    const PARENT_COLUMN: Option<&'static str> = Some("music_id");
    const PAYLOAD_COLUMNS: &'static [&'static str] = &["title", "length_seconds", "note"];

    fn payload_values(&self) -> AppResult<Vec<Value>> {
        Ok(vec![
            Value::from(self.title.clone()),
            Value::from(self.length_seconds),
            Value::from(self.note.clone()),
        ])
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Song {
            id: Some(uuid_column(row, "id")?),
            music_id: optional_uuid_column(row, "music_id")?,
            position: Some(row.get("position")?),
            title: row.get("title")?,
            length_seconds: row.get("length_seconds")?,
            note: row.get("note")?,
        })
    }
}
