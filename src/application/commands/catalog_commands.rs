// src/application/commands/catalog_commands.rs
//
// Commands spanning more than one kind.

use serde_json::{json, Value};
use uuid::Uuid;

use super::record_commands::{require, to_json};
use crate::application::state::AppState;
use crate::db::{get_connection, get_database_stats, verify_database_integrity};
use crate::error::AppResult;

pub fn duplicate_show(state: &AppState, id: Uuid) -> AppResult<Value> {
    let show = require(state.catalog.shows(), id)?;
    to_json(&state.catalog.duplicate_show(&show)?)
}

pub fn duplicate_season(state: &AppState, id: Uuid) -> AppResult<Value> {
    let season = require(state.catalog.seasons(), id)?;
    to_json(&state.catalog.duplicate_season(&season)?)
}

pub fn duplicate_music(state: &AppState, id: Uuid) -> AppResult<Value> {
    let music = require(state.catalog.music(), id)?;
    to_json(&state.catalog.duplicate_music(&music)?)
}

pub fn totals(state: &AppState) -> AppResult<Value> {
    to_json(&state.catalog.totals()?)
}

/// Integrity check plus file and table sizes
pub fn check(state: &AppState) -> AppResult<Value> {
    let conn = get_connection(&state.pool)?;
    verify_database_integrity(&conn)?;
    let stats = get_database_stats(&conn)?;
    Ok(json!({ "integrity": "ok", "stats": stats }))
}
