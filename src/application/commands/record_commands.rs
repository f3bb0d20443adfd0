// src/application/commands/record_commands.rs
//
// One handler for every orderable kind.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::application::cli::RecordAction;
use crate::domain::{Orderable, ParentScope};
use crate::error::{AppError, AppResult};
use crate::services::OrderedCollectionManager;

pub(crate) fn to_json<S: Serialize>(value: &S) -> AppResult<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Turn the optional `--parent` flag into the kind's scope
fn parent_scope<T: Orderable>(parent: Option<Uuid>) -> AppResult<T::Parent> {
    Ok(<T::Parent as ParentScope>::from_uuid(parent)?)
}

/// Load a stored record or fail with NotFound naming the id
pub(crate) fn require<T: Orderable>(
    manager: &OrderedCollectionManager<T>,
    id: Uuid,
) -> AppResult<T> {
    manager
        .get(id)?
        .ok_or_else(|| AppError::not_found(T::KIND, id))
}

/// The sibling set a stored record belongs to, after a change
fn siblings_of<T: Orderable + Serialize>(
    manager: &OrderedCollectionManager<T>,
    record: &T,
) -> AppResult<Value> {
    let parent = record
        .parent()
        .ok_or_else(|| AppError::precondition(format!("{} has no parent", T::KIND)))?;
    to_json(&manager.list(parent)?)
}

pub fn run_record_action<T>(
    manager: &OrderedCollectionManager<T>,
    action: RecordAction,
) -> AppResult<Value>
where
    T: Orderable + Serialize + DeserializeOwned,
{
    match action {
        RecordAction::List { parent } => to_json(&manager.list(parent_scope::<T>(parent)?)?),

        RecordAction::Get { id } => to_json(&require(manager, id)?),

        RecordAction::Add { parent, json } => {
            let record: T = serde_json::from_str(&json)?;
            to_json(&manager.add(parent_scope::<T>(parent)?, record)?)
        }

        RecordAction::Update { id, json } => {
            let mut record: T = serde_json::from_str(&json)?;
            if record.id().is_some_and(|payload_id| payload_id != id) {
                return Err(AppError::precondition(format!(
                    "payload id does not match --id {}",
                    id
                )));
            }
            record.set_id(id);
            to_json(&manager.update(record)?)
        }

        RecordAction::Remove { id } => {
            let record = require(manager, id)?;
            manager.remove(&record)?;
            Ok(json!({ "removed": id }))
        }

        RecordAction::MoveUp { id } => {
            let record = require(manager, id)?;
            manager.move_up(&record)?;
            siblings_of(manager, &record)
        }

        RecordAction::MoveDown { id } => {
            let record = require(manager, id)?;
            manager.move_down(&record)?;
            siblings_of(manager, &record)
        }

        RecordAction::Duplicate { id } => {
            let record = require(manager, id)?;
            to_json(&manager.duplicate(&record)?)
        }

        RecordAction::Normalize { parent } => {
            let changed = manager.normalize(parent_scope::<T>(parent)?)?;
            Ok(json!({ "changed": changed }))
        }
    }
}
