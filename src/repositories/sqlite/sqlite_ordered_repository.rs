// src/repositories/sqlite/sqlite_ordered_repository.rs
//
// One SQLite implementation for every orderable kind.
//
// RULES:
// - Upserts use ON CONFLICT(id) DO UPDATE, never INSERT OR REPLACE:
//   REPLACE deletes the old row first, which cascades to child tables
// - Batches run in a single transaction
// - Identity is assigned here, on first save

use std::marker::PhantomData;
use std::sync::Arc;

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};
use uuid::Uuid;

use super::mappings::SqliteMapping;
use crate::db::ConnectionPool;
use crate::domain::ParentScope;
use crate::error::{AppError, AppResult};
use crate::repositories::OrderedRepository;

pub struct SqliteOrderedRepository<T> {
    pool: Arc<ConnectionPool>,
    _kind: PhantomData<fn() -> T>,
}

impl<T: SqliteMapping> SqliteOrderedRepository<T> {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            pool,
            _kind: PhantomData,
        }
    }

    fn all_columns() -> Vec<&'static str> {
        let mut columns = vec!["id"];
        columns.extend(T::PARENT_COLUMN);
        columns.push("position");
        columns.extend_from_slice(T::PAYLOAD_COLUMNS);
        columns
    }

    fn upsert_sql() -> String {
        let columns = Self::all_columns();
        let placeholders = (1..=columns.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let updates = columns[1..]
            .iter()
            .map(|column| format!("{column} = excluded.{column}"))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT(id) DO UPDATE SET {}",
            T::TABLE,
            columns.join(", "),
            placeholders,
            updates
        )
    }

    fn upsert(conn: &Connection, id: Uuid, record: &T) -> AppResult<()> {
        let mut values = vec![Value::Text(id.to_string())];

        if T::PARENT_COLUMN.is_some() {
            let parent = record
                .parent()
                .and_then(|parent| parent.as_uuid())
                .ok_or_else(|| {
                    AppError::precondition(format!("{} {} is not attached to a parent", T::KIND, id))
                })?;
            values.push(Value::Text(parent.to_string()));
        }

        let position = record.position().ok_or_else(|| {
            AppError::precondition(format!("{} {} has no position", T::KIND, id))
        })?;
        values.push(Value::from(position));
        values.extend(record.payload_values()?);

        conn.execute(&Self::upsert_sql(), params_from_iter(&values))?;
        log::trace!("upserted {} {} at position {}", T::KIND, id, position);
        Ok(())
    }
}

impl<T: SqliteMapping> OrderedRepository<T> for SqliteOrderedRepository<T> {
    fn find_all_ordered(&self, parent: T::Parent) -> AppResult<Vec<T>> {
        let conn = self.pool.get()?;

        let records = match (T::PARENT_COLUMN, parent.as_uuid()) {
            (Some(column), Some(parent_id)) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT * FROM {} WHERE {} = ?1 ORDER BY position, id",
                    T::TABLE,
                    column
                ))?;
                let rows = stmt
                    .query_map(params![parent_id.to_string()], |row| T::from_row(row))?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            (None, None) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT * FROM {} ORDER BY position, id",
                    T::TABLE
                ))?;
                let rows = stmt
                    .query_map([], |row| T::from_row(row))?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            _ => {
                return Err(AppError::Other(format!(
                    "parent scope does not match the {} table layout",
                    T::TABLE
                )));
            }
        };

        Ok(records)
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<T>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("SELECT * FROM {} WHERE id = ?1", T::TABLE))?;

        match stmt.query_row(params![id.to_string()], |row| T::from_row(row)) {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn save(&self, mut record: T) -> AppResult<T> {
        let id = match record.id() {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4();
                record.set_id(id);
                id
            }
        };

        let conn = self.pool.get()?;
        Self::upsert(&conn, id, &record)?;
        Ok(record)
    }

    fn save_all(&self, records: &[T]) -> AppResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;
        for record in records {
            let id = record.id().ok_or_else(|| {
                AppError::precondition(format!("batch update of an unsaved {}", T::KIND))
            })?;
            Self::upsert(&tx, id, record)?;
        }
        tx.commit()?;

        log::debug!("saved {} {} record(s) in one batch", records.len(), T::KIND);
        Ok(())
    }

    fn delete(&self, record: &T) -> AppResult<()> {
        let id = record.id().ok_or_else(|| {
            AppError::precondition(format!("cannot delete an unsaved {}", T::KIND))
        })?;

        let conn = self.pool.get()?;
        conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", T::TABLE),
            params![id.to_string()],
        )?;
        Ok(())
    }

    fn count_all(&self) -> AppResult<u64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", T::TABLE), [], |row| {
            row.get(0)
        })?;
        Ok(count as u64)
    }
}
