//! Diesel row models and entity mapping for todo persistence.
//!
//! [`TodoRow`] is the flat storage-facing encoding of a todo. The mapping is
//! deliberately lossy on one field: `date` is truncated to the UTC calendar
//! day, because only the date component is semantically meaningful there.
//! `time` carries the full RFC 3339 timestamp at millisecond precision even
//! though only its time-of-day component is used downstream.

use super::schema::todos;
use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use diesel::prelude::*;

use crate::todo::domain::{Category, PersistedTodoData, TodoEntity, TodoId};
use crate::todo::ports::TodoRepositoryError;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodoRow {
    /// Item identifier.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub id: String,
    /// Item title.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub title: String,
    /// Category storage tag.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub category: String,
    /// Calendar date, `YYYY-MM-DD`.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub date: String,
    /// Time of day, full RFC 3339 datetime.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub time: String,
    /// Free-form notes, NULL when absent.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub notes: Option<String>,
    /// Completion flag, 0 or 1.
    #[diesel(sql_type = diesel::sql_types::Integer)]
    pub is_completed: i32,
    /// Store-assigned creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub created_at: String,
}

/// Insert model for todo records.
///
/// Excludes `created_at`: that column is assigned by the store itself via
/// its schema default and is used only for ordering.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Item identifier.
    pub id: String,
    /// Item title.
    pub title: String,
    /// Category storage tag.
    pub category: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Time of day, full RFC 3339 datetime.
    pub time: String,
    /// Free-form notes, NULL when absent.
    pub notes: Option<String>,
    /// Completion flag, 0 or 1.
    pub is_completed: i32,
}

/// Encodes a todo entity as an insertable row.
///
/// The encoding is total: every entity has a valid row representation.
#[must_use]
pub fn to_new_row(todo: &TodoEntity) -> NewTodoRow {
    NewTodoRow {
        id: todo.id_str().to_owned(),
        title: todo.title().to_owned(),
        category: todo.category_tag().to_owned(),
        date: todo.date().format("%Y-%m-%d").to_string(),
        time: todo.time().to_rfc3339_opts(SecondsFormat::Millis, true),
        notes: if todo.notes().is_empty() {
            None
        } else {
            Some(todo.notes().to_owned())
        },
        is_completed: i32::from(todo.is_completed()),
    }
}

impl TryFrom<TodoRow> for TodoEntity {
    type Error = TodoRepositoryError;

    /// Decodes a stored row back into the domain entity.
    ///
    /// The stored identifier is passed through verbatim, preserving
    /// storage-assigned identity. Decoding failures mean the record is
    /// corrupt and surface as read errors.
    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        let category =
            Category::try_from(row.category.as_str()).map_err(TodoRepositoryError::read)?;
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
            .map_err(TodoRepositoryError::read)?
            .and_time(NaiveTime::MIN)
            .and_utc();
        let time = DateTime::parse_from_rfc3339(&row.time)
            .map_err(TodoRepositoryError::read)?
            .with_timezone(&Utc);

        Ok(Self::from_persisted(PersistedTodoData {
            id: TodoId::from_string(row.id),
            title: row.title,
            category,
            date,
            time,
            notes: row.notes.unwrap_or_default(),
            is_completed: row.is_completed != 0,
        }))
    }
}
