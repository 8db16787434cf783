//! Application service facade over the todo use cases.
//!
//! Each method is one use case and calls exactly one repository method.
//! Repository errors propagate unchanged: the service neither retries nor
//! translates them, leaving user-facing presentation to the caller.

use crate::todo::{
    domain::{Category, TodoDomainError, TodoEntity, TodoId},
    ports::{TodoRepository, TodoRepositoryError},
};
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Request payload for creating a todo from raw user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTodoRequest {
    title: String,
    category: String,
    date: String,
    time: String,
    notes: String,
}

impl AddTodoRequest {
    /// Creates a request with the required fields.
    ///
    /// `category` is a storage tag (`task`, `event`, `goal`), `date` is
    /// `YYYY-MM-DD`, and `time` is `HH:MM` with optional seconds.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            date: date.into(),
            time: time.into(),
            notes: String::new(),
        }
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoApplicationError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo application service operations.
pub type TodoApplicationResult<T> = Result<T, TodoApplicationError>;

/// Todo application service.
///
/// A thin facade wired with a concrete repository at composition time by
/// constructor injection.
#[derive(Debug, Clone)]
pub struct TodoApplicationService<R>
where
    R: TodoRepository,
{
    repository: Arc<R>,
}

impl<R> TodoApplicationService<R>
where
    R: TodoRepository,
{
    /// Creates a service over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Adds a new todo from raw user input and returns the created entity.
    ///
    /// Validates that the title is non-empty after trimming, parses the
    /// category tag and the date/time strings, assigns a fresh identifier,
    /// and persists the item as not completed. Both datetime fields are
    /// interpreted as UTC; `time` is the requested calendar date at the
    /// requested time of day.
    ///
    /// # Errors
    ///
    /// Returns [`TodoApplicationError::Domain`] when the payload fails
    /// validation and [`TodoApplicationError::Repository`] when persistence
    /// fails.
    pub async fn add_todo(&self, request: AddTodoRequest) -> TodoApplicationResult<TodoEntity> {
        if request.title.trim().is_empty() {
            return Err(TodoDomainError::EmptyTitle.into());
        }
        let category = Category::try_from(request.category.as_str())?;
        let date = parse_date(&request.date)?;
        let time = parse_time(&request.time)?;

        let todo = TodoEntity::new(
            request.title,
            category,
            date.and_time(NaiveTime::MIN).and_utc(),
            date.and_time(time).and_utc(),
            request.notes.trim(),
        );
        self.repository.create_todo(&todo).await?;
        debug!(id = %todo.id(), category = todo.category_tag(), "todo created");
        Ok(todo)
    }

    /// Returns all todos, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TodoApplicationError::Repository`] when the store cannot
    /// be read.
    pub async fn get_all_todos(&self) -> TodoApplicationResult<Vec<TodoEntity>> {
        Ok(self.repository.fetch_all_todos().await?)
    }

    /// Updates the completion flag of the todo matching `id`.
    ///
    /// A no-op when the id is unknown, per the repository contract.
    ///
    /// # Errors
    ///
    /// Returns [`TodoApplicationError::Repository`] when the store rejects
    /// the update.
    pub async fn update_todo_status(
        &self,
        id: &str,
        is_completed: bool,
    ) -> TodoApplicationResult<()> {
        let todo_id = TodoId::from_string(id);
        self.repository
            .update_todo_status(&todo_id, is_completed)
            .await?;
        debug!(%todo_id, is_completed, "todo status updated");
        Ok(())
    }

    /// Deletes the todo matching `id`.
    ///
    /// A no-op when the id is unknown, per the repository contract.
    ///
    /// # Errors
    ///
    /// Returns [`TodoApplicationError::Repository`] when the store rejects
    /// the removal.
    pub async fn delete_todo(&self, id: &str) -> TodoApplicationResult<()> {
        let todo_id = TodoId::from_string(id);
        self.repository.delete_todo(&todo_id).await?;
        debug!(%todo_id, "todo deleted");
        Ok(())
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, TodoDomainError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| TodoDomainError::InvalidDate(raw.to_owned()))
}

fn parse_time(raw: &str) -> Result<NaiveTime, TodoDomainError> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| TodoDomainError::InvalidTime(raw.to_owned()))
}
