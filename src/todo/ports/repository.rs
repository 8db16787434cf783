//! Repository port for todo persistence.

use crate::todo::domain::{TodoEntity, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// The four operations below are the full capability set a storage backend
/// must provide. Adapters are selected at composition time by constructor
/// injection, never by runtime type inspection.
///
/// Missing-id policy: [`update_todo_status`](Self::update_todo_status) and
/// [`delete_todo`](Self::delete_todo) are silent no-ops when no record
/// matches the identifier. This permissiveness is a deliberate contract,
/// shared by every adapter and covered by the adapter test suites.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persists a brand-new todo record.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Write`] when the underlying store
    /// rejects the record, for example on a duplicate primary key. Such
    /// failures surface to the caller rather than being swallowed.
    async fn create_todo(&self, todo: &TodoEntity) -> TodoRepositoryResult<()>;

    /// Returns all todo records, newest-created-first.
    ///
    /// Ordering follows the store's own creation order, not any
    /// client-visible field. The result is eagerly materialized, safe to
    /// call repeatedly, and never mutates state.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Read`] when the store cannot be read
    /// or a persisted record cannot be decoded.
    async fn fetch_all_todos(&self) -> TodoRepositoryResult<Vec<TodoEntity>>;

    /// Updates exactly the completion flag of the record matching `id`.
    ///
    /// A no-op when no record matches.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Write`] when the store rejects the
    /// update.
    async fn update_todo_status(&self, id: &TodoId, is_completed: bool)
    -> TodoRepositoryResult<()>;

    /// Removes the record matching `id`.
    ///
    /// A no-op when no record matches.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Write`] when the store rejects the
    /// removal.
    async fn delete_todo(&self, id: &TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The store rejected a write (insert, update, or delete).
    #[error("storage write error: {0}")]
    Write(Arc<dyn std::error::Error + Send + Sync>),

    /// The store could not be read, or a persisted record is corrupt.
    #[error("storage read error: {0}")]
    Read(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a write-side failure.
    #[must_use]
    pub fn write(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Write(Arc::new(err))
    }

    /// Wraps a read-side failure.
    #[must_use]
    pub fn read(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Read(Arc::new(err))
    }
}
