//! Process-lifetime in-memory todo repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{TodoEntity, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Entities are held in insertion order, which is creation order; fetching
/// reverses that sequence so the externally observed "newest first" ordering
/// matches the SQLite adapter and the two stay interchangeable under test.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<Vec<TodoEntity>>>,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned_write(message: String) -> TodoRepositoryError {
    TodoRepositoryError::write(std::io::Error::other(message))
}

fn poisoned_read(message: String) -> TodoRepositoryError {
    TodoRepositoryError::read(std::io::Error::other(message))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create_todo(&self, todo: &TodoEntity) -> TodoRepositoryResult<()> {
        let mut todos = self.state.write().map_err(|err| poisoned_write(err.to_string()))?;
        if todos.iter().any(|existing| existing.id() == todo.id()) {
            return Err(TodoRepositoryError::write(std::io::Error::other(format!(
                "duplicate todo identifier: {}",
                todo.id()
            ))));
        }
        todos.push(todo.clone());
        Ok(())
    }

    async fn fetch_all_todos(&self) -> TodoRepositoryResult<Vec<TodoEntity>> {
        let todos = self.state.read().map_err(|err| poisoned_read(err.to_string()))?;
        Ok(todos.iter().rev().cloned().collect())
    }

    async fn update_todo_status(
        &self,
        id: &TodoId,
        is_completed: bool,
    ) -> TodoRepositoryResult<()> {
        let mut todos = self.state.write().map_err(|err| poisoned_write(err.to_string()))?;
        // Unknown ids are a silent no-op per the port contract.
        if let Some(slot) = todos.iter_mut().find(|todo| todo.id() == id) {
            *slot = slot.with_completion(is_completed);
        }
        Ok(())
    }

    async fn delete_todo(&self, id: &TodoId) -> TodoRepositoryResult<()> {
        let mut todos = self.state.write().map_err(|err| poisoned_write(err.to_string()))?;
        todos.retain(|todo| todo.id() != id);
        Ok(())
    }
}
