//! SQLite adapters for durable on-device todo storage.

mod models;
mod repository;
mod schema;

pub use models::{NewTodoRow, TodoRow, to_new_row};
pub use repository::{SqliteTodoPool, SqliteTodoRepository};
