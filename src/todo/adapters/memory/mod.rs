//! In-memory adapter for todo storage.

mod repository;

pub use repository::InMemoryTodoRepository;
