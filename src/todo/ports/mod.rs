//! Port contracts for todo storage.
//!
//! Ports define infrastructure-agnostic interfaces used by application
//! services.

pub mod repository;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult};
