//! Daylist: on-device personal task tracking.
//!
//! This crate provides the storage core for a local todo application:
//! creating, listing, completing, and deleting todo items (tasks, events,
//! goals) persisted on-device.
//!
//! # Architecture
//!
//! Daylist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (SQLite, in-memory)
//!
//! # Modules
//!
//! - [`todo`]: Todo item domain model, repository port, and adapters

pub mod todo;
