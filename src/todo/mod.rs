//! Todo item lifecycle management for Daylist.
//!
//! This module implements the storage core of the application: an immutable
//! todo aggregate, a four-operation repository port, and two interchangeable
//! adapters (durable SQLite, process-lifetime in-memory) selected by the
//! application wiring at composition time. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
