//! Error types for todo domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The category tag is not one of `task`, `event`, `goal`.
    #[error("invalid category tag: '{0}'")]
    InvalidCategory(String),

    /// The title is empty after trimming.
    #[error("todo title must not be empty")]
    EmptyTitle,

    /// The calendar date string is not `YYYY-MM-DD`.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The time-of-day string is not `HH:MM` or `HH:MM:SS`.
    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
}
