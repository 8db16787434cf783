//! Unit tests for the todo storage core.
