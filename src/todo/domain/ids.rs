//! Identifier types for the todo domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a todo item.
///
/// Wraps a plain string so that identifiers already assigned by storage can
/// be round-tripped verbatim. Freshly generated identifiers follow the
/// hyphenated UUIDv4 layout (fixed version nibble `4`, variant bits `10`).
/// No uniqueness check against existing storage is performed; the collision
/// probability is accepted as negligible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Creates a new random todo identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a todo identifier from an existing value, used verbatim.
    #[must_use]
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the wrapped string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::generate()
    }
}

impl AsRef<str> for TodoId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
