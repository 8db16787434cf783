//! Closed category enumeration for todo items.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of todo item.
///
/// The set is closed: every item is exactly one of these three, and each
/// variant has a fixed lowercase storage tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A concrete piece of work to do.
    Task,
    /// Something happening at a point in time.
    Event,
    /// A longer-running objective.
    Goal,
}

impl Category {
    /// Returns the canonical storage tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Event => "event",
            Self::Goal => "goal",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = TodoDomainError;

    /// Parses a storage tag.
    ///
    /// The match is exact: no trimming and no case folding, so a tag that
    /// was not produced by [`Category::as_str`] is rejected rather than
    /// silently defaulted.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "task" => Ok(Self::Task),
            "event" => Ok(Self::Event),
            "goal" => Ok(Self::Goal),
            _ => Err(TodoDomainError::InvalidCategory(value.to_owned())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
