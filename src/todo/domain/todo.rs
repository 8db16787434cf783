//! Todo aggregate root.

use super::{Category, TodoDomainError, TodoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Todo aggregate root.
///
/// An immutable snapshot of one item's full state. There are no mutation
/// methods: a state change such as a completion toggle is expressed as a new
/// instance (see [`TodoEntity::with_completion`]), and the repository is
/// responsible for persisting and retrieving the updated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoEntity {
    id: TodoId,
    title: String,
    category: Category,
    date: DateTime<Utc>,
    time: DateTime<Utc>,
    notes: String,
    is_completed: bool,
}

/// Raw creation data carrying a string category tag.
///
/// This is the shape handed over by callers that have not yet validated the
/// category, such as a storage record or a UI payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTodoData {
    /// Existing identifier, or `None` to generate a fresh one.
    pub id: Option<String>,
    /// Item title.
    pub title: String,
    /// Category storage tag, one of `task`, `event`, `goal`.
    pub category: String,
    /// Calendar date of the item; only the date component is authoritative.
    pub date: DateTime<Utc>,
    /// Time of day of the item, carried as a full datetime.
    pub time: DateTime<Utc>,
    /// Free-form notes; empty means none.
    pub notes: String,
    /// Completion flag.
    pub is_completed: bool,
}

/// Parameter object for reconstructing a persisted todo aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted identifier, preserved verbatim.
    pub id: TodoId,
    /// Persisted title.
    pub title: String,
    /// Persisted category.
    pub category: Category,
    /// Persisted calendar date.
    pub date: DateTime<Utc>,
    /// Persisted time of day.
    pub time: DateTime<Utc>,
    /// Persisted notes; empty means none.
    pub notes: String,
    /// Persisted completion flag.
    pub is_completed: bool,
}

impl TodoEntity {
    /// Creates a new, not yet completed todo with a freshly generated id.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        category: Category,
        date: DateTime<Utc>,
        time: DateTime<Utc>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: TodoId::generate(),
            title: title.into(),
            category,
            date,
            time,
            notes: notes.into(),
            is_completed: false,
        }
    }

    /// Creates a todo from raw data carrying a string category tag.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidCategory`] when the tag is not one
    /// of `task`, `event`, `goal`.
    pub fn from_raw(data: RawTodoData) -> Result<Self, TodoDomainError> {
        let category = Category::try_from(data.category.as_str())?;
        Ok(Self {
            id: data.id.map_or_else(TodoId::generate, TodoId::from_string),
            title: data.title,
            category,
            date: data.date,
            time: data.time,
            notes: data.notes,
            is_completed: data.is_completed,
        })
    }

    /// Reconstructs a todo from persisted state, preserving its identity.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            category: data.category,
            date: data.date,
            time: data.time,
            notes: data.notes,
            is_completed: data.is_completed,
        }
    }

    /// Returns a copy of this todo with the completion flag replaced and all
    /// other fields unchanged.
    #[must_use]
    pub fn with_completion(&self, is_completed: bool) -> Self {
        Self {
            is_completed,
            ..self.clone()
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &TodoId {
        &self.id
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn id_str(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the category storage tag.
    #[must_use]
    pub const fn category_tag(&self) -> &'static str {
        self.category.as_str()
    }

    /// Returns the calendar date. Only the date component is meaningful to
    /// persistence; any time-of-day carried here is dropped when stored.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Returns the time of day, carried as a full datetime.
    #[must_use]
    pub const fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Returns the notes; empty means none.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }
}
