//! Domain model for todo items.
//!
//! The todo domain models an immutable todo aggregate with a closed category
//! enumeration and an opaque string identifier, keeping all infrastructure
//! concerns outside of the domain boundary. State changes produce new
//! instances; persistence is the repository's responsibility.

mod category;
mod error;
mod ids;
mod todo;

pub use category::Category;
pub use error::TodoDomainError;
pub use ids::TodoId;
pub use todo::{PersistedTodoData, RawTodoData, TodoEntity};
