//! Application services orchestrating todo use cases.

mod application;

pub use application::{
    AddTodoRequest, TodoApplicationError, TodoApplicationResult, TodoApplicationService,
};
