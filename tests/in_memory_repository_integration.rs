//! Behavioural integration tests for the in-memory todo repository.
//!
//! These tests exercise the adapter through the repository port in realistic
//! flows, verifying it honours the same externally observable contract as
//! the SQLite adapter: newest-first ordering, silent no-ops on unknown ids,
//! and write rejection of duplicate identifiers.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "test code indexes after length checks"
)]

use chrono::{DateTime, TimeZone, Utc};
use daylist::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{Category, RawTodoData, TodoEntity, TodoId},
    ports::{TodoRepository, TodoRepositoryError},
};
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to create test runtime")
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("valid timestamp")
}

fn todo_titled(title: &str) -> TodoEntity {
    TodoEntity::new(
        title,
        Category::Task,
        utc(2024, 1, 1, 0, 0, 0),
        utc(2024, 1, 1, 9, 0, 0),
        "",
    )
}

fn todo_with_id(id: &str, title: &str) -> TodoEntity {
    TodoEntity::from_raw(RawTodoData {
        id: Some(id.to_owned()),
        title: title.to_owned(),
        category: "task".to_owned(),
        date: utc(2024, 1, 1, 0, 0, 0),
        time: utc(2024, 1, 1, 9, 0, 0),
        notes: String::new(),
        is_completed: false,
    })
    .expect("valid raw data")
}

#[test]
fn fetch_returns_created_todos_newest_first() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();

    for title in ["A", "B", "C"] {
        rt.block_on(repo.create_todo(&todo_titled(title)))
            .expect("create should succeed");
    }

    let todos = rt
        .block_on(repo.fetch_all_todos())
        .expect("fetch should succeed");
    let titles: Vec<&str> = todos.iter().map(TodoEntity::title).collect();
    assert_eq!(titles, vec!["C", "B", "A"]);
}

#[test]
fn fetch_is_repeatable_and_does_not_mutate() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();
    rt.block_on(repo.create_todo(&todo_titled("A")))
        .expect("create should succeed");

    let first = rt
        .block_on(repo.fetch_all_todos())
        .expect("fetch should succeed");
    let second = rt
        .block_on(repo.fetch_all_todos())
        .expect("fetch should succeed");
    assert_eq!(first, second);
}

#[test]
fn duplicate_id_is_rejected_as_a_write_error() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();

    rt.block_on(repo.create_todo(&todo_with_id("same-id", "first")))
        .expect("first create should succeed");
    let result = rt.block_on(repo.create_todo(&todo_with_id("same-id", "second")));

    assert!(matches!(result, Err(TodoRepositoryError::Write(_))));
}

#[test]
fn update_replaces_the_entity_with_a_completed_copy() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();
    let todo = todo_titled("Buy milk");
    rt.block_on(repo.create_todo(&todo))
        .expect("create should succeed");

    rt.block_on(repo.update_todo_status(todo.id(), true))
        .expect("update should succeed");

    let todos = rt
        .block_on(repo.fetch_all_todos())
        .expect("fetch should succeed");
    assert_eq!(todos.len(), 1);
    assert!(todos[0].is_completed());
    assert_eq!(todos[0].with_completion(false), todo);
}

#[test]
fn unknown_ids_are_silent_noops_for_update_and_delete() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();
    rt.block_on(repo.create_todo(&todo_titled("A")))
        .expect("create should succeed");
    let before = rt
        .block_on(repo.fetch_all_todos())
        .expect("fetch should succeed");

    let missing = TodoId::from_string("no-such-id");
    rt.block_on(repo.update_todo_status(&missing, true))
        .expect("unknown update should not raise");
    rt.block_on(repo.delete_todo(&missing))
        .expect("unknown delete should not raise");

    let after = rt
        .block_on(repo.fetch_all_todos())
        .expect("fetch should succeed");
    assert_eq!(after, before);
}

#[test]
fn create_then_immediate_delete_leaves_the_store_empty() {
    let rt = test_runtime();
    let repo = InMemoryTodoRepository::new();
    let todo = todo_titled("gone");

    rt.block_on(repo.create_todo(&todo))
        .expect("create should succeed");
    rt.block_on(repo.delete_todo(todo.id()))
        .expect("delete should succeed");

    let todos = rt
        .block_on(repo.fetch_all_todos())
        .expect("fetch should succeed");
    assert!(todos.is_empty());
}
