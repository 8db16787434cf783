//! SQLite repository implementation for durable todo storage.

use super::{
    models::{TodoRow, to_new_row},
    schema::todos,
};
use crate::todo::{
    domain::{TodoEntity, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use tracing::debug;

/// SQLite connection pool type used by todo adapters.
pub type SqliteTodoPool = Pool<ConnectionManager<SqliteConnection>>;

/// One-table schema, applied idempotently at connect time.
const CREATE_TODOS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    category TEXT NOT NULL,
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    notes TEXT,
    is_completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// Ordered fetch of every record. `rowid` breaks ties between rows created
/// within the same `created_at` second so insertion order still wins. No
/// user data is interpolated here; every other statement binds parameters.
const SELECT_ALL_TODOS: &str = "\
SELECT id, title, category, date, time, notes, is_completed, created_at \
FROM todos ORDER BY created_at DESC, rowid DESC";

/// SQLite-backed todo repository.
///
/// Owns its connection pool outright: [`SqliteTodoRepository::connect`] is
/// the explicit startup step that opens the store and applies the schema, so
/// no operation can ever observe an uninitialized store and no module-level
/// mutable state exists.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqliteTodoPool,
}

impl SqliteTodoRepository {
    /// Opens the store at `database_url` and applies the schema.
    ///
    /// The pool is capped at a single connection, which also makes
    /// `:memory:` databases behave as one store rather than one per
    /// checkout.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Write`] when the database cannot be
    /// opened or the schema cannot be applied.
    pub fn connect(database_url: &str) -> TodoRepositoryResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(TodoRepositoryError::write)?;

        let mut connection = pool.get().map_err(TodoRepositoryError::write)?;
        diesel::sql_query(CREATE_TODOS_TABLE)
            .execute(&mut connection)
            .map_err(TodoRepositoryError::write)?;
        drop(connection);

        debug!(database_url, "todo store ready");
        Ok(Self { pool })
    }

    /// Creates a repository from an existing pool whose schema has already
    /// been applied.
    #[must_use]
    pub const fn new(pool: SqliteTodoPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::read)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::read)?
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn create_todo(&self, todo: &TodoEntity) -> TodoRepositoryResult<()> {
        let new_row = to_new_row(todo);
        self.run_blocking(move |connection| {
            diesel::insert_into(todos::table)
                .values(&new_row)
                .execute(connection)
                .map(|_| ())
                .map_err(TodoRepositoryError::write)
        })
        .await
    }

    async fn fetch_all_todos(&self) -> TodoRepositoryResult<Vec<TodoEntity>> {
        self.run_blocking(|connection| {
            let rows = diesel::sql_query(SELECT_ALL_TODOS)
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::read)?;
            rows.into_iter().map(TodoEntity::try_from).collect()
        })
        .await
    }

    async fn update_todo_status(
        &self,
        id: &TodoId,
        is_completed: bool,
    ) -> TodoRepositoryResult<()> {
        let id_value = id.as_str().to_owned();
        self.run_blocking(move |connection| {
            // Zero affected rows means the id was unknown; the port treats
            // that as a no-op.
            diesel::update(todos::table.filter(todos::id.eq(id_value)))
                .set(todos::is_completed.eq(i32::from(is_completed)))
                .execute(connection)
                .map(|_| ())
                .map_err(TodoRepositoryError::write)
        })
        .await
    }

    async fn delete_todo(&self, id: &TodoId) -> TodoRepositoryResult<()> {
        let id_value = id.as_str().to_owned();
        self.run_blocking(move |connection| {
            diesel::delete(todos::table.filter(todos::id.eq(id_value)))
                .execute(connection)
                .map(|_| ())
                .map_err(TodoRepositoryError::write)
        })
        .await
    }
}
