use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::pool::PoolConnection;
use sqlx::{FromRow, PgPool, Postgres};

use crate::error::{TodoError, TodoResult};
use crate::models::{CreateTodo, Todo, UpdateTodo};
use crate::repository::TodoRepository;

const INSERT_TODO: &str =
    "INSERT INTO todo (title, description, reminder) VALUES ($1, $2, $3) RETURNING id";
const SELECT_TODO: &str = "SELECT id, title, description, reminder FROM todo WHERE id = $1";
const SELECT_ALL_TODOS: &str = "SELECT id, title, description, reminder FROM todo";
const UPDATE_TODO: &str =
    "UPDATE todo SET title = $1, description = $2, reminder = $3 WHERE id = $4";
const DELETE_TODO: &str = "DELETE FROM todo WHERE id = $1";

#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    description: String,
    reminder: DateTime<Utc>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            reminder: row.reminder,
        }
    }
}

/// PostgreSQL implementation of TodoRepository
///
/// Every method borrows one connection from the pool for the duration of a
/// single statement. The `PoolConnection` guard hands it back on drop, which
/// also covers errors and cancelled calls.
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn connection(&self) -> TodoResult<PoolConnection<Postgres>> {
        self.pool
            .acquire()
            .await
            .map_err(TodoError::database("failed to connect to database"))
    }
}

/// Zero or one row; a lookup by primary key that yields more is corrupt state
fn at_most_one<T>(mut rows: Vec<T>, id: i64) -> TodoResult<Option<T>> {
    match rows.len() {
        0 | 1 => Ok(rows.pop()),
        n => Err(TodoError::Internal(format!(
            "found multiple ToDo rows ({}) with id '{}'",
            n, id
        ))),
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn create(&self, input: CreateTodo) -> TodoResult<i64> {
        let mut conn = self.connection().await?;

        sqlx::query_scalar::<_, i64>(INSERT_TODO)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.reminder)
            .fetch_one(&mut *conn)
            .await
            .map_err(TodoError::database("failed to insert into ToDo"))
    }

    async fn get_by_id(&self, id: i64) -> TodoResult<Option<Todo>> {
        let mut conn = self.connection().await?;

        let rows = sqlx::query_as::<_, TodoRow>(SELECT_TODO)
            .bind(id)
            .fetch_all(&mut *conn)
            .await
            .map_err(TodoError::database("failed to select from ToDo"))?;

        Ok(at_most_one(rows, id)?.map(Todo::from))
    }

    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let mut conn = self.connection().await?;

        let rows = sqlx::query_as::<_, TodoRow>(SELECT_ALL_TODOS)
            .fetch_all(&mut *conn)
            .await
            .map_err(TodoError::database("failed to select from ToDo"))?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn update(&self, id: i64, input: UpdateTodo) -> TodoResult<u64> {
        let mut conn = self.connection().await?;

        let result = sqlx::query(UPDATE_TODO)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.reminder)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(TodoError::database("failed to update ToDo"))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> TodoResult<u64> {
        let mut conn = self.connection().await?;

        let result = sqlx::query(DELETE_TODO)
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(TodoError::database("failed to delete ToDo"))?;

        Ok(result.rows_affected())
    }
}
