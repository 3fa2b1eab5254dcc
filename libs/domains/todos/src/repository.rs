use async_trait::async_trait;

use crate::error::TodoResult;
use crate::models::{CreateTodo, Todo, UpdateTodo};

/// Repository trait for ToDo persistence
///
/// Each call is one round trip against the store. Implementations never
/// retry and never batch.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a ToDo and return the id the store assigned
    async fn create(&self, input: CreateTodo) -> TodoResult<i64>;

    /// Get a ToDo by ID
    async fn get_by_id(&self, id: i64) -> TodoResult<Option<Todo>>;

    /// All ToDo items in store order
    async fn list(&self) -> TodoResult<Vec<Todo>>;

    /// Replace a ToDo's fields, returning the number of rows changed
    async fn update(&self, id: i64, input: UpdateTodo) -> TodoResult<u64>;

    /// Delete a ToDo, returning the number of rows removed
    async fn delete(&self, id: i64) -> TodoResult<u64>;
}
