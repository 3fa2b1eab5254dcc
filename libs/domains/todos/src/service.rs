use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{TodoError, TodoResult};
use crate::models::{CreateTodo, Todo, UpdateTodo};
use crate::repository::TodoRepository;

/// API revision this service implements
pub const API_VERSION: &str = "v1";

/// Service layer for ToDo business logic
#[derive(Clone)]
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// An empty tag accepts any revision; anything else must match exactly
    pub fn check_api(&self, api: &str) -> TodoResult<()> {
        if !api.is_empty() && api != API_VERSION {
            return Err(TodoError::UnsupportedVersion {
                requested: api.to_string(),
                implemented: API_VERSION,
            });
        }
        Ok(())
    }

    /// Create a ToDo and return its id
    #[instrument(skip(self, input), fields(todo_title = %input.title))]
    pub async fn create_todo(&self, input: CreateTodo) -> TodoResult<i64> {
        let id = self.repository.create(input).await?;
        info!(todo_id = id, "Created ToDo");
        Ok(id)
    }

    /// Get a ToDo by ID
    #[instrument(skip(self), fields(todo_id = %id))]
    pub async fn get_todo(&self, id: i64) -> TodoResult<Todo> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TodoError::NotFound(id))
    }

    /// List every ToDo
    pub async fn list_todos(&self) -> TodoResult<Vec<Todo>> {
        self.repository.list().await
    }

    /// Replace a ToDo's fields
    #[instrument(skip(self, input), fields(todo_id = %id))]
    pub async fn update_todo(&self, id: i64, input: UpdateTodo) -> TodoResult<u64> {
        let updated = single_row_affected(self.repository.update(id, input).await?, id)?;
        info!("Updated ToDo");
        Ok(updated)
    }

    /// Delete a ToDo
    #[instrument(skip(self), fields(todo_id = %id))]
    pub async fn delete_todo(&self, id: i64) -> TodoResult<u64> {
        let deleted = single_row_affected(self.repository.delete(id).await?, id)?;
        info!("Deleted ToDo");
        Ok(deleted)
    }
}

fn single_row_affected(affected: u64, id: i64) -> TodoResult<u64> {
    match affected {
        0 => Err(TodoError::NotFound(id)),
        1 => Ok(1),
        n => Err(TodoError::Internal(format!(
            "statement for ToDo id '{}' affected {} rows",
            id, n
        ))),
    }
}
