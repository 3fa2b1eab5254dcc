//! ToDo Domain
//!
//! Storage and business rules for ToDo items, independent of the transport.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← API version check, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + PostgreSQL implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Todo, CreateTodo, UpdateTodo
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{PgTodoRepository, TodoService};
//! use sqlx::PgPool;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = PgPool::connect("postgres://...").await?;
//!
//! let repository = PgTodoRepository::new(pool);
//! let service = TodoService::new(repository);
//! service.check_api("v1")?;
//! # Ok(())
//! # }
//! ```

pub mod conversions;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TodoError, TodoResult};
pub use models::{CreateTodo, Todo, UpdateTodo};
pub use postgres::PgTodoRepository;
pub use repository::TodoRepository;
pub use service::{API_VERSION, TodoService};
