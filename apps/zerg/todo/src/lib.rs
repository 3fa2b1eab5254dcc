//! ToDo gRPC Service
//!
//! CRUD over a single PostgreSQL table, exposed as `todo.v1.ToDoService`.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC, optional Zstd compression)
//! ToDoServiceImpl (service.rs)
//!   ↓ (API version check, proto ↔ domain conversions)
//! TodoService (domain layer)
//!   ↓
//! PgTodoRepository (one pooled connection per call)
//!   ↓
//! PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `server`: Server initialization and lifecycle
//! - `service`: gRPC service implementation (ToDoServiceImpl)

pub mod server;
pub mod service;

// Re-export for convenience
pub use server::{run, serve_on, todo_server};
pub use service::ToDoServiceImpl;
