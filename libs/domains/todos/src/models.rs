use chrono::{DateTime, Utc};

/// A stored ToDo item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub reminder: DateTime<Utc>,
}

/// Fields for a new ToDo; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
    pub reminder: DateTime<Utc>,
}

/// Full replacement of a ToDo's mutable fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodo {
    pub title: String,
    pub description: String,
    pub reminder: DateTime<Utc>,
}
