use thiserror::Error;
use tonic::Status;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("unsupported API version: service implements '{implemented}' but asked for '{requested}'")]
    UnsupportedVersion {
        requested: String,
        implemented: &'static str,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("ToDo with id '{0}' is not found")]
    NotFound(i64),

    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TodoResult<T> = Result<T, TodoError>;

impl TodoError {
    /// Wrap a store failure with the step that failed
    pub fn database(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| TodoError::Database { context, source }
    }
}

/// Single mapping point from domain errors to gRPC status codes
impl From<TodoError> for Status {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::UnsupportedVersion { .. } => Status::unimplemented(err.to_string()),
            TodoError::InvalidArgument(_) => Status::invalid_argument(err.to_string()),
            TodoError::NotFound(_) => Status::not_found(err.to_string()),
            TodoError::Database { .. } | TodoError::Internal(_) => {
                tracing::error!(error = %err, "ToDo call failed");
                Status::unknown(err.to_string())
            }
        }
    }
}
