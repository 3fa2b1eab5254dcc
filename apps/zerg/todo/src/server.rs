//! gRPC server initialization and lifecycle management
//!
//! - Tracing initialization
//! - Database connection (retried at startup only) and health check
//! - gRPC server configuration and startup
//! - Health check service (grpc.health.v1.Health)
//! - Graceful shutdown on Ctrl-C / SIGTERM

use std::future::Future;

use core_config::{Environment, FromEnv};
use database::postgres::PostgresConfig;
use domain_todos::{PgTodoRepository, TodoRepository, TodoService};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig, create_health_service, shutdown_signal};
use rpc::todo::v1::to_do_service_server::{SERVICE_NAME, ToDoServiceServer};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tracing::info;

use crate::service::ToDoServiceImpl;

/// Run the gRPC server
///
/// 1. Sets up structured logging (env-aware: JSON for prod, pretty for dev)
/// 2. Connects to the database with retry logic and checks it answers
/// 3. Creates the repository and service layers
/// 4. Serves until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database or server configuration is invalid
/// - Database connection or health check fails
/// - Server binding fails
/// - Server runtime encounters an error
pub async fn run() -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let db_config = PostgresConfig::from_env().wrap_err("Failed to load database configuration")?;
    let server_config = ServerConfig::from_env().wrap_err("Failed to load server configuration")?;

    info!(
        max_connections = db_config.max_connections,
        min_connections = db_config.min_connections,
        "Connecting to database..."
    );
    let pool = database::postgres::connect_from_config_with_retry(db_config, None)
        .await
        .wrap_err("Failed to connect to database")?;
    database::postgres::check_health(&pool)
        .await
        .wrap_err("Database health check failed")?;
    info!("Connected to database successfully");

    let addr = server_config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", addr))?;

    serve_on(
        PgTodoRepository::new(pool),
        &server_config,
        listener,
        shutdown_signal(),
    )
    .await?;

    info!("ToDo service stopped");
    Ok(())
}

/// Build the ToDo service with compression and message limits from config
pub fn todo_server<R>(repository: R, config: &ServerConfig) -> ToDoServiceServer<ToDoServiceImpl<R>>
where
    R: TodoRepository + 'static,
{
    let server = ToDoServiceServer::new(ToDoServiceImpl::new(TodoService::new(repository)))
        .max_decoding_message_size(config.max_decoding_message_size)
        .max_encoding_message_size(config.max_encoding_message_size);

    if config.enable_compression {
        server
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd)
    } else {
        server
    }
}

/// Serve the ToDo and health services on `listener` until `shutdown` resolves
pub async fn serve_on<R, F>(
    repository: R,
    config: &ServerConfig,
    listener: TcpListener,
    shutdown: F,
) -> Result<()>
where
    R: TodoRepository + 'static,
    F: Future<Output = ()>,
{
    let (health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
    GrpcServer::log_startup(config, SERVICE_NAME);

    Server::builder()
        .add_service(health_service)
        .add_service(todo_server(repository, config))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
        .wrap_err("gRPC server failed")
}
