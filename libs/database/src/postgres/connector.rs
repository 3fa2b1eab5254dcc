use sqlx::PgPool;
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry, retry_with_backoff};

/// Connect using a PostgresConfig
///
/// Opens the pool eagerly and fails if the first connection cannot be
/// established within `connect_timeout_secs`.
///
/// # Example
/// ```ignore
/// use database::postgres::{PostgresConfig, connect_from_config};
/// use core_config::FromEnv;
///
/// let config = PostgresConfig::from_env()?;
/// let pool = connect_from_config(config).await?;
/// ```
pub async fn connect_from_config(config: PostgresConfig) -> DatabaseResult<PgPool> {
    let options = config.connect_options()?;
    let timeout = config.connect_timeout();

    let pool = tokio::time::timeout(timeout, config.pool_options().connect_with(options))
        .await
        .map_err(|_| {
            DatabaseError::ConnectionFailed(format!(
                "timed out after {}s connecting to PostgreSQL",
                timeout.as_secs()
            ))
        })??;

    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Successfully connected to PostgreSQL database"
    );

    Ok(pool)
}

/// Build a pool that opens connections on first use
///
/// No network traffic happens here; the first `acquire()` dials the server.
pub fn connect_lazy_from_config(config: PostgresConfig) -> DatabaseResult<PgPool> {
    let options = config.connect_options()?;
    Ok(config.pool_options().connect_lazy_with(options))
}

/// Connect from config with exponential-backoff retry
///
/// Meant for process startup, where the database may come up after the
/// service (containers, k8s).
///
/// # Example
/// ```ignore
/// use database::postgres::connect_from_config_with_retry;
/// use database::common::RetryConfig;
///
/// let pool = connect_from_config_with_retry(config, Some(RetryConfig::new().with_max_retries(10))).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<PgPool> {
    let attempt = || connect_from_config(config.clone());

    match retry_config {
        Some(retry_config) => retry_with_backoff("postgres connect", attempt, retry_config).await,
        None => retry("postgres connect", attempt).await,
    }
}
