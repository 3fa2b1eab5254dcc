use sqlx::PgPool;
use tracing::debug;

use crate::common::DatabaseError;

const HEALTH_QUERY: &str = "SELECT 1";

/// Check PostgreSQL database health
///
/// Executes `SELECT 1` on a pooled connection. Used once at startup before the
/// gRPC health reporter flips to SERVING.
///
/// # Example
/// ```ignore
/// use database::postgres::{check_health, connect_from_config};
///
/// let pool = connect_from_config(config).await?;
/// check_health(&pool).await?;
/// ```
pub async fn check_health(pool: &PgPool) -> Result<(), DatabaseError> {
    debug!(query = HEALTH_QUERY, "Running PostgreSQL health check");

    sqlx::query(HEALTH_QUERY).execute(pool).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!(
            "PostgreSQL health check failed with query '{}': {}",
            HEALTH_QUERY, e
        ))
    })?;

    debug!("PostgreSQL health check passed");
    Ok(())
}
