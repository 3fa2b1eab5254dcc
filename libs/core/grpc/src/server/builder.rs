//! gRPC server lifecycle utilities.

use super::config::ServerConfig;
use tracing::{info, warn};

/// Helper for logging startup and reporting health.
pub struct GrpcServer;

impl GrpcServer {
  /// Log server startup information for a single service.
  pub fn log_startup(config: &ServerConfig, service_name: &str) {
    info!(
      addr = %config.addr_string(),
      service = service_name,
      compression = config.enable_compression,
      max_message_size = config.max_decoding_message_size,
      "gRPC server starting"
    );
    info!("Health check service enabled (grpc.health.v1.Health)");
  }

  /// Mark the service and the empty service name as serving
  /// (empty is what k8s probes query by default).
  pub async fn setup_health(
    health_reporter: &tonic_health::server::HealthReporter,
    service_name: &str,
  ) {
    health_reporter
      .set_service_status(service_name, tonic_health::ServingStatus::Serving)
      .await;
    health_reporter
      .set_service_status("", tonic_health::ServingStatus::Serving)
      .await;

    info!(service = service_name, "Service marked as serving");
  }
}

// Re-export health_reporter for convenience
pub use tonic_health::server::health_reporter as create_health_service;

/// Resolves on Ctrl-C (or SIGTERM on unix) so the server drains in-flight calls.
pub async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      warn!(error = %e, "Failed to listen for Ctrl-C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut signal) => {
        signal.recv().await;
      }
      Err(e) => {
        warn!(error = %e, "Failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => {},
    _ = terminate => {},
  }

  info!("Shutdown signal received, draining gRPC server");
}
