//! Server configuration loaded from environment variables.

use std::net::SocketAddr;

use crate::error::{GrpcError, GrpcResult};

const DEFAULT_MAX_MESSAGE_SIZE: usize = 8 * 1024 * 1024;

/// Configuration for gRPC server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
  /// Host to bind to (default: [::1] for IPv6 localhost)
  pub host: String,
  /// Port to listen on (default: 50051)
  pub port: u16,
  /// Enable Zstd compression (default: true)
  pub enable_compression: bool,
  /// Maximum message size for decoding (default: 8MB)
  pub max_decoding_message_size: usize,
  /// Maximum message size for encoding (default: 8MB)
  pub max_encoding_message_size: usize,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: "[::1]".to_string(),
      port: 50051,
      enable_compression: true,
      max_decoding_message_size: DEFAULT_MAX_MESSAGE_SIZE,
      max_encoding_message_size: DEFAULT_MAX_MESSAGE_SIZE,
    }
  }
}

impl ServerConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Load configuration from environment variables.
  ///
  /// Reads:
  /// - `GRPC_HOST` (default: [::1])
  /// - `GRPC_PORT` (default: 50051)
  /// - `GRPC_COMPRESSION` (default: true; "false" or "0" disables)
  /// - `GRPC_MAX_MESSAGE_SIZE` (default: 8388608 / 8MB)
  pub fn from_env() -> GrpcResult<Self> {
    let defaults = Self::default();

    let host = std::env::var("GRPC_HOST").unwrap_or(defaults.host);
    let port = match std::env::var("GRPC_PORT") {
      Ok(raw) => raw
        .parse()
        .map_err(|_| GrpcError::InvalidConfig(format!("GRPC_PORT must be a port number, got '{}'", raw)))?,
      Err(_) => defaults.port,
    };
    let enable_compression = std::env::var("GRPC_COMPRESSION")
      .map(|v| v != "false" && v != "0")
      .unwrap_or(defaults.enable_compression);
    let max_message_size = match std::env::var("GRPC_MAX_MESSAGE_SIZE") {
      Ok(raw) => raw.parse().map_err(|_| {
        GrpcError::InvalidConfig(format!("GRPC_MAX_MESSAGE_SIZE must be a byte count, got '{}'", raw))
      })?,
      Err(_) => DEFAULT_MAX_MESSAGE_SIZE,
    };

    Ok(Self {
      host,
      port,
      enable_compression,
      max_decoding_message_size: max_message_size,
      max_encoding_message_size: max_message_size,
    })
  }

  pub fn with_host(mut self, host: impl Into<String>) -> Self {
    self.host = host.into();
    self
  }

  pub fn with_port(mut self, port: u16) -> Self {
    self.port = port;
    self
  }

  pub fn with_compression(mut self, enable: bool) -> Self {
    self.enable_compression = enable;
    self
  }

  pub fn with_max_message_size(mut self, size: usize) -> Self {
    self.max_decoding_message_size = size;
    self.max_encoding_message_size = size;
    self
  }

  /// Get the socket address to bind to.
  pub fn socket_addr(&self) -> GrpcResult<SocketAddr> {
    self
      .addr_string()
      .parse()
      .map_err(|e| GrpcError::InvalidConfig(format!("invalid bind address '{}': {}", self.addr_string(), e)))
  }

  /// Get the address string (for logging).
  pub fn addr_string(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "[::1]");
    assert_eq!(config.port, 50051);
    assert!(config.enable_compression);
    assert_eq!(config.socket_addr().unwrap().port(), 50051);
  }

  #[test]
  fn test_builder_pattern() {
    let config = ServerConfig::new()
      .with_host("0.0.0.0")
      .with_port(8080)
      .with_compression(false)
      .with_max_message_size(1024);

    assert_eq!(config.addr_string(), "0.0.0.0:8080");
    assert!(!config.enable_compression);
    assert_eq!(config.max_decoding_message_size, 1024);
  }

  #[test]
  fn test_bad_host_is_config_error() {
    let config = ServerConfig::new().with_host("not a host");
    assert!(matches!(config.socket_addr(), Err(GrpcError::InvalidConfig(_))));
  }
}
