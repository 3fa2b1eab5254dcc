use std::time::Duration;
use tonic::transport::Endpoint;

/// Configuration for gRPC channel creation
///
/// Builder-style overrides on top of defaults suited to short unary calls.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
  // HTTP/2 Keep-Alive
  pub http2_keep_alive_interval: Option<Duration>,
  pub keep_alive_timeout: Duration,

  // Connection settings
  pub connect_timeout: Duration,
  pub timeout: Duration,

  // TCP settings
  pub tcp_nodelay: bool,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      http2_keep_alive_interval: Some(Duration::from_secs(30)),
      keep_alive_timeout: Duration::from_secs(10),
      connect_timeout: Duration::from_secs(5),
      timeout: Duration::from_secs(30),
      tcp_nodelay: true,
    }
  }
}

impl ChannelConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the connection timeout
  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  /// Set the deadline applied to every RPC on the channel
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Disable HTTP/2 keep-alive
  pub fn without_keep_alive(mut self) -> Self {
    self.http2_keep_alive_interval = None;
    self
  }

  pub(crate) fn apply_to_endpoint(self, mut endpoint: Endpoint) -> Endpoint {
    if let Some(interval) = self.http2_keep_alive_interval {
      endpoint = endpoint
        .http2_keep_alive_interval(interval)
        .keep_alive_timeout(self.keep_alive_timeout);
    }

    endpoint
      .connect_timeout(self.connect_timeout)
      .timeout(self.timeout)
      .tcp_nodelay(self.tcp_nodelay)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_builder_overrides() {
    let config = ChannelConfig::new()
      .with_connect_timeout(Duration::from_secs(1))
      .with_request_timeout(Duration::from_secs(2))
      .without_keep_alive();

    assert_eq!(config.connect_timeout, Duration::from_secs(1));
    assert_eq!(config.timeout, Duration::from_secs(2));
    assert!(config.http2_keep_alive_interval.is_none());
  }
}
