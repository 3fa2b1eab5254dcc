//! # gRPC helpers
//!
//! Shared plumbing for the ToDo gRPC surface:
//!
//! - **Conversions**: `google.protobuf.Timestamp` ↔ `chrono::DateTime<Utc>`
//!   with range validation
//! - **Channels**: tuned client channel creation (used by callers and tests)
//! - **Server** (feature `server`): env-driven server config, health
//!   reporting and graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_client::create_channel;
//! use rpc::todo::v1::to_do_service_client::ToDoServiceClient;
//!
//! let channel = create_channel("http://[::1]:50051").await?;
//! let mut client = ToDoServiceClient::new(channel);
//! ```

pub mod channel;
pub mod conversions;
pub mod error;

#[cfg(feature = "server")]
pub mod server;

pub use channel::{ChannelConfig, create_channel, create_channel_with_config};
pub use error::{GrpcError, GrpcResult};
