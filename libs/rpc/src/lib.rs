//! Generated protobuf and gRPC bindings.
//!
//! Sources live in `proto/`; the Rust under `src/gen` is produced by buf
//! (prost + tonic plugins) and checked in.

mod gen;

pub use gen::todo;

// Well-known types used by the generated messages
pub use prost_types::Timestamp;
