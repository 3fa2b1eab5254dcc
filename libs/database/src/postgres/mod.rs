//! PostgreSQL pool management
//!
//! Provides pool construction (eager, lazy, with retry) and a startup health
//! check on top of sqlx.

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{connect_from_config, connect_from_config_with_retry, connect_lazy_from_config};
pub use health::check_health;
