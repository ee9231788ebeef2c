//! Configuration structs with sensible defaults and RON persistence.

mod config;
mod error;

pub use config::{Config, DebugConfig};
pub use error::ConfigError;
