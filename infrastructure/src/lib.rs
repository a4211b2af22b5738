//! Infrastructure layer for agent-frontend-config
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration file and environment loading.

pub mod config;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigSource, LoadError, SourceKind, ENV_PREFIX};
