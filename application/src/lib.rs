//! Application layer for agent-frontend-config
//!
//! This crate contains the resolve use case and the port it reads overrides
//! through. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::override_source::{NoOverrides, OverrideSourceError, OverrideSourcePort};
pub use use_cases::resolve_config::{ResolveConfigError, ResolveConfigUseCase, ResolvedConfig};
