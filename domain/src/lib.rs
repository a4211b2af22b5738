//! Domain layer for agent-frontend-config
//!
//! This crate contains the configuration schema of the voice-agent front
//! end, its built-in defaults, and the rules for merging overrides into it.
//! It has no dependencies on infrastructure or presentation concerns and
//! performs no I/O.
//!
//! # Core Concepts
//!
//! ## AppConfig
//!
//! Branding strings, feature flags for input modalities, optional theming,
//! and optional sandbox/agent identifiers. [`AppConfig::default`] is the
//! built-in deployment; it is constructed explicitly and passed by reference,
//! never held in a mutable global.
//!
//! ## Overrides
//!
//! Sources yield [`ConfigOverrides`]. [`AppConfig::merge`] applies them and
//! fails with [`ConfigurationError`] on a missing required field or a type
//! mismatch. Unknown keys are reported as warnings.

pub mod config;
pub mod core;

// Re-export commonly used types
pub use config::{
    AppConfig, ConfigField, ConfigIssue, ConfigIssueCode, ConfigOverrides, FieldKind, FieldValue,
    InputModality, MergeOutcome, OutputFormat, OverrideValue, Severity,
};
pub use self::core::error::{ConfigErrorKind, ConfigurationError};
