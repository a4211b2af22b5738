//! Front-end configuration schema, defaults and merge rules
//!
//! - [`AppConfig`] — the configuration record and its built-in defaults
//! - [`ConfigField`] — schema registry (keys, kinds, required/optional)
//! - [`ConfigOverrides`] — untyped values from override sources
//! - [`AppConfig::merge`] — applies overrides, failing closed on bad input

mod app_config;
mod config_key;
pub mod defaults;
mod merge;
mod output_format;
mod override_value;
mod validation;

pub use app_config::{AppConfig, FieldValue, InputModality};
pub use config_key::{known_keys, lookup_key, ConfigField, ConfigKeyInfo, FieldKind};
pub use merge::MergeOutcome;
pub use output_format::OutputFormat;
pub use override_value::{ConfigOverrides, OverrideValue};
pub use validation::{is_hex_color, ConfigIssue, ConfigIssueCode, Severity};
