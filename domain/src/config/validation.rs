//! Configuration validation issues.
//!
//! Merging and validation report problems as structured issues with a
//! severity. Warnings are logged and the configuration is still used;
//! errors stop the application from starting.

use super::ConfigField;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot be used.
    Error,
    /// Non-fatal: the configuration works but may not render as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// An override named a key outside the schema.
    UnknownField,
    /// A required text field is blank.
    MissingRequiredField,
    /// An optional field is set, but to a blank string.
    EmptyOptionalField,
    /// An accent color is not a `#rgb` or `#rrggbb` hex value.
    InvalidAccentColor,
}

/// A detected issue in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    /// The schema field involved, if the issue is about a known field.
    pub field: Option<ConfigField>,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(
        code: ConfigIssueCode,
        field: Option<ConfigField>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            code,
            field,
            message: message.into(),
        }
    }

    pub fn warning(
        code: ConfigIssueCode,
        field: Option<ConfigField>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            field,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns `true` if any issue is fatal.
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(ConfigIssue::is_error)
    }
}

/// `#rgb` or `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
