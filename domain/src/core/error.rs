//! Domain error types

use crate::config::ConfigField;
use thiserror::Error;

/// Discriminant of a [`ConfigurationError`], for callers that only care
/// about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    MissingRequiredField,
    TypeMismatch,
    UnknownField,
}

/// Errors raised while merging overrides into a configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("required field '{field}' is missing or empty")]
    MissingRequiredField { field: ConfigField },

    #[error("field '{field}' expects a {expected}, found {found}")]
    TypeMismatch {
        field: ConfigField,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown field '{key}'")]
    UnknownField { key: String },
}

impl ConfigurationError {
    pub fn kind(&self) -> ConfigErrorKind {
        match self {
            ConfigurationError::MissingRequiredField { .. } => ConfigErrorKind::MissingRequiredField,
            ConfigurationError::TypeMismatch { .. } => ConfigErrorKind::TypeMismatch,
            ConfigurationError::UnknownField { .. } => ConfigErrorKind::UnknownField,
        }
    }

    /// Whether this error must stop the application from starting.
    ///
    /// Unknown fields are reported and skipped; everything else fails closed.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConfigurationError::UnknownField { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_display() {
        let error = ConfigurationError::MissingRequiredField {
            field: ConfigField::CompanyName,
        };
        assert_eq!(
            error.to_string(),
            "required field 'companyName' is missing or empty"
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = ConfigurationError::TypeMismatch {
            field: ConfigField::SupportsChatInput,
            expected: "boolean",
            found: "string",
        };
        assert_eq!(
            error.to_string(),
            "field 'supportsChatInput' expects a boolean, found string"
        );
    }

    #[test]
    fn test_kind_and_fatality() {
        let unknown = ConfigurationError::UnknownField {
            key: "theme".to_string(),
        };
        assert_eq!(unknown.kind(), ConfigErrorKind::UnknownField);
        assert!(!unknown.is_fatal());

        let missing = ConfigurationError::MissingRequiredField {
            field: ConfigField::Logo,
        };
        assert_eq!(missing.kind(), ConfigErrorKind::MissingRequiredField);
        assert!(missing.is_fatal());
    }
}
