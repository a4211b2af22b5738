//! Override source port.
//!
//! Defines the interface for reading configuration overrides from wherever
//! a deployment keeps them (files, environment). Infrastructure adapters
//! implement this; the resolve use case only sees [`ConfigOverrides`].

use frontend_config_domain::ConfigOverrides;

/// Errors that can occur while reading overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideSourceError {
    /// A source that was explicitly requested does not exist
    NotFound(String),
    /// A source exists but could not be parsed or read
    Malformed(String),
}

impl std::fmt::Display for OverrideSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverrideSourceError::NotFound(msg) => write!(f, "Not found: {}", msg),
            OverrideSourceError::Malformed(msg) => write!(f, "Malformed: {}", msg),
        }
    }
}

impl std::error::Error for OverrideSourceError {}

/// Port for reading configuration overrides.
pub trait OverrideSourcePort: Send + Sync {
    /// Short human-readable description of the source, for logs.
    fn describe(&self) -> String;

    /// Read all overrides this source provides.
    ///
    /// Keys are returned as written; unknown keys are not filtered here.
    fn load_overrides(&self) -> Result<ConfigOverrides, OverrideSourceError>;
}

/// A source with no overrides (the built-in defaults are used as-is).
pub struct NoOverrides;

impl OverrideSourcePort for NoOverrides {
    fn describe(&self) -> String {
        "built-in defaults".to_string()
    }

    fn load_overrides(&self) -> Result<ConfigOverrides, OverrideSourceError> {
        Ok(ConfigOverrides::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_is_empty() {
        let overrides = NoOverrides.load_overrides().unwrap();
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_error_display() {
        let error = OverrideSourceError::NotFound("./missing.toml".to_string());
        assert_eq!(error.to_string(), "Not found: ./missing.toml");
    }
}
