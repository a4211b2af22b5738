//! Merging overrides into a configuration.
//!
//! Rules per field kind:
//!
//! | Field | Accepted | `Clear` / blank string | Other types |
//! |---|---|---|---|
//! | required text | non-blank string | `MissingRequiredField` | `TypeMismatch` |
//! | flag | boolean | `MissingRequiredField` (clear only) | `TypeMismatch` |
//! | optional text | non-blank string | cleared to `None` | `TypeMismatch` |
//!
//! Unknown keys become warning issues and are otherwise ignored.

use super::app_config::AppConfig;
use super::config_key::{lookup_key, ConfigField};
use super::override_value::{ConfigOverrides, OverrideValue};
use super::validation::{ConfigIssue, ConfigIssueCode};
use crate::core::error::ConfigurationError;

/// Result of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub config: AppConfig,
    /// Non-fatal issues found while merging (unknown keys).
    pub issues: Vec<ConfigIssue>,
}

impl AppConfig {
    /// Apply `overrides` on top of `self`, returning a new configuration.
    ///
    /// `self` is left untouched. The first fatal error aborts the merge.
    pub fn merge(&self, overrides: &ConfigOverrides) -> Result<MergeOutcome, ConfigurationError> {
        let mut config = self.clone();
        let mut issues = Vec::new();

        for (key, value) in overrides.iter() {
            match lookup_key(key) {
                Some(info) => config.apply(info.field, value)?,
                None => {
                    let error = ConfigurationError::UnknownField {
                        key: key.to_string(),
                    };
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::UnknownField,
                        None,
                        format!("{}; ignored", error),
                    ));
                }
            }
        }

        Ok(MergeOutcome { config, issues })
    }

    fn apply(&mut self, field: ConfigField, value: &OverrideValue) -> Result<(), ConfigurationError> {
        match field {
            ConfigField::PageTitle => self.page_title = required_text(field, value)?,
            ConfigField::PageDescription => self.page_description = required_text(field, value)?,
            ConfigField::CompanyName => self.company_name = required_text(field, value)?,
            ConfigField::SupportsChatInput => self.supports_chat_input = flag(field, value)?,
            ConfigField::SupportsVideoInput => self.supports_video_input = flag(field, value)?,
            ConfigField::SupportsScreenShare => self.supports_screen_share = flag(field, value)?,
            ConfigField::IsPreConnectBufferEnabled => {
                self.is_pre_connect_buffer_enabled = flag(field, value)?
            }
            ConfigField::Logo => self.logo = required_text(field, value)?,
            ConfigField::StartButtonText => self.start_button_text = required_text(field, value)?,
            ConfigField::Accent => self.accent = optional_text(field, value)?,
            ConfigField::LogoDark => self.logo_dark = optional_text(field, value)?,
            ConfigField::AccentDark => self.accent_dark = optional_text(field, value)?,
            ConfigField::SandboxId => self.sandbox_id = optional_text(field, value)?,
            ConfigField::AgentName => self.agent_name = optional_text(field, value)?,
        }
        Ok(())
    }
}

fn mismatch(field: ConfigField, value: &OverrideValue) -> ConfigurationError {
    ConfigurationError::TypeMismatch {
        field,
        expected: field.kind().type_name(),
        found: value.type_name(),
    }
}

fn required_text(field: ConfigField, value: &OverrideValue) -> Result<String, ConfigurationError> {
    match value {
        OverrideValue::Text(text) if !text.trim().is_empty() => Ok(text.clone()),
        OverrideValue::Text(_) | OverrideValue::Clear => {
            Err(ConfigurationError::MissingRequiredField { field })
        }
        other => Err(mismatch(field, other)),
    }
}

fn optional_text(
    field: ConfigField,
    value: &OverrideValue,
) -> Result<Option<String>, ConfigurationError> {
    match value {
        OverrideValue::Text(text) if !text.trim().is_empty() => Ok(Some(text.clone())),
        OverrideValue::Text(_) | OverrideValue::Clear => Ok(None),
        other => Err(mismatch(field, other)),
    }
}

fn flag(field: ConfigField, value: &OverrideValue) -> Result<bool, ConfigurationError> {
    match value {
        OverrideValue::Flag(enabled) => Ok(*enabled),
        OverrideValue::Clear => Err(ConfigurationError::MissingRequiredField { field }),
        other => Err(mismatch(field, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ConfigErrorKind;

    fn defaults() -> AppConfig {
        AppConfig::default()
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let outcome = defaults().merge(&ConfigOverrides::new()).unwrap();
        assert_eq!(outcome.config, defaults());
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn test_partial_override_changes_only_that_field() {
        let overrides = ConfigOverrides::new().with("accent", "#ff0000");
        let outcome = defaults().merge(&overrides).unwrap();

        let expected = AppConfig {
            accent: Some("#ff0000".to_string()),
            ..defaults()
        };
        assert_eq!(outcome.config, expected);
    }

    #[test]
    fn test_merge_leaves_base_untouched() {
        let base = defaults();
        let overrides = ConfigOverrides::new()
            .with("companyName", "Acme Roasters")
            .with("supportsVideoInput", false);
        let outcome = base.merge(&overrides).unwrap();

        assert_eq!(base, defaults());
        assert_eq!(outcome.config.company_name, "Acme Roasters");
        assert!(!outcome.config.supports_video_input);
    }

    #[test]
    fn test_string_for_flag_is_type_mismatch() {
        let overrides = ConfigOverrides::new().with("supportsChatInput", "true");
        let error = defaults().merge(&overrides).unwrap_err();
        assert_eq!(error.kind(), ConfigErrorKind::TypeMismatch);
        assert_eq!(
            error,
            ConfigurationError::TypeMismatch {
                field: ConfigField::SupportsChatInput,
                expected: "boolean",
                found: "string",
            }
        );
    }

    #[test]
    fn test_number_for_text_is_type_mismatch() {
        let overrides = ConfigOverrides::new().with("pageTitle", OverrideValue::Integer(42));
        let error = defaults().merge(&overrides).unwrap_err();
        assert_eq!(error.kind(), ConfigErrorKind::TypeMismatch);
    }

    #[test]
    fn test_empty_required_text_is_missing() {
        let overrides = ConfigOverrides::new().with("companyName", "");
        let error = defaults().merge(&overrides).unwrap_err();
        assert_eq!(
            error,
            ConfigurationError::MissingRequiredField {
                field: ConfigField::CompanyName
            }
        );
    }

    #[test]
    fn test_clear_required_is_missing() {
        let overrides = ConfigOverrides::new().with("logo", OverrideValue::Clear);
        let error = defaults().merge(&overrides).unwrap_err();
        assert_eq!(error.kind(), ConfigErrorKind::MissingRequiredField);

        let overrides =
            ConfigOverrides::new().with("isPreConnectBufferEnabled", OverrideValue::Clear);
        let error = defaults().merge(&overrides).unwrap_err();
        assert_eq!(error.kind(), ConfigErrorKind::MissingRequiredField);
    }

    #[test]
    fn test_optional_fields_set_and_clear() {
        let overrides = ConfigOverrides::new()
            .with("sandboxId", "sbx-123")
            .with("agent_name", "barista")
            .with("accent", OverrideValue::Clear)
            .with("logoDark", "");
        let config = defaults().merge(&overrides).unwrap().config;

        assert_eq!(config.sandbox_id.as_deref(), Some("sbx-123"));
        assert_eq!(config.agent_name.as_deref(), Some("barista"));
        assert!(config.accent.is_none());
        assert!(config.logo_dark.is_none());
        assert!(config.is_sandboxed());
    }

    #[test]
    fn test_unknown_field_is_warning() {
        let overrides = ConfigOverrides::new()
            .with("theme", "dark")
            .with("accent", "#123456");
        let outcome = defaults().merge(&overrides).unwrap();

        assert_eq!(outcome.config.accent.as_deref(), Some("#123456"));
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].code, ConfigIssueCode::UnknownField);
        assert!(!ConfigIssue::has_errors(&outcome.issues));
        assert!(outcome.issues[0].message.contains("theme"));
    }

    #[test]
    fn test_snake_case_keys_resolve() {
        let overrides = ConfigOverrides::new()
            .with("start_button_text", "Order now")
            .with("supports_screen_share", false);
        let config = defaults().merge(&overrides).unwrap().config;
        assert_eq!(config.start_button_text, "Order now");
        assert!(!config.supports_screen_share);
    }

    #[test]
    fn test_table_for_optional_is_type_mismatch() {
        let overrides = ConfigOverrides::new().with(
            "agentName",
            OverrideValue::Table(Default::default()),
        );
        let error = defaults().merge(&overrides).unwrap_err();
        assert_eq!(
            error,
            ConfigurationError::TypeMismatch {
                field: ConfigField::AgentName,
                expected: "string",
                found: "table",
            }
        );
    }
}
