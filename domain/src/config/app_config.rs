//! The front-end application configuration record

use super::config_key::ConfigField;
use super::defaults;
use super::validation::{is_hex_color, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Branding, feature flags and integration identifiers for the front end.
///
/// Built once at startup (defaults plus overrides) and then only shared by
/// reference. Optional fields use `None` for "not configured"; an empty
/// string is never used as a stand-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub page_title: String,
    pub page_description: String,
    pub company_name: String,

    pub supports_chat_input: bool,
    pub supports_video_input: bool,
    pub supports_screen_share: bool,
    pub is_pre_connect_buffer_enabled: bool,

    pub logo: String,
    pub start_button_text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_dark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_dark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_title: defaults::PAGE_TITLE.to_string(),
            page_description: defaults::PAGE_DESCRIPTION.to_string(),
            company_name: defaults::COMPANY_NAME.to_string(),
            supports_chat_input: defaults::SUPPORTS_CHAT_INPUT,
            supports_video_input: defaults::SUPPORTS_VIDEO_INPUT,
            supports_screen_share: defaults::SUPPORTS_SCREEN_SHARE,
            is_pre_connect_buffer_enabled: defaults::IS_PRE_CONNECT_BUFFER_ENABLED,
            logo: defaults::LOGO.to_string(),
            start_button_text: defaults::START_BUTTON_TEXT.to_string(),
            accent: Some(defaults::ACCENT.to_string()),
            logo_dark: Some(defaults::LOGO_DARK.to_string()),
            accent_dark: Some(defaults::ACCENT_DARK.to_string()),
            sandbox_id: None,
            agent_name: None,
        }
    }
}

/// Borrowed view of a single field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
    Unset,
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Unset => f.write_str("(unset)"),
        }
    }
}

/// Input modalities the UI can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputModality {
    Chat,
    Video,
    ScreenShare,
}

impl fmt::Display for InputModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputModality::Chat => write!(f, "chat"),
            InputModality::Video => write!(f, "video"),
            InputModality::ScreenShare => write!(f, "screen-share"),
        }
    }
}

impl AppConfig {
    /// Read a field by its schema identifier.
    pub fn get(&self, field: ConfigField) -> FieldValue<'_> {
        fn optional(value: &Option<String>) -> FieldValue<'_> {
            value.as_deref().map_or(FieldValue::Unset, FieldValue::Text)
        }

        match field {
            ConfigField::PageTitle => FieldValue::Text(&self.page_title),
            ConfigField::PageDescription => FieldValue::Text(&self.page_description),
            ConfigField::CompanyName => FieldValue::Text(&self.company_name),
            ConfigField::SupportsChatInput => FieldValue::Flag(self.supports_chat_input),
            ConfigField::SupportsVideoInput => FieldValue::Flag(self.supports_video_input),
            ConfigField::SupportsScreenShare => FieldValue::Flag(self.supports_screen_share),
            ConfigField::IsPreConnectBufferEnabled => {
                FieldValue::Flag(self.is_pre_connect_buffer_enabled)
            }
            ConfigField::Logo => FieldValue::Text(&self.logo),
            ConfigField::StartButtonText => FieldValue::Text(&self.start_button_text),
            ConfigField::Accent => optional(&self.accent),
            ConfigField::LogoDark => optional(&self.logo_dark),
            ConfigField::AccentDark => optional(&self.accent_dark),
            ConfigField::SandboxId => optional(&self.sandbox_id),
            ConfigField::AgentName => optional(&self.agent_name),
        }
    }

    /// Input modalities whose feature flag is on, in display order.
    pub fn enabled_inputs(&self) -> Vec<InputModality> {
        [
            (self.supports_chat_input, InputModality::Chat),
            (self.supports_video_input, InputModality::Video),
            (self.supports_screen_share, InputModality::ScreenShare),
        ]
        .into_iter()
        .filter_map(|(enabled, modality)| enabled.then_some(modality))
        .collect()
    }

    /// Whether sessions should be routed to an external sandbox.
    pub fn is_sandboxed(&self) -> bool {
        self.sandbox_id.is_some()
    }

    /// Validate the configuration, returning all detected issues.
    ///
    /// Values produced by [`merge`](Self::merge) already satisfy the
    /// presence rules; this also covers values deserialized or built by hand.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for field in ConfigField::ALL {
            let FieldValue::Text(text) = self.get(field) else {
                continue;
            };
            if !text.trim().is_empty() {
                continue;
            }
            if field.is_required() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::MissingRequiredField,
                    Some(field),
                    format!("required field '{}' is empty", field),
                ));
            } else {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyOptionalField,
                    Some(field),
                    format!("optional field '{}' is set to an empty string", field),
                ));
            }
        }

        for field in [ConfigField::Accent, ConfigField::AccentDark] {
            if let FieldValue::Text(color) = self.get(field) {
                if !color.trim().is_empty() && !is_hex_color(color) {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::InvalidAccentColor,
                        Some(field),
                        format!("'{}' is not a hex color: {}", field, color),
                    ));
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::Severity;

    #[test]
    fn test_default_required_fields_present() {
        let config = AppConfig::default();
        for field in ConfigField::ALL.into_iter().filter(|f| f.is_required()) {
            match config.get(field) {
                FieldValue::Text(text) => assert!(!text.trim().is_empty(), "{} is empty", field),
                FieldValue::Flag(_) => {}
                FieldValue::Unset => panic!("{} is unset", field),
            }
        }
    }

    #[test]
    fn test_default_has_no_sandbox() {
        let config = AppConfig::default();
        assert!(config.sandbox_id.is_none());
        assert!(config.agent_name.is_none());
        assert!(!config.is_sandboxed());
    }

    #[test]
    fn test_default_branding_prefilled() {
        let config = AppConfig::default();
        assert_eq!(config.company_name, "Brew Bliss Coffee");
        assert_eq!(config.accent.as_deref(), Some("#6f4e37"));
        assert_eq!(config.logo_dark.as_deref(), Some("/brew-bliss-logo-dark.svg"));
        assert_eq!(config.accent_dark.as_deref(), Some("#d4a373"));
    }

    #[test]
    fn test_default_is_stable() {
        let first = AppConfig::default();
        let second = AppConfig::default();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_validates_clean() {
        assert!(AppConfig::default().validate().is_empty());
    }

    #[test]
    fn test_serialize_camel_case_and_skip_unset() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        assert_eq!(json["companyName"], "Brew Bliss Coffee");
        assert_eq!(json["isPreConnectBufferEnabled"], true);
        assert_eq!(json["accentDark"], "#d4a373");
        assert!(json.get("sandboxId").is_none());
        assert!(json.get("agentName").is_none());
    }

    #[test]
    fn test_deserialize_requires_required_fields() {
        let json = r#"{ "pageTitle": "Only a title" }"#;
        assert!(serde_json::from_str::<AppConfig>(json).is_err());
    }

    #[test]
    fn test_enabled_inputs() {
        let mut config = AppConfig::default();
        assert_eq!(
            config.enabled_inputs(),
            vec![InputModality::Chat, InputModality::Video, InputModality::ScreenShare]
        );

        config.supports_video_input = false;
        assert_eq!(
            config.enabled_inputs(),
            vec![InputModality::Chat, InputModality::ScreenShare]
        );
    }

    #[test]
    fn test_get_optional_unset() {
        let config = AppConfig::default();
        assert_eq!(config.get(ConfigField::SandboxId), FieldValue::Unset);
        assert_eq!(config.get(ConfigField::Accent), FieldValue::Text("#6f4e37"));
        assert_eq!(
            config.get(ConfigField::SupportsScreenShare),
            FieldValue::Flag(true)
        );
    }

    #[test]
    fn test_validate_blank_required_field() {
        let config = AppConfig {
            start_button_text: "  ".to_string(),
            ..AppConfig::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::MissingRequiredField);
        assert_eq!(issues[0].field, Some(ConfigField::StartButtonText));
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn test_validate_empty_optional_field() {
        let config = AppConfig {
            agent_name: Some(String::new()),
            ..AppConfig::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::EmptyOptionalField);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_validate_bad_accent_is_warning() {
        let config = AppConfig {
            accent_dark: Some("teal".to_string()),
            ..AppConfig::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::InvalidAccentColor);
        assert!(!ConfigIssue::has_errors(&issues));
    }
}
