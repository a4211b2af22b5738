//! Console output formatter for the effective configuration

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use frontend_config_domain::{AppConfig, ConfigField, FieldValue};

/// Environment variable prefix used by `format_env`
const ENV_PREFIX: &str = "FRONTEND_";

/// Formats the effective configuration for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Annotated listing of every field
    pub fn format(config: &AppConfig) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("{} front end", config.company_name)));
        output.push('\n');

        output.push_str(&Self::section_header("Branding"));
        for field in [
            ConfigField::PageTitle,
            ConfigField::PageDescription,
            ConfigField::CompanyName,
            ConfigField::Logo,
            ConfigField::StartButtonText,
        ] {
            output.push_str(&Self::field_line(config, field));
        }

        output.push_str(&Self::section_header("Features"));
        for field in [
            ConfigField::SupportsChatInput,
            ConfigField::SupportsVideoInput,
            ConfigField::SupportsScreenShare,
            ConfigField::IsPreConnectBufferEnabled,
        ] {
            output.push_str(&Self::field_line(config, field));
        }

        output.push_str(&Self::section_header("Theme"));
        for field in [
            ConfigField::Accent,
            ConfigField::LogoDark,
            ConfigField::AccentDark,
        ] {
            output.push_str(&Self::field_line(config, field));
        }

        output.push_str(&Self::section_header("Integration"));
        for field in [ConfigField::SandboxId, ConfigField::AgentName] {
            output.push_str(&Self::field_line(config, field));
        }

        let inputs = config.enabled_inputs();
        let inputs = if inputs.is_empty() {
            "none".to_string()
        } else {
            inputs
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        output.push_str(&format!("\n{} {}\n", "Inputs:".cyan().bold(), inputs));

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(config: &AppConfig) -> String {
        serde_json::to_string_pretty(config).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format as `FRONTEND_*` assignments; unset fields are commented out
    pub fn format_env(config: &AppConfig) -> String {
        let mut output = String::new();

        for field in ConfigField::ALL {
            let name = format!("{}{}", ENV_PREFIX, field.snake_key().to_ascii_uppercase());
            match config.get(field) {
                FieldValue::Text(text) => {
                    output.push_str(&format!("{}={}\n", name, Self::quote(text)));
                }
                FieldValue::Flag(flag) => output.push_str(&format!("{}={}\n", name, flag)),
                FieldValue::Unset => output.push_str(&format!("# {} is unset\n", name)),
            }
        }

        output
    }

    fn field_line(config: &AppConfig, field: ConfigField) -> String {
        let value = match config.get(field) {
            FieldValue::Text(text) => text.to_string(),
            FieldValue::Flag(true) => "on".green().to_string(),
            FieldValue::Flag(false) => "off".red().to_string(),
            FieldValue::Unset => "(unset)".dimmed().to_string(),
        };
        format!(
            "  {:<28} {}  {}\n",
            field.key().yellow(),
            value,
            field.description().dimmed()
        )
    }

    fn quote(text: &str) -> String {
        format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, config: &AppConfig) -> String {
        Self::format(config)
    }

    fn format_json(&self, config: &AppConfig) -> String {
        Self::format_json(config)
    }

    fn format_env(&self, config: &AppConfig) -> String {
        Self::format_env(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontend_config_domain::OutputFormat;

    #[test]
    fn test_format_lists_every_field() {
        let output = ConsoleFormatter::format(&AppConfig::default());
        for field in ConfigField::ALL {
            assert!(output.contains(field.key()), "missing {}", field);
        }
        assert!(output.contains("Brew Bliss Coffee"));
        assert!(output.contains("(unset)"));
    }

    #[test]
    fn test_format_json_round_trips() {
        let config = AppConfig {
            agent_name: Some("barista".to_string()),
            ..AppConfig::default()
        };
        let json = ConsoleFormatter::format_json(&config);
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
        assert!(json.contains("\"agentName\": \"barista\""));
        assert!(!json.contains("sandboxId"));
    }

    #[test]
    fn test_format_env() {
        let output = ConsoleFormatter::format_env(&AppConfig::default());
        assert!(output.contains("FRONTEND_COMPANY_NAME=\"Brew Bliss Coffee\"\n"));
        assert!(output.contains("FRONTEND_IS_PRE_CONNECT_BUFFER_ENABLED=true\n"));
        assert!(output.contains("# FRONTEND_SANDBOX_ID is unset\n"));
        assert_eq!(output.lines().count(), ConfigField::ALL.len());
    }

    #[test]
    fn test_format_env_escapes_quotes() {
        let config = AppConfig {
            start_button_text: "Say \"hi\"".to_string(),
            ..AppConfig::default()
        };
        let output = ConsoleFormatter::format_env(&config);
        assert!(output.contains(r#"FRONTEND_START_BUTTON_TEXT="Say \"hi\"""#));
    }

    #[test]
    fn test_render_dispatches() {
        let config = AppConfig::default();
        let formatter = ConsoleFormatter;
        assert_eq!(
            formatter.render(&config, OutputFormat::Json),
            ConsoleFormatter::format_json(&config)
        );
        assert_eq!(
            formatter.render(&config, OutputFormat::Env),
            ConsoleFormatter::format_env(&config)
        );
    }
}
