//! Output formatter trait

use frontend_config_domain::{AppConfig, OutputFormat};

/// Trait for formatting the effective configuration
pub trait OutputFormatter {
    /// Annotated listing of every field
    fn format(&self, config: &AppConfig) -> String;

    /// Format as JSON
    fn format_json(&self, config: &AppConfig) -> String;

    /// Format as environment assignments
    fn format_env(&self, config: &AppConfig) -> String;

    /// Dispatch on an [`OutputFormat`]
    fn render(&self, config: &AppConfig, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(config),
            OutputFormat::Json => self.format_json(config),
            OutputFormat::Env => self.format_env(config),
        }
    }
}
