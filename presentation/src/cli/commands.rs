//! CLI command definitions

use clap::{Parser, ValueEnum};
use frontend_config_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for the effective configuration
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Annotated listing of every field
    Full,
    /// JSON object with the front-end's keys
    Json,
    /// FRONTEND_* environment assignments
    Env,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Json => DomainOutputFormat::Json,
            OutputFormat::Env => DomainOutputFormat::Env,
        }
    }
}

/// CLI arguments for agent-frontend-config
#[derive(Parser, Debug)]
#[command(name = "agent-frontend-config")]
#[command(author, version, about = "Resolve the voice-agent front-end configuration")]
#[command(long_about = r#"
Resolves the effective front-end configuration: built-in defaults with
overrides from configuration files and FRONTEND_* environment variables.

Overrides are loaded from (highest priority first):
1. FRONTEND_* environment variables (e.g. FRONTEND_SANDBOX_ID)
2. --config <path>     Explicit config file
3. ./frontend.toml     Project-level config
4. ~/.config/agent-frontend/config.toml   Global config

Loading fails if a required field is emptied or a field has the wrong type.
Unknown keys are reported as warnings and ignored.

Example:
  agent-frontend-config
  agent-frontend-config -o json > app-config.json
  FRONTEND_AGENT_NAME=barista agent-frontend-config --check
"#)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only validate; print warnings and exit
    #[arg(long)]
    pub check: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files and environment overrides
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration sources and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["agent-frontend-config"]);
        assert!(matches!(cli.output, OutputFormat::Full));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.check);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "agent-frontend-config",
            "-o",
            "json",
            "-vv",
            "--config",
            "site.toml",
            "--check",
        ]);
        assert!(matches!(cli.output, OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(cli.check);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
    }

    #[test]
    fn test_no_config_conflicts_with_config() {
        let result = Cli::try_parse_from([
            "agent-frontend-config",
            "--no-config",
            "--config",
            "site.toml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Env),
            DomainOutputFormat::Env
        );
    }
}
