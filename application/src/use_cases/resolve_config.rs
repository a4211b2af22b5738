//! Resolve config use case
//!
//! Produces the effective front-end configuration: reads overrides from a
//! source, merges them over the defaults, validates the result and fails
//! closed on anything fatal. Everything is checked here, at load time, so
//! consumers never see a half-valid configuration.
//!
//! Warnings are logged here and nowhere else. Fatal problems are not logged:
//! they are returned, and the caller reports them once.

use crate::ports::override_source::{OverrideSourceError, OverrideSourcePort};
use frontend_config_domain::{
    AppConfig, ConfigIssue, ConfigurationError, MergeOutcome, Severity,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that stop configuration from resolving
#[derive(Error, Debug)]
pub enum ResolveConfigError {
    #[error("Failed to read overrides: {0}")]
    Source(#[from] OverrideSourceError),

    #[error("Invalid override: {0}")]
    Invalid(#[from] ConfigurationError),

    #[error("Configuration rejected: {}", summarize(.issues))]
    Rejected { issues: Vec<ConfigIssue> },
}

fn summarize(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .filter(|issue| issue.is_error())
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// The effective configuration and any non-fatal issues found on the way.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: AppConfig,
    pub issues: Vec<ConfigIssue>,
}

impl ResolvedConfig {
    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
    }
}

/// Use case for resolving the effective configuration
pub struct ResolveConfigUseCase<'a, S: OverrideSourcePort> {
    defaults: &'a AppConfig,
    source: S,
}

impl<'a, S: OverrideSourcePort> ResolveConfigUseCase<'a, S> {
    pub fn new(defaults: &'a AppConfig, source: S) -> Self {
        Self { defaults, source }
    }

    pub fn execute(&self) -> Result<ResolvedConfig, ResolveConfigError> {
        info!("Resolving configuration from {}", self.source.describe());

        let overrides = self.source.load_overrides()?;
        debug!("Loaded {} override(s)", overrides.len());
        for (key, value) in overrides.iter() {
            debug!("Override {} ({})", key, value.type_name());
        }

        let MergeOutcome { config, mut issues } = self.defaults.merge(&overrides)?;
        issues.extend(config.validate());

        for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
            warn!("{}", issue.message);
        }

        if ConfigIssue::has_errors(&issues) {
            return Err(ResolveConfigError::Rejected { issues });
        }

        Ok(ResolvedConfig { config, issues })
    }
}
