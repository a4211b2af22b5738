//! Configuration override loader with multi-source merging

use super::sources::{ConfigSource, SourceKind};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use frontend_config_application::{OverrideSourceError, OverrideSourcePort};
use frontend_config_domain::config::{lookup_key, FieldKind};
use frontend_config_domain::{ConfigOverrides, OverrideValue};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Prefix for environment variable overrides (`FRONTEND_ACCENT`, ...)
pub const ENV_PREFIX: &str = "FRONTEND_";

/// Project-level file names, checked in order
pub const PROJECT_FILES: [&str; 2] = ["frontend.toml", ".frontend.toml"];

const APP_DIR: &str = "agent-frontend";

/// Errors while reading override sources
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
}

/// Loads configuration overrides from files and the environment.
///
/// Priority (highest to lowest):
/// 1. Environment variables prefixed with [`ENV_PREFIX`]
/// 2. Explicit config path (if provided)
/// 3. Project root: `./frontend.toml` or `./.frontend.toml`
/// 4. XDG config: `$XDG_CONFIG_HOME/agent-frontend/config.toml`
///
/// Each layer's keys are canonicalized before layering, so a higher layer
/// wins regardless of whether either side spells a key in camelCase or
/// snake_case. Anything no source mentions keeps its built-in default.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    project_dir: Option<PathBuf>,
    global_path: Option<PathBuf>,
    env_prefix: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            explicit_path: None,
            project_dir: Some(PathBuf::from(".")),
            global_path: Self::global_config_path(),
            env_prefix: Some(ENV_PREFIX.to_string()),
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader with every source disabled (`--no-config`)
    pub fn defaults_only() -> Self {
        Self {
            explicit_path: None,
            project_dir: None,
            global_path: None,
            env_prefix: None,
        }
    }

    /// Add an explicit config file (must exist)
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    /// Directory searched for project-level files
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = Some(dir.into());
        self
    }

    /// Override (or disable, with `None`) the global config file
    pub fn with_global_path(mut self, path: Option<PathBuf>) -> Self {
        self.global_path = path;
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Ignore environment variables
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/agent-frontend/config.toml` (or the
    /// platform equivalent), whether or not it exists.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path(&self) -> Option<PathBuf> {
        let dir = self.project_dir.as_ref()?;
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Load overrides from all sources with proper priority
    ///
    /// Layers are read lowest priority first and laid over each other.
    pub fn load(&self) -> Result<ConfigOverrides, LoadError> {
        let mut overrides = ConfigOverrides::new();

        if let Some(global_path) = self.global_path.as_deref().filter(|p| p.exists()) {
            debug!("Merging global config {}", global_path.display());
            overrides.overlay(Self::file_layer(global_path)?);
        }

        if let Some(project_path) = self.project_config_path() {
            debug!("Merging project config {}", project_path.display());
            overrides.overlay(Self::file_layer(&project_path)?);
        }

        if let Some(path) = &self.explicit_path {
            if !path.exists() {
                return Err(LoadError::NotFound(path.clone()));
            }
            debug!("Merging explicit config {}", path.display());
            overrides.overlay(Self::file_layer(path)?);
        }

        if let Some(prefix) = &self.env_prefix {
            debug!("Merging environment variables with prefix {}", prefix);
            overrides.overlay(Self::env_layer(prefix));
        }

        Ok(overrides)
    }

    /// Extract one layer's overrides from a figment, with canonical keys.
    pub fn extract(figment: &Figment) -> Result<ConfigOverrides, LoadError> {
        figment
            .extract::<ConfigOverrides>()
            .map(ConfigOverrides::canonicalize)
            .map_err(|e| LoadError::Figment(Box::new(e)))
    }

    fn file_layer(path: &Path) -> Result<ConfigOverrides, LoadError> {
        Self::extract(&Figment::from(Toml::file(path)))
    }

    /// Environment values are untyped: text fields keep the raw string and
    /// only flag fields are parsed, as `true` or `false`.
    fn env_layer(prefix: &str) -> ConfigOverrides {
        Env::prefixed(prefix)
            .iter()
            .map(|(key, raw)| {
                let key = key.as_str().to_ascii_lowercase();
                let value = match lookup_key(&key).map(|info| info.kind) {
                    Some(FieldKind::Flag) => {
                        match raw.trim().to_ascii_lowercase().parse::<bool>() {
                            Ok(flag) => OverrideValue::Flag(flag),
                            Err(_) => OverrideValue::Text(raw),
                        }
                    }
                    _ => OverrideValue::Text(raw),
                };
                (key, value)
            })
            .collect::<ConfigOverrides>()
            .canonicalize()
    }

    /// Describe every candidate source, in priority order (highest first).
    pub fn sources(&self) -> Vec<ConfigSource> {
        let mut sources = Vec::new();

        if let Some(prefix) = &self.env_prefix {
            // Env::prefixed matches the prefix case-insensitively
            let prefix_upper = prefix.to_ascii_uppercase();
            let found = std::env::vars_os().any(|(key, _)| {
                key.to_str()
                    .is_some_and(|k| k.to_ascii_uppercase().starts_with(&prefix_upper))
            });
            sources.push(ConfigSource {
                kind: SourceKind::Environment,
                location: format!("{}*", prefix),
                found,
            });
        }

        if let Some(path) = &self.explicit_path {
            sources.push(ConfigSource::file(SourceKind::Explicit, path));
        }

        if let Some(dir) = &self.project_dir {
            match self.project_config_path() {
                Some(path) => sources.push(ConfigSource::file(SourceKind::Project, &path)),
                None => sources.push(ConfigSource {
                    kind: SourceKind::Project,
                    location: PROJECT_FILES
                        .iter()
                        .map(|name| display_path(&dir.join(name)))
                        .collect::<Vec<_>>()
                        .join(" or "),
                    found: false,
                }),
            }
        }

        if let Some(path) = &self.global_path {
            sources.push(ConfigSource::file(SourceKind::Global, path));
        }

        sources
    }

    /// Print the config source locations being used (for debugging)
    pub fn print_config_sources(&self) {
        print!("{}", self.format_config_sources());
    }

    /// The `--show-config` listing, one line per candidate source.
    pub fn format_config_sources(&self) -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");
        for source in self.sources() {
            let marker = if source.found { "FOUND" } else { "     " };
            out.push_str(&format!(
                "  [{}] {:<9} {}\n",
                marker,
                format!("{}:", source.kind),
                source.location
            ));
        }
        out.push_str("  [     ] Default:  built-in defaults\n");
        out
    }

    fn describe_sources(&self) -> String {
        let found: Vec<_> = self
            .sources()
            .into_iter()
            .filter(|s| s.found)
            .map(|s| s.to_string())
            .collect();
        if found.is_empty() {
            "built-in defaults".to_string()
        } else {
            found.join(", ")
        }
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

impl OverrideSourcePort for ConfigLoader {
    fn describe(&self) -> String {
        self.describe_sources()
    }

    fn load_overrides(&self) -> Result<ConfigOverrides, OverrideSourceError> {
        self.load().map_err(|e| match e {
            LoadError::NotFound(path) => OverrideSourceError::NotFound(path.display().to_string()),
            LoadError::Figment(e) => OverrideSourceError::Malformed(e.to_string()),
        })
    }
}
