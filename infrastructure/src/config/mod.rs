//! Configuration override loading for agent-frontend-config
//!
//! This module handles file I/O and merging of overrides from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FRONTEND_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./frontend.toml` or `./.frontend.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/agent-frontend/config.toml`
//! 5. Built-in defaults (not an override source; applied by the merge)
//!
//! Keys may be written as `pageTitle` or `page_title`. TOML has no null, so
//! an optional field is cleared with an empty string.

mod loader;
mod sources;

pub use loader::{ConfigLoader, LoadError, ENV_PREFIX, PROJECT_FILES};
pub use sources::{ConfigSource, SourceKind};
