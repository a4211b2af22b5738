//! Output format value object

use serde::{Deserialize, Serialize};

/// How the effective configuration is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Annotated listing of every field (default)
    #[default]
    Full,
    /// JSON object with the serialized schema keys
    Json,
    /// `FRONTEND_*=value` lines, suitable for an env file
    Env,
}
