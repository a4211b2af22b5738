//! Descriptions of the places overrides are read from

use std::fmt;
use std::path::Path;

/// Kind of override source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Environment,
    Explicit,
    Project,
    Global,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Environment => write!(f, "Env"),
            SourceKind::Explicit => write!(f, "Explicit"),
            SourceKind::Project => write!(f, "Project"),
            SourceKind::Global => write!(f, "Global"),
        }
    }
}

/// A candidate override source and whether it is present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub kind: SourceKind,
    /// File path, or the variable pattern for the environment
    pub location: String,
    pub found: bool,
}

impl ConfigSource {
    pub fn file(kind: SourceKind, path: &Path) -> Self {
        Self {
            kind,
            location: path.display().to_string(),
            found: path.exists(),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.location)
    }
}
