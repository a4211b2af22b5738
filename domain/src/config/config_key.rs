//! Config key registry for the front-end configuration schema.
//!
//! Defines metadata for every known field: serialized key, environment
//! spelling, value kind and whether it is required. Used by the merge rules
//! and by anything that needs to enumerate the schema (formatters, loaders).

use std::fmt;

/// One field of [`AppConfig`](super::AppConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigField {
    PageTitle,
    PageDescription,
    CompanyName,
    SupportsChatInput,
    SupportsVideoInput,
    SupportsScreenShare,
    IsPreConnectBufferEnabled,
    Logo,
    StartButtonText,
    Accent,
    LogoDark,
    AccentDark,
    SandboxId,
    AgentName,
}

/// Value type of a config field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Flag,
}

impl FieldKind {
    pub fn type_name(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Flag => "boolean",
        }
    }
}

/// Metadata for a single config key.
#[derive(Debug, Clone)]
pub struct ConfigKeyInfo {
    pub field: ConfigField,
    /// Serialized key (e.g., `"pageTitle"`).
    pub key: &'static str,
    /// Lower snake_case spelling, as produced by environment providers.
    pub snake_key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Human-readable description.
    pub description: &'static str,
}

impl ConfigField {
    /// Every field, in schema order.
    pub const ALL: [ConfigField; 14] = [
        ConfigField::PageTitle,
        ConfigField::PageDescription,
        ConfigField::CompanyName,
        ConfigField::SupportsChatInput,
        ConfigField::SupportsVideoInput,
        ConfigField::SupportsScreenShare,
        ConfigField::IsPreConnectBufferEnabled,
        ConfigField::Logo,
        ConfigField::StartButtonText,
        ConfigField::Accent,
        ConfigField::LogoDark,
        ConfigField::AccentDark,
        ConfigField::SandboxId,
        ConfigField::AgentName,
    ];

    pub fn info(self) -> &'static ConfigKeyInfo {
        // KNOWN_KEYS is laid out in declaration order
        &KNOWN_KEYS[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn snake_key(self) -> &'static str {
        self.info().snake_key
    }

    pub fn kind(self) -> FieldKind {
        self.info().kind
    }

    pub fn is_required(self) -> bool {
        self.info().required
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    /// Resolve a field from either its camelCase or snake_case key.
    pub fn from_key(key: &str) -> Option<ConfigField> {
        lookup_key(key).map(|info| info.field)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// All known config keys with their metadata.
pub fn known_keys() -> &'static [ConfigKeyInfo] {
    &KNOWN_KEYS
}

/// Look up a config key by its serialized or snake_case name.
pub fn lookup_key(key: &str) -> Option<&'static ConfigKeyInfo> {
    KNOWN_KEYS
        .iter()
        .find(|k| k.key == key || k.snake_key == key)
}

static KNOWN_KEYS: [ConfigKeyInfo; 14] = [
    // ==================== Branding ====================
    ConfigKeyInfo {
        field: ConfigField::PageTitle,
        key: "pageTitle",
        snake_key: "page_title",
        kind: FieldKind::Text,
        required: true,
        description: "Browser/tab title",
    },
    ConfigKeyInfo {
        field: ConfigField::PageDescription,
        key: "pageDescription",
        snake_key: "page_description",
        kind: FieldKind::Text,
        required: true,
        description: "Meta description text",
    },
    ConfigKeyInfo {
        field: ConfigField::CompanyName,
        key: "companyName",
        snake_key: "company_name",
        kind: FieldKind::Text,
        required: true,
        description: "Brand name shown in the UI",
    },
    // ==================== Feature flags ====================
    ConfigKeyInfo {
        field: ConfigField::SupportsChatInput,
        key: "supportsChatInput",
        snake_key: "supports_chat_input",
        kind: FieldKind::Flag,
        required: true,
        description: "Chat input enabled",
    },
    ConfigKeyInfo {
        field: ConfigField::SupportsVideoInput,
        key: "supportsVideoInput",
        snake_key: "supports_video_input",
        kind: FieldKind::Flag,
        required: true,
        description: "Video input enabled",
    },
    ConfigKeyInfo {
        field: ConfigField::SupportsScreenShare,
        key: "supportsScreenShare",
        snake_key: "supports_screen_share",
        kind: FieldKind::Flag,
        required: true,
        description: "Screen share enabled",
    },
    ConfigKeyInfo {
        field: ConfigField::IsPreConnectBufferEnabled,
        key: "isPreConnectBufferEnabled",
        snake_key: "is_pre_connect_buffer_enabled",
        kind: FieldKind::Flag,
        required: true,
        description: "Buffer audio before the connection is established",
    },
    // ==================== Assets and labels ====================
    ConfigKeyInfo {
        field: ConfigField::Logo,
        key: "logo",
        snake_key: "logo",
        kind: FieldKind::Text,
        required: true,
        description: "Light-theme logo path or URL",
    },
    ConfigKeyInfo {
        field: ConfigField::StartButtonText,
        key: "startButtonText",
        snake_key: "start_button_text",
        kind: FieldKind::Text,
        required: true,
        description: "Label of the primary call-to-action button",
    },
    // ==================== Optional theming ====================
    ConfigKeyInfo {
        field: ConfigField::Accent,
        key: "accent",
        snake_key: "accent",
        kind: FieldKind::Text,
        required: false,
        description: "Light-theme accent color (hex)",
    },
    ConfigKeyInfo {
        field: ConfigField::LogoDark,
        key: "logoDark",
        snake_key: "logo_dark",
        kind: FieldKind::Text,
        required: false,
        description: "Dark-theme logo path or URL",
    },
    ConfigKeyInfo {
        field: ConfigField::AccentDark,
        key: "accentDark",
        snake_key: "accent_dark",
        kind: FieldKind::Text,
        required: false,
        description: "Dark-theme accent color (hex)",
    },
    // ==================== Integration ====================
    ConfigKeyInfo {
        field: ConfigField::SandboxId,
        key: "sandboxId",
        snake_key: "sandbox_id",
        kind: FieldKind::Text,
        required: false,
        description: "External sandbox environment identifier",
    },
    ConfigKeyInfo {
        field: ConfigField::AgentName,
        key: "agentName",
        snake_key: "agent_name",
        kind: FieldKind::Text,
        required: false,
        description: "Name of the agent to dispatch into the session",
    },
];
