//! Built-in configuration values for the Brew Bliss Coffee deployment.
//!
//! These are the literals behind [`AppConfig::default`](super::AppConfig).
//! Optional fields without a constant here (sandbox, agent name) stay unset
//! unless an override supplies them.

pub const PAGE_TITLE: &str = "Brew Bliss Coffee – Voice Barista";
pub const PAGE_DESCRIPTION: &str = "Order your favorite drink by voice with the Brew Bliss barista";
pub const COMPANY_NAME: &str = "Brew Bliss Coffee";

pub const SUPPORTS_CHAT_INPUT: bool = true;
pub const SUPPORTS_VIDEO_INPUT: bool = true;
pub const SUPPORTS_SCREEN_SHARE: bool = true;
pub const IS_PRE_CONNECT_BUFFER_ENABLED: bool = true;

pub const LOGO: &str = "/brew-bliss-logo.svg";
pub const START_BUTTON_TEXT: &str = "Start your order";

pub const ACCENT: &str = "#6f4e37";
pub const LOGO_DARK: &str = "/brew-bliss-logo-dark.svg";
pub const ACCENT_DARK: &str = "#d4a373";
