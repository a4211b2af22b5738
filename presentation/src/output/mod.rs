//! Output formatting for the effective configuration

pub mod console;
pub mod formatter;
