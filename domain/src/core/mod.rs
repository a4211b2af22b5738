//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ConfigurationError`] — fatal and recoverable configuration errors

pub mod error;
