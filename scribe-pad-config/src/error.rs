//! Typed error variants for the scribe-pad-config crate.
//!
//! Structured error types for config I/O and parse operations, exposed so
//! library consumers can match on specific failure modes instead of opaque
//! strings.

use thiserror::Error;

/// Errors that can occur when loading or saving configuration.
///
/// Produced by [`crate::Config::load`] and [`crate::Config::save`]. A missing
/// config file is not an error (defaults apply); a file that exists but fails
/// to read or parse is, so a user's broken edit is surfaced instead of being
/// silently replaced by defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}
