//! Configuration system for the scribe-pad text-entry shell.
//!
//! This crate provides configuration loading, saving, and default values
//! for the application shell. It includes:
//!
//! - Window configuration (title, initial size)
//! - Font resolution configuration (file names, ordered search roots, size)
//! - Log level settings

pub mod config;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::{Config, FontConfig, WindowConfig};
pub use error::ConfigError;
pub use types::LogLevel;
