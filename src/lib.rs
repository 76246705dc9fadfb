// Library exports for testing and potential library use

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod compose;
pub mod debug;
pub mod engine;
pub mod ui_constants;

pub mod config {
    //! Configuration re-exports from the `scribe-pad-config` sub-crate.
    pub use scribe_pad_config::{Config, FontConfig, LogLevel, WindowConfig};
}

pub mod fonts {
    //! Font resolution re-exports from the `scribe-pad-fonts` sub-crate.
    pub use scribe_pad_fonts::{FontSet, ResolutionStatus, resolve};
}
