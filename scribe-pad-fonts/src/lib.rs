//! Font resolution for the scribe-pad text-entry shell.
//!
//! This crate provides:
//! - Ordered candidate-path font loading with validation
//! - Merge-mode secondary fonts for extended script coverage
//! - Graceful degradation to the toolkit's embedded default fonts
//!
//! # Architecture
//!
//! [`resolver::resolve`] walks the configured candidate chain once at
//! startup and produces a [`FontSet`]: the primary font, an optional
//! secondary script-coverage font, and the resolution status. The set is
//! then installed into an `egui::Context`, which bakes the font atlas. When
//! every external candidate is missing or unparseable, the set degrades to
//! egui's embedded fonts — resolution never fails outright.

pub mod glyph_ranges;
pub mod resolver;
mod types;

// Re-export main types for convenience
pub use glyph_ranges::{GlyphRanges, MISSING_GLYPH_PLACEHOLDER};
pub use resolver::{
    FontSet, LoadedFont, PRIMARY_FAMILY, ResolutionStatus, SECONDARY_FAMILY, resolve,
};
pub use types::FontData;
