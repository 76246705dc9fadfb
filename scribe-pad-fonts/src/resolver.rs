//! Ordered candidate-path font resolution.
//!
//! Resolution runs once at startup, before any frame is drawn. It walks the
//! configured candidate chain for the primary font, then (only if a primary
//! loaded) for the merge-mode secondary font, and degrades to egui's
//! embedded fonts when nothing external is usable. Every attempt is logged;
//! none of them can fail the application.

use std::fs;
use std::path::{Path, PathBuf};

use scribe_pad_config::FontConfig;

use crate::glyph_ranges::{GlyphRanges, MISSING_GLYPH_PLACEHOLDER};
use crate::types::FontData;

/// Family name the primary font is registered under in the egui atlas.
pub const PRIMARY_FAMILY: &str = "scribe-primary";

/// Family name the merged secondary font is registered under.
pub const SECONDARY_FAMILY: &str = "scribe-secondary";

/// How resolution ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// No external font loaded; egui's embedded fonts carry the session.
    Default,
    /// The primary font loaded; no secondary coverage font did.
    PrimaryOnly,
    /// Primary loaded and the secondary merged into its fallback chain.
    PrimaryPlusSecondary,
}

impl ResolutionStatus {
    /// Short human-readable label for diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            ResolutionStatus::Default => "built-in default",
            ResolutionStatus::PrimaryOnly => "primary only",
            ResolutionStatus::PrimaryPlusSecondary => "primary + secondary",
        }
    }
}

/// One successfully loaded external font.
#[derive(Debug, Clone)]
pub struct LoadedFont {
    /// Atlas family name
    pub family: &'static str,
    /// Candidate path the font was loaded from
    pub path: PathBuf,
    /// Validated font bytes
    pub data: FontData,
}

/// The resolved rendering fonts for the session.
///
/// Created once at startup and immutable thereafter. The set is always
/// installable: with status [`ResolutionStatus::Default`] the definitions
/// are egui's embedded fonts, so a usable font exists in every case.
#[derive(Debug, Clone)]
pub struct FontSet {
    status: ResolutionStatus,
    pixel_size: f32,
    primary: Option<LoadedFont>,
    secondary: Option<LoadedFont>,
}

impl FontSet {
    /// How resolution ended.
    pub fn status(&self) -> ResolutionStatus {
        self.status
    }

    /// Target glyph pixel size.
    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    /// The loaded primary font, if an external one resolved.
    pub fn primary(&self) -> Option<&LoadedFont> {
        self.primary.as_ref()
    }

    /// The merged secondary font, if one resolved.
    pub fn secondary(&self) -> Option<&LoadedFont> {
        self.secondary.as_ref()
    }

    /// Build the egui font definitions for this set.
    ///
    /// Starts from egui's embedded defaults (the guaranteed fallback) and
    /// places the primary at the front of the proportional family, with the
    /// secondary directly behind it so its glyphs extend the primary's
    /// coverage rather than replacing it.
    pub fn definitions(&self) -> egui::FontDefinitions {
        let mut fonts = egui::FontDefinitions::default();

        let proportional = fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default();

        if let Some(secondary) = &self.secondary {
            proportional.insert(0, secondary.family.to_owned());
        }
        if let Some(primary) = &self.primary {
            proportional.insert(0, primary.family.to_owned());
        }

        for font in [&self.primary, &self.secondary].into_iter().flatten() {
            fonts.font_data.insert(
                font.family.to_owned(),
                egui::FontData::from_owned(font.data.data.as_ref().clone()).into(),
            );
        }

        fonts
    }

    /// Install the set into an egui context: set the font definitions (the
    /// atlas bake) and apply the pixel size to every text style.
    pub fn install(&self, ctx: &egui::Context) {
        ctx.set_fonts(self.definitions());

        let size = self.pixel_size;
        ctx.all_styles_mut(|style| {
            use egui::{FontFamily, FontId, TextStyle};
            style.text_styles = [
                (TextStyle::Heading, FontId::new(size * 1.4, FontFamily::Proportional)),
                (TextStyle::Body, FontId::new(size, FontFamily::Proportional)),
                (TextStyle::Button, FontId::new(size, FontFamily::Proportional)),
                (TextStyle::Monospace, FontId::new(size, FontFamily::Monospace)),
                (TextStyle::Small, FontId::new(size * 0.75, FontFamily::Proportional)),
            ]
            .into();
        });
    }
}

/// Resolve a usable font set for the session.
///
/// Never fails: the worst case is a [`ResolutionStatus::Default`] set backed
/// by egui's embedded fonts. Candidate paths are tried in configured order
/// and the first existing, parseable file wins; a file that exists but does
/// not parse is skipped exactly like a missing one.
pub fn resolve(pixel_size: f32, font_config: &FontConfig) -> FontSet {
    let ranges = GlyphRanges::for_secondary_script();

    let Some(primary) = load_first_candidate(&font_config.primary_candidates(), PRIMARY_FAMILY)
    else {
        log::warn!("No primary font candidate loaded, using built-in default fonts");
        return FontSet {
            status: ResolutionStatus::Default,
            pixel_size,
            primary: None,
            secondary: None,
        };
    };

    let secondary = load_first_candidate(&font_config.secondary_candidates(), SECONDARY_FAMILY);
    let status = match &secondary {
        Some(font) => {
            report_secondary_coverage(font, &ranges);
            ResolutionStatus::PrimaryPlusSecondary
        }
        None => {
            log::warn!("No secondary font candidate loaded, extended script coverage reduced");
            ResolutionStatus::PrimaryOnly
        }
    };

    FontSet {
        status,
        pixel_size,
        primary: Some(primary),
        secondary,
    }
}

/// Walk one candidate chain and return the first existing, parseable font.
fn load_first_candidate(candidates: &[PathBuf], family: &'static str) -> Option<LoadedFont> {
    for path in candidates {
        log::debug!("Trying {family} candidate: {}", path.display());
        if !path.exists() {
            log::debug!("{family} candidate does not exist: {}", path.display());
            continue;
        }
        match load_candidate(path) {
            Ok(data) => {
                log::info!("Loaded {family} font from {}", path.display());
                return Some(LoadedFont {
                    family,
                    path: path.clone(),
                    data,
                });
            }
            Err(reason) => {
                log::warn!("Skipping {family} candidate {}: {reason}", path.display());
            }
        }
    }
    None
}

fn load_candidate(path: &Path) -> Result<FontData, String> {
    let bytes = fs::read(path).map_err(|e| format!("read failed: {e}"))?;
    FontData::new(bytes).ok_or_else(|| "not a parseable font face".to_string())
}

fn report_secondary_coverage(font: &LoadedFont, ranges: &GlyphRanges) {
    let (covered, sampled) = ranges.sample_coverage(&font.data);
    log::info!(
        "Secondary font {} covers {covered} of {sampled} sampled code points",
        font.path.display()
    );
    if !font.data.has_glyph(MISSING_GLYPH_PLACEHOLDER) {
        log::warn!(
            "Secondary font {} lacks the missing-glyph placeholder U+{:04X}",
            font.path.display(),
            MISSING_GLYPH_PLACEHOLDER as u32
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_still_installable() {
        let set = FontSet {
            status: ResolutionStatus::Default,
            pixel_size: 22.0,
            primary: None,
            secondary: None,
        };
        let fonts = set.definitions();
        assert!(!fonts.font_data.is_empty(), "embedded fonts must remain");
        let proportional = &fonts.families[&egui::FontFamily::Proportional];
        assert!(!proportional.is_empty());
    }

    #[test]
    fn status_labels_are_distinct() {
        let labels = [
            ResolutionStatus::Default.display_name(),
            ResolutionStatus::PrimaryOnly.display_name(),
            ResolutionStatus::PrimaryPlusSecondary.display_name(),
        ];
        assert_eq!(labels.len(), {
            let mut unique = labels.to_vec();
            unique.sort_unstable();
            unique.dedup();
            unique.len()
        });
    }
}
