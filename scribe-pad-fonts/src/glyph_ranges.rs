//! Glyph-range specification for secondary script coverage.
//!
//! Defines the code-point ranges the secondary font is expected to supply,
//! plus the single auxiliary glyph the shell requires for rendering
//! missing-glyph placeholders.

use std::ops::RangeInclusive;

use crate::types::FontData;

/// Placeholder drawn in place of glyphs no resolved font covers.
///
/// U+25A1 WHITE SQUARE. The range specification always includes it so the
/// placeholder itself never renders as a placeholder.
pub const MISSING_GLYPH_PLACEHOLDER: char = '\u{25A1}';

/// Code-point ranges used to assess a secondary font's script coverage.
#[derive(Debug, Clone)]
pub struct GlyphRanges {
    ranges: Vec<RangeInclusive<u32>>,
}

impl GlyphRanges {
    /// Build the range specification: the default script plus the extended
    /// (Japanese) blocks and the required placeholder glyph.
    pub fn for_secondary_script() -> Self {
        GlyphRanges {
            ranges: vec![
                // Basic Latin + Latin-1 Supplement (default script)
                0x0020..=0x00FF,
                // Missing-glyph placeholder (Geometric Shapes subset)
                placeholder_range(),
                // CJK Symbols and Punctuation, Hiragana, Katakana
                0x3000..=0x30FF,
                // Katakana Phonetic Extensions
                0x31F0..=0x31FF,
                // Halfwidth and Fullwidth Forms
                0xFF00..=0xFFEF,
                // CJK Unified Ideographs (common block)
                0x4E00..=0x9FAF,
            ],
        }
    }

    /// Whether `character` falls inside any range.
    pub fn contains(&self, character: char) -> bool {
        let code = character as u32;
        self.ranges.iter().any(|r| r.contains(&code))
    }

    /// Sample the font's coverage of these ranges.
    ///
    /// Probes a bounded number of code points per range rather than every
    /// ideograph; the result feeds a diagnostic log line, not a contract.
    /// Returns `(covered, sampled)`.
    pub fn sample_coverage(&self, font: &FontData) -> (usize, usize) {
        let mut covered = 0;
        let mut sampled = 0;
        for range in &self.ranges {
            let len = range.end() - range.start() + 1;
            let step = (len / SAMPLES_PER_RANGE).max(1);
            let mut code = *range.start();
            while code <= *range.end() {
                if let Some(character) = char::from_u32(code) {
                    sampled += 1;
                    if font.has_glyph(character) {
                        covered += 1;
                    }
                }
                code += step;
            }
        }
        (covered, sampled)
    }
}

fn placeholder_range() -> RangeInclusive<u32> {
    let code = MISSING_GLYPH_PLACEHOLDER as u32;
    code..=code
}

const SAMPLES_PER_RANGE: u32 = 32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_always_in_range() {
        let ranges = GlyphRanges::for_secondary_script();
        assert!(ranges.contains(MISSING_GLYPH_PLACEHOLDER));
    }

    #[test]
    fn default_script_is_covered() {
        let ranges = GlyphRanges::for_secondary_script();
        assert!(ranges.contains('A'));
        assert!(ranges.contains('é'));
    }

    #[test]
    fn kana_and_ideographs_are_covered() {
        let ranges = GlyphRanges::for_secondary_script();
        assert!(ranges.contains('あ'));
        assert!(ranges.contains('日'));
    }

    #[test]
    fn unrelated_scripts_are_not() {
        let ranges = GlyphRanges::for_secondary_script();
        assert!(!ranges.contains('\u{0590}')); // Hebrew block
    }
}
