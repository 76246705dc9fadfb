//! Integration tests for the scribe-pad-fonts crate.
//!
//! Candidate-path fixtures are built in temp directories; a real TTF is
//! sourced from egui's embedded default fonts so no binary assets live in
//! the repo.

use std::fs;
use std::path::{Path, PathBuf};

use scribe_pad_config::FontConfig;
use scribe_pad_fonts::{FontData, PRIMARY_FAMILY, ResolutionStatus, SECONDARY_FAMILY, resolve};

/// Bytes of a known-valid TTF (one of egui's embedded fonts).
fn sample_font_bytes() -> Vec<u8> {
    let defs = egui::FontDefinitions::default();
    let data = defs
        .font_data
        .get("Hack")
        .or_else(|| defs.font_data.values().next())
        .expect("egui ships embedded fonts");
    data.font.to_vec()
}

fn write_font(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, sample_font_bytes()).unwrap();
    path
}

fn config_with_roots(roots: Vec<PathBuf>) -> FontConfig {
    FontConfig {
        primary_file: "primary.ttf".to_string(),
        secondary_file: "secondary.ttf".to_string(),
        search_roots: roots,
        size: 22.0,
    }
}

#[test]
fn sample_font_is_a_valid_face() {
    assert!(FontData::new(sample_font_bytes()).is_some());
}

#[test]
fn no_candidates_degrades_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_roots(vec![dir.path().to_path_buf()]);

    let set = resolve(22.0, &config);
    assert_eq!(set.status(), ResolutionStatus::Default);
    assert!(set.primary().is_none());
    assert!(set.secondary().is_none());
}

#[test]
fn default_set_still_has_usable_fonts() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_roots(vec![dir.path().to_path_buf()]);

    for size in [1.0, 13.0, 22.0, 96.0] {
        let set = resolve(size, &config);
        let fonts = set.definitions();
        assert!(
            !fonts.families[&egui::FontFamily::Proportional].is_empty(),
            "a usable font must exist at size {size}"
        );
        assert_eq!(set.pixel_size(), size);
    }
}

#[test]
fn primary_without_secondary_is_primary_only() {
    let dir = tempfile::tempdir().unwrap();
    write_font(dir.path(), "primary.ttf");
    let config = config_with_roots(vec![dir.path().to_path_buf()]);

    let set = resolve(22.0, &config);
    assert_eq!(set.status(), ResolutionStatus::PrimaryOnly);
    assert_eq!(set.primary().unwrap().path, dir.path().join("primary.ttf"));
    assert!(set.secondary().is_none());
}

#[test]
fn primary_and_secondary_merge() {
    let dir = tempfile::tempdir().unwrap();
    write_font(dir.path(), "primary.ttf");
    write_font(dir.path(), "secondary.ttf");
    let config = config_with_roots(vec![dir.path().to_path_buf()]);

    let set = resolve(22.0, &config);
    assert_eq!(set.status(), ResolutionStatus::PrimaryPlusSecondary);

    // Merge mode: primary leads the proportional family, secondary sits
    // directly behind it, egui's defaults remain as the final fallback.
    let fonts = set.definitions();
    let proportional = &fonts.families[&egui::FontFamily::Proportional];
    assert_eq!(proportional[0], PRIMARY_FAMILY);
    assert_eq!(proportional[1], SECONDARY_FAMILY);
    assert!(proportional.len() > 2, "embedded fallbacks must remain");
    assert!(fonts.font_data.contains_key(PRIMARY_FAMILY));
    assert!(fonts.font_data.contains_key(SECONDARY_FAMILY));
}

#[test]
fn first_existing_candidate_wins() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    write_font(second.path(), "primary.ttf");

    let config = config_with_roots(vec![
        first.path().to_path_buf(),
        second.path().to_path_buf(),
    ]);
    let set = resolve(22.0, &config);
    assert_eq!(
        set.primary().unwrap().path,
        second.path().join("primary.ttf")
    );

    // Once the earlier root gains the file, it takes precedence.
    write_font(first.path(), "primary.ttf");
    let set = resolve(22.0, &config);
    assert_eq!(set.primary().unwrap().path, first.path().join("primary.ttf"));
}

#[test]
fn unparseable_candidate_is_skipped_like_a_missing_one() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    fs::write(first.path().join("primary.ttf"), b"definitely not a font").unwrap();
    write_font(second.path(), "primary.ttf");

    let config = config_with_roots(vec![
        first.path().to_path_buf(),
        second.path().to_path_buf(),
    ]);
    let set = resolve(22.0, &config);
    assert_eq!(
        set.primary().unwrap().path,
        second.path().join("primary.ttf")
    );
}

#[test]
fn missing_primary_skips_secondary_entirely() {
    // The secondary file is present and loadable, but without a primary the
    // resolver must not pick it up.
    let dir = tempfile::tempdir().unwrap();
    write_font(dir.path(), "secondary.ttf");
    let config = config_with_roots(vec![dir.path().to_path_buf()]);

    let set = resolve(22.0, &config);
    assert_eq!(set.status(), ResolutionStatus::Default);
    assert!(set.secondary().is_none());
}

#[test]
fn duplicate_roots_are_harmless() {
    let dir = tempfile::tempdir().unwrap();
    write_font(dir.path(), "primary.ttf");
    let root = dir.path().to_path_buf();
    let config = config_with_roots(vec![root.clone(), root.clone(), root]);

    let set = resolve(22.0, &config);
    assert_eq!(set.status(), ResolutionStatus::PrimaryOnly);
    assert_eq!(set.primary().unwrap().path, dir.path().join("primary.ttf"));
}

#[test]
fn install_applies_pixel_size_to_text_styles() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_with_roots(vec![dir.path().to_path_buf()]);
    let set = resolve(17.0, &config);

    let ctx = egui::Context::default();
    set.install(&ctx);

    let style = ctx.style();
    let body = &style.text_styles[&egui::TextStyle::Body];
    assert_eq!(body.size, 17.0);
}
