//! Named constants for UI layout dimensions.
//!
//! Centralising these values makes future DPI scaling and theming easier.
//! Only layout constants and fixed colours belong here.

// ---------------------------------------------------------------------------
// Frame composition  (src/compose/)
// ---------------------------------------------------------------------------

/// Fraction of content width reserved beside the editor for action buttons.
pub const CONTROLS_WIDTH_FRACTION: f32 = 0.1;
/// Fraction of content height occupied by the buffer editor row.
pub const EDITOR_HEIGHT_FRACTION: f32 = 0.1;
/// Fraction of content height per action button (two stacked buttons fill
/// the editor row).
pub const BUTTON_HEIGHT_FRACTION: f32 = 0.05;

/// Base fill painted under the engine's canvas region.
pub const CANVAS_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(51, 51, 51);

// ---------------------------------------------------------------------------
// Diagnostics overlay  (src/compose/diagnostics.rs)
// ---------------------------------------------------------------------------

/// Default / initial width of the diagnostics overlay window.
pub const DIAGNOSTICS_WINDOW_DEFAULT_WIDTH: f32 = 420.0;
