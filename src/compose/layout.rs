//! Frame layout geometry.
//!
//! Pure derivations from the current content bounds: the editor/button row
//! reservation and the canvas region handed to the engine. Everything here
//! clamps to non-negative sizes so degenerate viewports pass through
//! harmlessly.

use egui::{Pos2, Rect, Vec2};

use crate::ui_constants::{
    BUTTON_HEIGHT_FRACTION, CONTROLS_WIDTH_FRACTION, EDITOR_HEIGHT_FRACTION,
};

/// Sizes for the buffer editor and the stacked action buttons beside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorLayout {
    /// Multi-line buffer editor size
    pub editor_size: Vec2,
    /// Size of each of the two stacked action buttons
    pub button_size: Vec2,
}

/// Derive the editor row layout from the available content size.
///
/// The editor takes the full width minus the controls reservation (10% of
/// width plus one item spacing) at 10% of height; each button fills the
/// reserved width at half the editor height minus half a spacing.
pub fn editor_layout(content: Vec2, spacing: Vec2) -> EditorLayout {
    let editor_size = Vec2::new(
        (content.x * (1.0 - CONTROLS_WIDTH_FRACTION) - spacing.x).max(0.0),
        (content.y * EDITOR_HEIGHT_FRACTION).max(0.0),
    );
    let button_size = Vec2::new(
        (content.x * CONTROLS_WIDTH_FRACTION).max(0.0),
        (content.y * BUTTON_HEIGHT_FRACTION - spacing.y * 0.5).max(0.0),
    );
    EditorLayout {
        editor_size,
        button_size,
    }
}

/// The rectangular sub-area of the window reserved for the engine.
///
/// Recomputed every frame from whatever content area remains below the
/// editor row; never persisted. Width and height are always non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRegion {
    /// Top-left corner in screen coordinates
    pub origin: Pos2,
    /// Extent; components are >= 0
    pub size: Vec2,
}

impl CanvasRegion {
    /// Build a region from a rect, clamping negative extents to zero.
    pub fn from_rect(rect: Rect) -> Self {
        CanvasRegion {
            origin: rect.min,
            size: Vec2::new(rect.width().max(0.0), rect.height().max(0.0)),
        }
    }

    /// The region as a rect.
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size)
    }

    /// Whether the region has no drawable area.
    pub fn is_degenerate(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }
}
