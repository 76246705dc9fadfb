//! Diagnostics overlay, toggled from Help → Diagnostics.
//!
//! Renders outside the main panels as its own top-level window: frame
//! statistics, font-resolution outcome, and egui's inspection UI.

use std::time::Duration;

use scribe_pad_fonts::FontSet;

use crate::compose::CanvasRegion;
use crate::engine::BufferHandle;
use crate::ui_constants::DIAGNOSTICS_WINDOW_DEFAULT_WIDTH;

/// Rolling per-frame statistics for the overlay.
pub(crate) struct FrameStats {
    frames: u64,
    last_elapsed: Duration,
}

impl FrameStats {
    pub(crate) fn new() -> Self {
        Self {
            frames: 0,
            last_elapsed: Duration::ZERO,
        }
    }

    pub(crate) fn record(&mut self, elapsed: Duration) {
        self.frames += 1;
        self.last_elapsed = elapsed;
    }

    pub(crate) fn frames(&self) -> u64 {
        self.frames
    }

    pub(crate) fn last_elapsed(&self) -> Duration {
        self.last_elapsed
    }
}

pub(crate) fn show(
    ctx: &egui::Context,
    open: &mut bool,
    stats: &FrameStats,
    font_set: &FontSet,
    buffer: &BufferHandle,
    last_region: Option<CanvasRegion>,
) {
    egui::Window::new("Diagnostics")
        .open(open)
        .default_width(DIAGNOSTICS_WINDOW_DEFAULT_WIDTH)
        .show(ctx, |ui| {
            egui::Grid::new("diagnostics_grid")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Frames composed");
                    ui.label(stats.frames().to_string());
                    ui.end_row();

                    ui.label("Frame time");
                    ui.label(format!(
                        "{:.1} ms",
                        stats.last_elapsed().as_secs_f32() * 1000.0
                    ));
                    ui.end_row();

                    ui.label("Font resolution");
                    ui.label(font_set.status().display_name());
                    ui.end_row();

                    if let Some(primary) = font_set.primary() {
                        ui.label("Primary font");
                        ui.label(primary.path.display().to_string());
                        ui.end_row();
                    }
                    if let Some(secondary) = font_set.secondary() {
                        ui.label("Secondary font");
                        ui.label(secondary.path.display().to_string());
                        ui.end_row();
                    }

                    ui.label("Buffer length");
                    ui.label(buffer.lock().chars().count().to_string());
                    ui.end_row();

                    if let Some(region) = last_region {
                        ui.label("Canvas region");
                        ui.label(format!(
                            "{:.0}×{:.0} at ({:.0}, {:.0})",
                            region.size.x, region.size.y, region.origin.x, region.origin.y
                        ));
                        ui.end_row();
                    }
                });

            ui.separator();
            ui.collapsing("UI inspection", |ui| ctx.inspection_ui(ui));
        });
}
