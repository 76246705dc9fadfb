//! Placeholder engine: animated canvas content and arboard clipboard.
//!
//! Stands in for the external prediction engine so the shell runs
//! end-to-end. Draws a pulsing target pattern driven by accumulated frame
//! time; a real engine would replace this module without touching the
//! composer.

use anyhow::Result;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{BufferHandle, Engine};
use crate::compose::CanvasRegion;

/// Full pulse cycle length in milliseconds.
const PULSE_PERIOD_MS: u64 = 2_400;

/// In-tree placeholder implementation of [`Engine`].
pub struct PulseEngine {
    buffer: BufferHandle,
    clipboard: Option<arboard::Clipboard>,
    elapsed_total_ms: u64,
}

impl PulseEngine {
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(String::new())),
            clipboard: None,
            elapsed_total_ms: 0,
        }
    }
}

impl Default for PulseEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for PulseEngine {
    fn initialize(&mut self) -> Result<()> {
        // Clipboard access can legitimately fail (no display server, no
        // clipboard manager); the engine keeps running and retries on copy.
        match arboard::Clipboard::new() {
            Ok(clipboard) => self.clipboard = Some(clipboard),
            Err(e) => log::warn!("Clipboard unavailable at startup: {e}"),
        }
        log::info!("Pulse engine initialized");
        Ok(())
    }

    fn buffer(&self) -> BufferHandle {
        Arc::clone(&self.buffer)
    }

    fn render(
        &mut self,
        elapsed_ms: u64,
        painter: &egui::Painter,
        region: CanvasRegion,
    ) -> Result<()> {
        self.elapsed_total_ms = self.elapsed_total_ms.wrapping_add(elapsed_ms);
        if region.is_degenerate() {
            return Ok(());
        }

        let rect = region.rect();
        let center = rect.center();
        let max_radius = rect.width().min(rect.height()) * 0.45;
        let phase =
            (self.elapsed_total_ms % PULSE_PERIOD_MS) as f32 / PULSE_PERIOD_MS as f32;

        // Crosshair through the canvas centre.
        let line_color = egui::Color32::from_gray(90);
        painter.line_segment(
            [
                egui::pos2(rect.left(), center.y),
                egui::pos2(rect.right(), center.y),
            ],
            egui::Stroke::new(1.0, line_color),
        );
        painter.line_segment(
            [
                egui::pos2(center.x, rect.top()),
                egui::pos2(center.x, rect.bottom()),
            ],
            egui::Stroke::new(1.0, line_color),
        );

        // Expanding rings, fading as they grow.
        for ring in 0..3 {
            let ring_phase = (phase + ring as f32 / 3.0).fract();
            let radius = max_radius * ring_phase;
            let alpha = ((1.0 - ring_phase) * 160.0) as u8;
            painter.circle_stroke(
                center,
                radius,
                egui::Stroke::new(2.0, egui::Color32::from_rgba_unmultiplied(120, 180, 255, alpha)),
            );
        }

        Ok(())
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        if self.clipboard.is_none() {
            self.clipboard = arboard::Clipboard::new()
                .map_err(|e| log::warn!("Clipboard still unavailable: {e}"))
                .ok();
        }
        if let Some(clipboard) = &mut self.clipboard
            && let Err(e) = clipboard.set_text(text)
        {
            log::warn!("Failed to copy to clipboard: {e}");
        }
    }
}
