//! The prediction-engine boundary.
//!
//! The shell composes frames; everything drawn inside the delegated canvas
//! region, and the text buffer itself, belongs to an [`Engine`]
//! implementation. The real input/prediction engine lives outside this
//! repository; [`PulseEngine`] is the in-tree placeholder that lets the
//! shell run end-to-end.

use anyhow::Result;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::compose::CanvasRegion;

pub mod pulse;

pub use pulse::PulseEngine;

/// Shared handle to the engine-owned text buffer.
///
/// The shell reads it for display and clipboard copy, may clear it, and the
/// editor widget inserts typed text; the engine owns its lifecycle. All
/// access happens on the UI thread; the lock is held for the duration of a
/// widget call at most.
pub type BufferHandle = Arc<Mutex<String>>;

/// External input/prediction engine consumed by the frame composer.
pub trait Engine {
    /// One-time setup, called once after construction. An error here aborts
    /// startup.
    fn initialize(&mut self) -> Result<()>;

    /// Handle to the mutable text buffer; must remain valid for the
    /// engine's lifetime.
    fn buffer(&self) -> BufferHandle;

    /// Draw into the pre-clipped canvas region. Called exactly once per
    /// composed frame with the elapsed whole milliseconds since the
    /// previous frame (truncated). The engine alone decides what it draws;
    /// a zero-area region is the engine's to handle.
    fn render(
        &mut self,
        elapsed_ms: u64,
        painter: &egui::Painter,
        region: CanvasRegion,
    ) -> Result<()>;

    /// Forward text to the OS clipboard. Fire-and-forget: failures are the
    /// engine's to log, never the shell's to handle.
    fn copy_to_clipboard(&mut self, text: &str);
}
