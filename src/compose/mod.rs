//! Per-frame composition.
//!
//! This module contains the frame composer, including:
//! - `FrameComposer`: menu bar, buffer editor, action buttons, and the
//!   clipped canvas region delegated to the engine
//! - `layout`: pure geometry derivation for the editor row and canvas
//! - the diagnostics overlay toggled from the Help menu

mod diagnostics;
pub mod layout;

pub use layout::{CanvasRegion, EditorLayout, editor_layout};

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use egui::{Key, KeyboardShortcut, Modifiers};
use scribe_pad_fonts::FontSet;

use crate::engine::{BufferHandle, Engine};
use crate::ui_constants::CANVAS_BACKGROUND;

/// Result of composing one frame, consumed by the host render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSignal {
    /// Keep the render loop running
    Continue,
    /// Terminate the render loop
    Stop,
}

/// A user-triggered shell action.
///
/// Menu items, the action buttons, and keyboard shortcuts all funnel into
/// this one enum; the composer drains pending actions at fixed points in
/// the frame. `dispatch` lets a host (or a test) inject the same actions
/// programmatically, e.g. from a native menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    /// Stop the render loop
    Quit,
    /// Forward the buffer contents to the engine's clipboard entry point
    CopyBuffer,
    /// Empty the buffer
    ClearBuffer,
    /// Toggle the diagnostics overlay
    ToggleDiagnostics,
}

const QUIT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Q);
const COPY_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::C);
const CLEAR_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::R);

/// Stable widget id of the buffer editor, used for focus checks.
const EDITOR_ID: &str = "buffer-editor";

/// Composes one frame of the shell per invocation.
///
/// Owns the engine and the per-instance UI state (diagnostics flag, pending
/// actions); holds a shared reference to the resolved font set for
/// diagnostics display only.
pub struct FrameComposer {
    engine: Box<dyn Engine>,
    buffer: BufferHandle,
    font_set: Arc<FontSet>,
    show_diagnostics: bool,
    pending: Vec<ShellAction>,
    stats: diagnostics::FrameStats,
    last_region: Option<CanvasRegion>,
}

impl FrameComposer {
    /// Build the composer and initialize the engine.
    ///
    /// Engine initialization failure propagates — the shell has nothing to
    /// compose without a live engine.
    pub fn new(mut engine: Box<dyn Engine>, font_set: Arc<FontSet>) -> Result<Self> {
        engine.initialize()?;
        let buffer = engine.buffer();
        Ok(Self {
            engine,
            buffer,
            font_set,
            show_diagnostics: false,
            pending: Vec::new(),
            stats: diagnostics::FrameStats::new(),
            last_region: None,
        })
    }

    /// Queue an action for the next frame.
    pub fn dispatch(&mut self, action: ShellAction) {
        self.pending.push(action);
    }

    /// Whether the diagnostics overlay is currently shown.
    pub fn diagnostics_visible(&self) -> bool {
        self.show_diagnostics
    }

    /// Compose one frame.
    ///
    /// Returns exactly one [`FrameSignal`]. A quit action short-circuits the
    /// rest of the frame's layout (editor, buttons, canvas, engine call) but
    /// leaves all state valid for a following frame should the host ignore
    /// the stop signal.
    pub fn compose_frame(&mut self, ctx: &egui::Context, elapsed: Duration) -> FrameSignal {
        // Whole milliseconds, truncating fractional time.
        let elapsed_ms = elapsed.as_millis() as u64;
        self.stats.record(elapsed);

        self.consume_shortcuts(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| self.menu_bar_ui(ui));

        if self.drain_actions() {
            log::info!("Quit requested, stopping render loop");
            return FrameSignal::Stop;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.content_ui(ui, elapsed_ms));

        // Button actions queued inside the central panel.
        let late_quit = self.drain_actions();

        if self.show_diagnostics {
            diagnostics::show(
                ctx,
                &mut self.show_diagnostics,
                &self.stats,
                &self.font_set,
                &self.buffer,
                self.last_region,
            );
        }

        if late_quit {
            FrameSignal::Stop
        } else {
            FrameSignal::Continue
        }
    }

    fn menu_bar_ui(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let quit = egui::Button::new("Quit")
                    .shortcut_text(ui.ctx().format_shortcut(&QUIT_SHORTCUT));
                if ui.add(quit).clicked() {
                    self.pending.push(ShellAction::Quit);
                }
            });
            ui.menu_button("Edit", |ui| {
                let copy = egui::Button::new("Copy")
                    .shortcut_text(ui.ctx().format_shortcut(&COPY_SHORTCUT));
                if ui.add(copy).clicked() {
                    self.pending.push(ShellAction::CopyBuffer);
                }
                let clear = egui::Button::new("Clear")
                    .shortcut_text(ui.ctx().format_shortcut(&CLEAR_SHORTCUT));
                if ui.add(clear).clicked() {
                    self.pending.push(ShellAction::ClearBuffer);
                }
            });
            ui.menu_button("Help", |ui| {
                if ui.button("Diagnostics").clicked() {
                    self.pending.push(ShellAction::ToggleDiagnostics);
                }
            });
        });
    }

    fn content_ui(&mut self, ui: &mut egui::Ui, elapsed_ms: u64) {
        let layout = layout::editor_layout(ui.available_size(), ui.spacing().item_spacing);

        ui.horizontal(|ui| {
            {
                let mut buffer = self.buffer.lock();
                ui.add_sized(
                    layout.editor_size,
                    egui::TextEdit::multiline(&mut *buffer).id(egui::Id::new(EDITOR_ID)),
                );
            }
            // Copying and clearing are reachable from both the Edit menu and
            // these buttons on purpose: large click targets next to the text
            // view matter for motor-impaired users.
            ui.vertical(|ui| {
                if ui
                    .add_sized(layout.button_size, egui::Button::new("Copy"))
                    .clicked()
                {
                    self.pending.push(ShellAction::CopyBuffer);
                }
                if ui
                    .add_sized(layout.button_size, egui::Button::new("Clear"))
                    .clicked()
                {
                    self.pending.push(ShellAction::ClearBuffer);
                }
            });
        });

        let region = CanvasRegion::from_rect(ui.available_rect_before_wrap());
        self.last_region = Some(region);

        {
            // Clip scope: drawing for the rest of the frame body is bounded
            // by the canvas region. The clipped painter is a local value, so
            // the scope ends here no matter how the engine call goes.
            let painter = ui.painter().with_clip_rect(region.rect());
            painter.rect_filled(region.rect(), 0.0, CANVAS_BACKGROUND);
            if let Err(e) = self.engine.render(elapsed_ms, &painter, region) {
                log::error!("Engine render failed: {e:#}");
            }
        }
    }

    fn consume_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT_SHORTCUT)) {
            self.pending.push(ShellAction::Quit);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&CLEAR_SHORTCUT)) {
            self.pending.push(ShellAction::ClearBuffer);
        }
        // While the editor owns focus, Ctrl+C means "copy my selection" and
        // stays with the text widget.
        let editor_focused = ctx.memory(|m| m.has_focus(egui::Id::new(EDITOR_ID)));
        if !editor_focused && ctx.input_mut(|i| i.consume_shortcut(&COPY_SHORTCUT)) {
            self.pending.push(ShellAction::CopyBuffer);
        }
    }

    /// Execute queued actions. Returns whether a quit was requested.
    fn drain_actions(&mut self) -> bool {
        let mut quit = false;
        for action in std::mem::take(&mut self.pending) {
            match action {
                ShellAction::Quit => quit = true,
                ShellAction::CopyBuffer => self.copy_buffer(),
                ShellAction::ClearBuffer => self.clear_buffer(),
                ShellAction::ToggleDiagnostics => {
                    self.show_diagnostics = !self.show_diagnostics;
                }
            }
        }
        quit
    }

    fn copy_buffer(&mut self) {
        let text = self.buffer.lock().clone();
        self.engine.copy_to_clipboard(&text);
    }

    fn clear_buffer(&mut self) {
        self.buffer.lock().clear();
    }
}
