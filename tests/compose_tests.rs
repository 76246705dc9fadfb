//! Frame-composition behavior tests.
//!
//! Drives `FrameComposer` through a headless egui context with a recording
//! engine standing in for the external prediction engine.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, anyhow};
use parking_lot::Mutex;

use scribe_pad::compose::{CanvasRegion, FrameComposer, FrameSignal, ShellAction};
use scribe_pad::config::FontConfig;
use scribe_pad::engine::{BufferHandle, Engine};

/// Engine double that records every call the composer makes.
#[derive(Default)]
struct Recording {
    init_calls: u32,
    render_calls: Vec<(u64, CanvasRegion)>,
    clipboard: Vec<String>,
}

struct RecordingEngine {
    buffer: BufferHandle,
    recording: Arc<Mutex<Recording>>,
    fail_render: bool,
}

impl RecordingEngine {
    fn new(fail_render: bool) -> (Self, BufferHandle, Arc<Mutex<Recording>>) {
        let buffer: BufferHandle = Arc::new(Mutex::new(String::new()));
        let recording = Arc::new(Mutex::new(Recording::default()));
        let engine = Self {
            buffer: Arc::clone(&buffer),
            recording: Arc::clone(&recording),
            fail_render,
        };
        (engine, buffer, recording)
    }
}

impl Engine for RecordingEngine {
    fn initialize(&mut self) -> Result<()> {
        self.recording.lock().init_calls += 1;
        Ok(())
    }

    fn buffer(&self) -> BufferHandle {
        Arc::clone(&self.buffer)
    }

    fn render(
        &mut self,
        elapsed_ms: u64,
        _painter: &egui::Painter,
        region: CanvasRegion,
    ) -> Result<()> {
        self.recording.lock().render_calls.push((elapsed_ms, region));
        if self.fail_render {
            return Err(anyhow!("engine exploded"));
        }
        Ok(())
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        self.recording.lock().clipboard.push(text.to_string());
    }
}

struct FailingInitEngine;

impl Engine for FailingInitEngine {
    fn initialize(&mut self) -> Result<()> {
        Err(anyhow!("no engine model available"))
    }

    fn buffer(&self) -> BufferHandle {
        Arc::new(Mutex::new(String::new()))
    }

    fn render(&mut self, _: u64, _: &egui::Painter, _: CanvasRegion) -> Result<()> {
        Ok(())
    }

    fn copy_to_clipboard(&mut self, _: &str) {}
}

fn test_font_set() -> Arc<scribe_pad::fonts::FontSet> {
    // Empty search roots: resolution degrades to the built-in default set
    // without touching the filesystem.
    let font_config = FontConfig {
        search_roots: Vec::new(),
        ..FontConfig::default()
    };
    Arc::new(scribe_pad::fonts::resolve(22.0, &font_config))
}

fn composer_with(
    fail_render: bool,
) -> (FrameComposer, BufferHandle, Arc<Mutex<Recording>>) {
    let (engine, buffer, recording) = RecordingEngine::new(fail_render);
    let composer =
        FrameComposer::new(Box::new(engine), test_font_set()).expect("engine init succeeds");
    (composer, buffer, recording)
}

fn run_frame(
    ctx: &egui::Context,
    composer: &mut FrameComposer,
    size: egui::Vec2,
    elapsed: Duration,
) -> FrameSignal {
    let raw_input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, size)),
        ..Default::default()
    };
    let mut signal = FrameSignal::Continue;
    let _ = ctx.run(raw_input, |ctx| {
        signal = composer.compose_frame(ctx, elapsed);
    });
    signal
}

const VIEWPORT: egui::Vec2 = egui::vec2(800.0, 600.0);

#[test]
fn engine_initializes_exactly_once_at_construction() {
    let (composer, _buffer, recording) = composer_with(false);
    drop(composer);
    assert_eq!(recording.lock().init_calls, 1);
}

#[test]
fn engine_init_failure_propagates() {
    let result = FrameComposer::new(Box::new(FailingInitEngine), test_font_set());
    assert!(result.is_err());
}

#[test]
fn normal_frame_continues_and_renders_once_with_truncated_millis() {
    let (mut composer, _buffer, recording) = composer_with(false);
    let ctx = egui::Context::default();

    // 16.7 ms truncates to 16, never rounds to 17.
    let signal = run_frame(&ctx, &mut composer, VIEWPORT, Duration::from_micros(16_700));

    assert_eq!(signal, FrameSignal::Continue);
    let recording = recording.lock();
    assert_eq!(recording.render_calls.len(), 1);
    assert_eq!(recording.render_calls[0].0, 16);
}

#[test]
fn quit_short_circuits_the_frame_but_not_the_next_one() {
    let (mut composer, _buffer, recording) = composer_with(false);
    let ctx = egui::Context::default();

    composer.dispatch(ShellAction::Quit);
    let signal = run_frame(&ctx, &mut composer, VIEWPORT, Duration::from_millis(16));
    assert_eq!(signal, FrameSignal::Stop);
    assert!(
        recording.lock().render_calls.is_empty(),
        "quit frame must not reach the engine"
    );

    // A host that ignores the stop signal still gets valid frames.
    let signal = run_frame(&ctx, &mut composer, VIEWPORT, Duration::from_millis(16));
    assert_eq!(signal, FrameSignal::Continue);
    assert_eq!(recording.lock().render_calls.len(), 1);
}

#[test]
fn clear_action_empties_the_buffer() {
    let (mut composer, buffer, _recording) = composer_with(false);
    let ctx = egui::Context::default();

    buffer.lock().push_str("soon to vanish");
    composer.dispatch(ShellAction::ClearBuffer);
    run_frame(&ctx, &mut composer, VIEWPORT, Duration::from_millis(16));

    assert!(buffer.lock().is_empty());
}

#[test]
fn copy_action_forwards_exact_buffer_contents() {
    let (mut composer, buffer, recording) = composer_with(false);
    let ctx = egui::Context::default();

    buffer.lock().push_str("Hello, 世界");
    composer.dispatch(ShellAction::CopyBuffer);
    run_frame(&ctx, &mut composer, VIEWPORT, Duration::from_millis(16));

    assert_eq!(recording.lock().clipboard, vec!["Hello, 世界".to_string()]);
    assert_eq!(*buffer.lock(), "Hello, 世界", "copy must not modify the buffer");
}

#[test]
fn engine_render_error_is_contained_to_its_frame() {
    let (mut composer, _buffer, recording) = composer_with(true);
    let ctx = egui::Context::default();

    let signal = run_frame(&ctx, &mut composer, VIEWPORT, Duration::from_millis(16));
    assert_eq!(signal, FrameSignal::Continue, "render errors are not fatal");

    // The next frame composes the same layout: the failed call leaked no
    // clip or layout state.
    let signal = run_frame(&ctx, &mut composer, VIEWPORT, Duration::from_millis(16));
    assert_eq!(signal, FrameSignal::Continue);

    let recording = recording.lock();
    assert_eq!(recording.render_calls.len(), 2);
    assert_eq!(recording.render_calls[0].1, recording.render_calls[1].1);
}

#[test]
fn canvas_region_is_never_negative_even_at_zero_viewport() {
    let (mut composer, _buffer, recording) = composer_with(false);
    let ctx = egui::Context::default();

    run_frame(&ctx, &mut composer, egui::Vec2::ZERO, Duration::from_millis(16));

    let recording = recording.lock();
    assert_eq!(recording.render_calls.len(), 1);
    let region = recording.render_calls[0].1;
    assert!(region.size.x >= 0.0);
    assert!(region.size.y >= 0.0);
}

#[test]
fn reference_viewport_reserves_menu_and_editor_space() {
    let (mut composer, _buffer, recording) = composer_with(false);
    let ctx = egui::Context::default();

    run_frame(&ctx, &mut composer, VIEWPORT, Duration::from_millis(16));

    let recording = recording.lock();
    let region = recording.render_calls[0].1;

    // Full width, zero x-offset: nothing is reserved horizontally below the
    // editor row.
    assert!((region.origin.x - 0.0).abs() < 0.5);
    assert!((region.size.x - 800.0).abs() < 0.5);

    // The menu bar and the 10% editor row sit above the canvas.
    assert!(region.origin.y > 0.0);
    assert!(
        (region.origin.y + region.size.y - 600.0).abs() < 0.5,
        "canvas extends to the bottom of the viewport"
    );
    assert!(region.size.y < 600.0 - 54.0, "menu bar + editor row consumed");
    assert!(region.size.y > 600.0 * 0.75, "canvas keeps the bulk of the height");
}

#[test]
fn diagnostics_flag_toggles_and_persists_across_frames() {
    let (mut composer, _buffer, _recording) = composer_with(false);
    let ctx = egui::Context::default();

    assert!(!composer.diagnostics_visible());

    composer.dispatch(ShellAction::ToggleDiagnostics);
    run_frame(&ctx, &mut composer, VIEWPORT, Duration::from_millis(16));
    assert!(composer.diagnostics_visible());

    run_frame(&ctx, &mut composer, VIEWPORT, Duration::from_millis(16));
    assert!(composer.diagnostics_visible(), "flag persists until toggled");

    composer.dispatch(ShellAction::ToggleDiagnostics);
    run_frame(&ctx, &mut composer, VIEWPORT, Duration::from_millis(16));
    assert!(!composer.diagnostics_visible());
}
