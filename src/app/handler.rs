//! `ApplicationHandler` impl for the shell.
//!
//! Creates the window on resume, routes window events, and enforces the
//! optional `--exit-after` deadline.

use std::time::Instant;

use anyhow::{Context as _, Result};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::shell_window::ShellWindow;
use crate::cli::RuntimeOptions;
use crate::config::Config;

/// Drives the single shell window through the winit event loop.
pub struct ShellHandler {
    config: Config,
    runtime_options: RuntimeOptions,
    window: Option<ShellWindow>,
    started_at: Instant,
    fatal_error: Option<anyhow::Error>,
}

impl ShellHandler {
    pub fn new(config: Config, runtime_options: RuntimeOptions) -> Self {
        Self {
            config,
            runtime_options,
            window: None,
            started_at: Instant::now(),
            fatal_error: None,
        }
    }

    /// Consume the handler after the loop exits, surfacing any startup
    /// failure (window creation, engine initialization) to the caller.
    pub fn into_result(self) -> Result<()> {
        match self.fatal_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for ShellHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match pollster::block_on(ShellWindow::new(event_loop, &self.config))
            .context("Failed to create shell window")
        {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("{e:#}");
                self.fatal_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if window.window_id() != window_id {
            return;
        }

        window.handle_window_event(event);

        if window.should_close() {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(limit) = self.runtime_options.exit_after
            && self.started_at.elapsed().as_secs_f64() >= limit
        {
            log::info!("--exit-after deadline reached, shutting down");
            event_loop.exit();
        }
    }
}
