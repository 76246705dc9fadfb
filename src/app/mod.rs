//! Application module for scribe-pad
//!
//! This module contains the main application logic, including:
//! - `App`: Entry point that initializes and runs the event loop
//! - `ShellHandler`: winit `ApplicationHandler` driving the single window
//! - `ShellWindow`: window state (wgpu surface, egui context, composer)

use anyhow::Result;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::cli::RuntimeOptions;
use crate::config::Config;

pub mod handler;
pub mod shell_window;

pub use handler::ShellHandler;
pub use shell_window::ShellWindow;

/// Main application entry point
pub struct App {
    config: Config,
    runtime_options: RuntimeOptions,
}

impl App {
    /// Create a new application: load config and apply CLI overrides.
    pub fn new(runtime_options: RuntimeOptions) -> Result<Self> {
        let mut config = match &runtime_options.config_dir {
            Some(dir) => Config::load_from(dir)?,
            None => Config::load()?,
        };
        crate::debug::apply_config_level(config.log_level);

        if let Some(size) = runtime_options.font_size {
            log::info!("CLI override: font size {size}");
            config.font.size = size;
        }

        Ok(Self {
            config,
            runtime_options,
        })
    }

    /// Run the application
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        // Wait for events; the window requests its own redraws while the
        // engine animates.
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut handler = ShellHandler::new(self.config, self.runtime_options);
        event_loop.run_app(&mut handler)?;

        handler.into_result()
    }
}
