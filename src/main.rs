// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use scribe_pad::app::App;
use scribe_pad::cli;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            // Non-zero exit: use process::exit so the shell sees the correct
            // exit code. No app state exists yet, so no destructors are skipped.
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };

    // Initialize logging — routes all log::info!() etc. to the session log
    // file. When RUST_LOG is set, also mirrors to stderr.
    // CLI --log-level takes highest precedence, then RUST_LOG, then config
    // (applied once the config is loaded).
    scribe_pad::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting scribe-pad {}", scribe_pad::VERSION);

    let app = App::new(runtime_options)?;
    let result = app.run();

    match result {
        Ok(_) => Ok(()),
        Err(ref e) => {
            eprintln!("scribe-pad: error: {e:#}");
            // On Linux, provide a hint when the error looks like a missing display server
            #[cfg(target_os = "linux")]
            {
                let msg = format!("{e:?}").to_lowercase();
                if msg.contains("display")
                    || msg.contains("wayland")
                    || msg.contains("xcb")
                    || msg.contains("x server")
                    || msg.contains("compositor")
                {
                    eprintln!(
                        "scribe-pad: hint: no display server found — ensure DISPLAY (X11) or \
                         WAYLAND_DISPLAY (Wayland) is set and a compositor is running"
                    );
                }
            }
            // Return the original error so main exits with code 1 (anyhow default)
            result
        }
    }
}
