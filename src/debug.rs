//! Session logging bridge for scribe-pad.
//!
//! Routes all `log::info!()` etc. to a session log file in the platform temp
//! directory, keeping output away from stdout/stderr so a launching terminal
//! stays clean. When `RUST_LOG` is set the messages are also mirrored to
//! stderr for interactive debugging.
//!
//! Level precedence: CLI `--log-level` flag, then `RUST_LOG`, then the
//! configured level (applied via [`apply_config_level`] once the config file
//! has been loaded).

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use scribe_pad_config::LogLevel;

/// Path of the session log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    return PathBuf::from("/tmp/scribe_pad.log");
    #[cfg(not(unix))]
    return std::env::temp_dir().join("scribe_pad.log");
}

struct LogBridge {
    file: Option<Mutex<std::fs::File>>,
    mirror_stderr: bool,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = &self.file {
            let _ = file.lock().write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            let _ = file.lock().flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Whether an explicit level (CLI flag or RUST_LOG) overrides the config.
static LEVEL_OVERRIDDEN: AtomicBool = AtomicBool::new(false);

/// Install the logging bridge.
///
/// Safe to call more than once; only the first call wins. If the log file
/// cannot be opened, logging degrades to the stderr mirror (or nothing)
/// rather than failing startup.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let env_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<LogLevel>().ok());
    let explicit = cli_level.or(env_level);
    LEVEL_OVERRIDDEN.store(explicit.is_some(), Ordering::Relaxed);

    let bridge = BRIDGE.get_or_init(|| LogBridge {
        file: open_log_file(),
        mirror_stderr: std::env::var_os("RUST_LOG").is_some(),
    });

    if log::set_logger(bridge).is_ok() {
        let level = explicit.unwrap_or_default();
        log::set_max_level(level.to_level_filter());
    }
}

/// Apply the configured log level, unless CLI or RUST_LOG already chose one.
pub fn apply_config_level(config_level: LogLevel) {
    if !LEVEL_OVERRIDDEN.load(Ordering::Relaxed) {
        log::set_max_level(config_level.to_level_filter());
    }
}

fn open_log_file() -> Option<Mutex<std::fs::File>> {
    let path = log_path();
    match OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&path)
    {
        Ok(mut file) => {
            let _ = writeln!(
                file,
                "{}\nscribe-pad {} session started at {}\n{}",
                "=".repeat(80),
                crate::VERSION,
                timestamp(),
                "=".repeat(80)
            );
            Some(Mutex::new(file))
        }
        // Silently fall back; the log file is operational convenience only.
        Err(_) => None,
    }
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}
