//! Debug-build logging
//!
//! The terminal belongs to the UI, so log records go to `multipick.log` in
//! the temp dir. Release builds install no logger and the `log` macros are
//! no-ops. `RUST_LOG` overrides the default `debug` filter.

use std::fmt::Display;
use std::path::PathBuf;

const LOG_FILE: &str = "multipick.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

pub fn format_line(timestamp: &str, level: log::Level, message: impl Display) -> String {
    format!("{} [{:<5}] {}", timestamp, level, message)
}

#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::File;
    use std::io::Write;

    let Ok(file) = File::create(log_path()) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
            writeln!(buf, "{}", format_line(&timestamp, record.level(), record.args()))
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
