// src/log.rs
//
// Diagnostics go to `.store/debug.log` through `tracing`. The user never sees
// these lines; the message area only ever shows the fixed strings from
// `config::consts`.

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

fn open_log_file() -> io::Result<File> {
    fs::create_dir_all(STORE_DIR)?;
    OpenOptions::new().create(true).append(true).open(log_path())
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info` level.
/// Falls back to stderr when the log file can't be opened. Calling it twice is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match open_log_file() {
        Ok(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        Err(e) => {
            eprintln!("Logging to stderr ({}: {e})", log_path().display());
            builder.with_writer(io::stderr).try_init()
        }
    };

    if installed.is_ok() {
        logd!("Log: initialized");
    }
}
