// src/logger.rs
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Initialise the global logger. `verbose` raises the filter above whatever
/// `RUST_LOG` (or the build-profile default) selects.
pub fn init(verbose: u8) {
    let env = if cfg!(debug_assertions) {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("info")
    };

    let mut builder = Builder::from_env(env);
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }

    builder.target(Target::Stderr).format(|buf, record| {
        writeln!(
            buf,
            "[{:>5} {}:{}] {}",
            record.level(),
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        )
    });

    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}

/// Receives one record per file removed by the pruner.
pub trait DeleteLogger: Sync {
    fn deleted(&self, path: &Path);
}

/// Forwards deletions to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DeleteLogger for LogSink {
    fn deleted(&self, path: &Path) {
        log::info!("Deleted {}", path.display());
    }
}

/// Keeps every deleted path in memory; used by callers that want a report.
#[derive(Debug, Default)]
pub struct RecordingSink {
    paths: Mutex<Vec<PathBuf>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        match self.paths.lock() {
            Ok(paths) => paths.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DeleteLogger for RecordingSink {
    fn deleted(&self, path: &Path) {
        log::debug!("Deleted {}", path.display());
        match self.paths.lock() {
            Ok(mut paths) => paths.push(path.to_path_buf()),
            Err(poisoned) => poisoned.into_inner().push(path.to_path_buf()),
        }
    }
}

/// Re-export logging macros
#[allow(unused_imports)]
pub use log::{debug, error, info, trace, warn};
