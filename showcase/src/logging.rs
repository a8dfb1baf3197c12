//! File logging for the binary. The terminal owns stdout, so logs go to a file.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::{LevelFilter, SetLoggerError};
use simplelog::{Config, WriteLogger};
use thiserror::Error;

use crate::paths;

/// Overrides the log level, e.g. `SHOWCASE_LOG=trace`.
pub const LOG_LEVEL_VAR: &str = "SHOWCASE_LOG";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot create log file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot initialise logging: {0}")]
    Init(#[from] SetLoggerError),
}

/// Parse a level override, defaulting to `Debug`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Debug)
}

pub fn log_level() -> LevelFilter {
    level_from(std::env::var(LOG_LEVEL_VAR).ok().as_deref())
}

/// Create this run's log file in `dir`, keeping the previous run's log.
/// Falls back to the working directory when `dir` is missing or cannot be created.
pub fn open_log_file(dir: Option<&Path>) -> Result<(PathBuf, File), LoggingError> {
    let dir = dir.filter(|dir| fs::create_dir_all(dir).is_ok());
    if let Some(dir) = dir {
        paths::rotate_logs(dir);
    }

    let path = paths::log_file_in(dir);
    match File::create(&path) {
        Ok(file) => Ok((path, file)),
        Err(source) => Err(LoggingError::CreateFile { path, source }),
    }
}

/// Install the global file logger. Returns the path logs are written to.
pub fn init(dir: Option<&Path>, level: LevelFilter) -> Result<PathBuf, LoggingError> {
    let (path, file) = open_log_file(dir)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(path)
}
