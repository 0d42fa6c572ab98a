//! Log setup.
//!
//! stdout carries the selected line and the terminal belongs to the picker, so
//! records go to a file. Logging stays off unless `NEO_LOG` holds a filter
//! (e.g. `debug`, `neo=trace`) or a log file was configured explicitly.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::app_dirs;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "NEO_LOG";
const LOG_FILE_NAME: &str = "neo.log";
const DEFAULT_FILTER: &str = "info";

/// Install the file logger when enabled, returning the file it appends to.
pub fn initialize(file: Option<&Path>) -> Result<Option<PathBuf>> {
    if env::var_os(LOG_ENV).is_none() && file.is_none() {
        return Ok(None);
    }

    let path = log_path(file)?;
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let sink = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::new().filter_or(LOG_ENV, DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(sink)))
        .format_timestamp_millis()
        .try_init()
        .context("failed to install logger")?;

    Ok(Some(path))
}

/// The explicit path when given, otherwise `neo.log` in the cache directory.
pub fn log_path(file: Option<&Path>) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(app_dirs::get_cache_dir()?.join(LOG_FILE_NAME)),
    }
}
