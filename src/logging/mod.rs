// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use log::LevelFilter;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

fn builder(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        // actix internals are noisy at debug
        .filter_module("actix_server", level.min(LevelFilter::Info))
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);
    builder
}

/// Installs the global logger: stderr by default, or appended to `LOG_FILE`.
pub fn init(config: &Config) -> Result<()> {
    let mut builder = builder(config.log_level);

    if let Some(path) = &config.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(open_log_file(path)?)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    builder.try_init()?;
    Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_and_parent_are_created() {
        let dir = std::env::temp_dir().join(format!("passgauge-log-{}", std::process::id()));
        let path = dir.join("nested").join("app.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
