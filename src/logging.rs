//! Logger setup.
//!
//! The TUI owns stdout, so an interactive session logs only to a file and
//! stays silent without one. Print mode logs to stderr.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::engine::{self, CopilotError};

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    Off,
    Stderr,
    File(PathBuf),
    /// Stderr and a file
    Both(PathBuf),
}

impl LogDestination {
    pub fn for_config(config: &engine::Config) -> Self {
        match (config.log.file.clone(), config.print_only) {
            (Some(path), true) => LogDestination::Both(path),
            (Some(path), false) => LogDestination::File(path),
            (None, true) => LogDestination::Stderr,
            (None, false) => LogDestination::Off,
        }
    }
}

/// Install the global logger. Creates or truncates the log file if one is named.
pub fn initialize(destination: LogDestination, level: LevelFilter) -> Result<(), CopilotError> {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::Off => return Ok(()),
        LogDestination::Stderr => vec![stderr_logger(level, config)],
        LogDestination::File(path) => vec![file_logger(level, config, path)?],
        LogDestination::Both(path) => vec![
            stderr_logger(level, config.clone()),
            file_logger(level, config, path)?,
        ],
    };

    CombinedLogger::init(loggers).map_err(|err| CopilotError::Logging(err.to_string()))
}

/// Terminal logger for tests. No-op if a logger is already installed.
pub fn initialize_for_tests() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn stderr_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn file_logger(
    level: LevelFilter,
    config: Config,
    path: PathBuf,
) -> Result<Box<dyn SharedLogger>, CopilotError> {
    let file = File::create(&path)?;
    let logger: Box<dyn SharedLogger> = WriteLogger::new(level, config, file);
    Ok(logger)
}
