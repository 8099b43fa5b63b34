//! `tracing` subscriber setup.
//!
//! Output goes to a file so it never draws over the terminal UI.

use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;

use crate::config::Config;

/// Errors that can occur while installing the logger.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file could not be created.
    #[error("could not create log file: {0}")]
    Io(#[from] std::io::Error),

    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("logger already initialised: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter for `config`.
pub fn filter(config: &Config) -> Result<EnvFilter, LoggingError> {
    Ok(EnvFilter::try_new(config.log_filter())?)
}

/// Installs the global subscriber, truncating the log file.
pub fn setup_logger(config: &Config) -> Result<(), LoggingError> {
    let filter = filter(config)?;
    let file = File::create(config.log_file())?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    tracing_subscriber::registry()
        .with(file_log.with_filter(filter))
        .try_init()?;
    Ok(())
}
