// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::PipelineError;

/// Name of the log file written under the log directory.
pub const LOG_FILE_NAME: &str = "etl.log";

/// Installs the global subscriber: stdout plus `etl.log` in `log_dir`.
///
/// `RUST_LOG` overrides `default_level`. The log file is appended to across
/// runs.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created, or if a
/// global subscriber is already installed.
pub fn init_logging(log_dir: &Path, default_level: LevelFilter) -> Result<(), PipelineError> {
    std::fs::create_dir_all(log_dir).map_err(|e| {
        PipelineError::Logging(format!("cannot create {}: {e}", log_dir.display()))
    })?;

    let file_appender: RollingFileAppender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .map_err(|e| PipelineError::Logging(e.to_string()))?;

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_appender))
        .try_init()
        .map_err(|e| PipelineError::Logging(e.to_string()))
}
