// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cli;
mod config;
mod error;
mod logging;
mod pipeline;

#[cfg(test)]
mod tests;

pub use cli::{Args, Command};
pub use config::{
    DEFAULT_CACHE_DIR, DEFAULT_LOG_DIR, DEFAULT_PROCESSED_DIR, PipelineConfig, SourceConfig,
};
pub use error::{PipelineError, Stage};
pub use logging::{LOG_FILE_NAME, init_logging};
pub use pipeline::{EtlSummary, run_all, run_etl, run_report};
