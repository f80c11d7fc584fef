// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use sales_dw_domain::UnmatchedPolicy;
use sales_dw_extract::{DEFAULT_BASE_URL, DEFAULT_DATASET, DEFAULT_FILE_NAME, DEFAULT_RAW_DIR};
use sales_dw_report::{DEFAULT_CHARTS_DIR, DEFAULT_SQL_DIR, DEFAULT_WAREHOUSE_PATH};
use sales_dw_transform::{DEFAULT_END_DATE, DEFAULT_START_DATE};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

use crate::config::{
    DEFAULT_CACHE_DIR, DEFAULT_LOG_DIR, DEFAULT_PROCESSED_DIR, PipelineConfig, SourceConfig,
};

/// Supermarket sales warehouse: extract, transform, load and report.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Read the dataset from this directory instead of downloading it
    #[arg(long, global = true)]
    local_source: Option<PathBuf>,

    /// Base URL of the dataset download endpoint
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Dataset identifier (`owner/name`)
    #[arg(long, global = true, default_value = DEFAULT_DATASET)]
    dataset: String,

    /// Directory the raw CSV is extracted into
    #[arg(long, global = true, default_value = DEFAULT_RAW_DIR)]
    raw_dir: PathBuf,

    /// Name of the raw CSV inside the dataset
    #[arg(long, global = true, default_value = DEFAULT_FILE_NAME)]
    raw_file: String,

    /// Directory downloaded datasets are cached in
    #[arg(long, global = true, default_value = DEFAULT_CACHE_DIR)]
    cache_dir: PathBuf,

    /// Directory the staged tables are written to
    #[arg(long, global = true, default_value = DEFAULT_PROCESSED_DIR)]
    processed_dir: PathBuf,

    /// Path of the `SQLite` warehouse
    #[arg(long, global = true, default_value = DEFAULT_WAREHOUSE_PATH)]
    warehouse: PathBuf,

    /// Directory holding the report queries
    #[arg(long, global = true, default_value = DEFAULT_SQL_DIR)]
    sql_dir: PathBuf,

    /// Directory the charts are written to
    #[arg(long, global = true, default_value = DEFAULT_CHARTS_DIR)]
    charts_dir: PathBuf,

    /// Directory holding `etl.log`
    #[arg(long, global = true, default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    /// TrueType font for chart labels
    #[arg(long, global = true)]
    font: Option<PathBuf>,

    /// First day of the date dimension (YYYY-MM-DD)
    #[arg(long, global = true, default_value = DEFAULT_START_DATE)]
    start_date: String,

    /// Last day of the date dimension (YYYY-MM-DD)
    #[arg(long, global = true, default_value = DEFAULT_END_DATE)]
    end_date: String,

    /// Handling of sales with no matching dimension row: null, drop or reject
    #[arg(long, global = true, default_value = "null")]
    unmatched: UnmatchedPolicy,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Extract, transform and load (the default)
    Etl,

    /// Render charts from the warehouse
    Report,

    /// Run the ETL and then the report
    All,
}

impl Args {
    /// The subcommand to run; ETL when none is given.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Etl)
    }

    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    #[must_use]
    pub fn config(&self) -> PipelineConfig {
        let source: SourceConfig = self.local_source.as_ref().map_or_else(
            || SourceConfig::Http {
                base_url: self.base_url.clone(),
            },
            |dir| SourceConfig::LocalDir(dir.clone()),
        );

        PipelineConfig {
            source,
            dataset: self.dataset.clone(),
            raw_dir: self.raw_dir.clone(),
            raw_file: self.raw_file.clone(),
            cache_dir: self.cache_dir.clone(),
            processed_dir: self.processed_dir.clone(),
            warehouse_path: self.warehouse.clone(),
            sql_dir: self.sql_dir.clone(),
            charts_dir: self.charts_dir.clone(),
            log_dir: self.log_dir.clone(),
            font_path: self.font.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            unmatched: self.unmatched,
        }
    }
}
