// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_domain::UnmatchedPolicy;
use sales_dw_extract::{
    DEFAULT_BASE_URL, DEFAULT_DATASET, DEFAULT_FILE_NAME, DEFAULT_RAW_DIR, DatasetSource,
    ExtractError, ExtractRequest, HttpSource, LocalDirSource,
};
use sales_dw_report::{DEFAULT_CHARTS_DIR, DEFAULT_SQL_DIR, DEFAULT_WAREHOUSE_PATH, ReportConfig};
use sales_dw_transform::{DEFAULT_END_DATE, DEFAULT_START_DATE, TransformConfig};
use std::path::PathBuf;

pub const DEFAULT_CACHE_DIR: &str = "data/cache";
pub const DEFAULT_PROCESSED_DIR: &str = "data/processed";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Where the raw dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// Download from `base_url`, caching under the cache directory.
    Http { base_url: String },
    /// Use files already present in a directory.
    LocalDir(PathBuf),
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Http {
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }
}

/// Every path and parameter of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub source: SourceConfig,
    pub dataset: String,
    pub raw_dir: PathBuf,
    pub raw_file: String,
    pub cache_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub warehouse_path: PathBuf,
    pub sql_dir: PathBuf,
    pub charts_dir: PathBuf,
    pub log_dir: PathBuf,
    pub font_path: Option<PathBuf>,
    pub start_date: String,
    pub end_date: String,
    pub unmatched: UnmatchedPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            dataset: String::from(DEFAULT_DATASET),
            raw_dir: PathBuf::from(DEFAULT_RAW_DIR),
            raw_file: String::from(DEFAULT_FILE_NAME),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            processed_dir: PathBuf::from(DEFAULT_PROCESSED_DIR),
            warehouse_path: PathBuf::from(DEFAULT_WAREHOUSE_PATH),
            sql_dir: PathBuf::from(DEFAULT_SQL_DIR),
            charts_dir: PathBuf::from(DEFAULT_CHARTS_DIR),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            font_path: None,
            start_date: String::from(DEFAULT_START_DATE),
            end_date: String::from(DEFAULT_END_DATE),
            unmatched: UnmatchedPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Path of the extracted raw CSV.
    #[must_use]
    pub fn raw_path(&self) -> PathBuf {
        self.raw_dir.join(&self.raw_file)
    }

    #[must_use]
    pub fn extract_request(&self) -> ExtractRequest {
        ExtractRequest {
            dataset: self.dataset.clone(),
            file_name: self.raw_file.clone(),
            destination_dir: self.raw_dir.clone(),
        }
    }

    #[must_use]
    pub fn transform_config(&self) -> TransformConfig {
        TransformConfig {
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            unmatched: self.unmatched,
        }
    }

    #[must_use]
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            sql_dir: self.sql_dir.clone(),
            charts_dir: self.charts_dir.clone(),
            warehouse_path: self.warehouse_path.clone(),
            font_path: self.font_path.clone(),
        }
    }

    /// Builds the configured dataset source.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn dataset_source(&self) -> Result<Box<dyn DatasetSource>, ExtractError> {
        Ok(match &self.source {
            SourceConfig::Http { base_url } => Box::new(HttpSource::new(
                base_url,
                self.cache_dir.clone(),
                &self.raw_file,
            )?),
            SourceConfig::LocalDir(dir) => Box::new(LocalDirSource::new(dir.clone())),
        })
    }
}
