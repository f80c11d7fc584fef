// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_domain::StageStatus;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::error::ExtractError;
use crate::source::DatasetSource;

/// Dataset published by the supermarket sales study.
pub const DEFAULT_DATASET: &str = "lovishbansal123/sales-of-a-supermarket";
/// File copied out of the dataset.
pub const DEFAULT_FILE_NAME: &str = "supermarket_sales.csv";
/// Directory the raw file is copied into.
pub const DEFAULT_RAW_DIR: &str = "data/raw";

/// What to extract and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRequest {
    /// Dataset identifier understood by the source.
    pub dataset: String,
    /// File to copy out of the dataset.
    pub file_name: String,
    /// Directory the file is copied into; created if absent.
    pub destination_dir: PathBuf,
}

impl Default for ExtractRequest {
    fn default() -> Self {
        Self {
            dataset: String::from(DEFAULT_DATASET),
            file_name: String::from(DEFAULT_FILE_NAME),
            destination_dir: PathBuf::from(DEFAULT_RAW_DIR),
        }
    }
}

impl ExtractRequest {
    /// Path of the extracted raw file.
    #[must_use]
    pub fn destination_path(&self) -> PathBuf {
        self.destination_dir.join(&self.file_name)
    }
}

/// Fetches the dataset and copies the requested file into place.
///
/// # Errors
///
/// Returns the first fetch, directory, or copy failure.
pub fn try_extract(
    source: &dyn DatasetSource,
    request: &ExtractRequest,
) -> Result<PathBuf, ExtractError> {
    let destination_dir: &Path = &request.destination_dir;
    std::fs::create_dir_all(destination_dir)
        .map_err(|e| ExtractError::io(destination_dir, e))?;

    let dataset_dir: PathBuf = source.fetch(&request.dataset)?;
    info!(path = %dataset_dir.display(), "Path to dataset files");

    let from: PathBuf = dataset_dir.join(&request.file_name);
    let to: PathBuf = request.destination_path();
    std::fs::copy(&from, &to).map_err(|e| ExtractError::io(&from, e))?;
    info!(from = %from.display(), to = %to.display(), "Copied raw dataset file");

    Ok(to)
}

/// Runs the extract stage, logging any failure and reporting it as a status.
#[must_use]
pub fn extract_data(source: &dyn DatasetSource, request: &ExtractRequest) -> StageStatus {
    match try_extract(source, request) {
        Ok(_) => StageStatus::Succeeded,
        Err(e) => {
            error!(category = e.category(), error = %e, "Extraction failed");
            StageStatus::Failed
        }
    }
}
