// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Places a named dataset's files in a local directory.
//!
//! [`HttpSource`] downloads the dataset into a cache directory and unpacks
//! it if the payload is a zip archive. [`LocalDirSource`] serves a directory
//! that already holds the files, for offline runs.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::ExtractError;

/// Kaggle's public dataset download endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.kaggle.com/api/v1/datasets/download";

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// A place datasets can be fetched from.
pub trait DatasetSource {
    /// Makes `dataset` available locally.
    ///
    /// Returns the directory that holds the dataset's files.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be retrieved.
    fn fetch(&self, dataset: &str) -> Result<PathBuf, ExtractError>;
}

/// Downloads datasets over HTTP into a cache directory.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    cache_dir: PathBuf,
    file_name: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Creates a source rooted at `base_url`.
    ///
    /// A payload that is not a zip archive is stored as `file_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        cache_dir: impl Into<PathBuf>,
        file_name: &str,
    ) -> Result<Self, ExtractError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            cache_dir: cache_dir.into(),
            file_name: file_name.to_string(),
            client,
        })
    }

    /// The URL a dataset is downloaded from.
    #[must_use]
    pub fn dataset_url(&self, dataset: &str) -> String {
        format!("{}/{}", self.base_url, dataset.trim_matches('/'))
    }

    /// The cache directory a dataset is unpacked into.
    #[must_use]
    pub fn dataset_dir(&self, dataset: &str) -> PathBuf {
        self.cache_dir
            .join(dataset.trim_matches('/').replace('/', "__"))
    }
}

impl DatasetSource for HttpSource {
    fn fetch(&self, dataset: &str) -> Result<PathBuf, ExtractError> {
        let url: String = self.dataset_url(dataset);
        info!(%url, "Downloading dataset");

        let payload = self.client.get(&url).send()?.error_for_status()?.bytes()?;
        debug!(bytes = payload.len(), "Downloaded dataset payload");

        let dir: PathBuf = self.dataset_dir(dataset);
        store_payload(&payload, &dir, &self.file_name)?;
        Ok(dir)
    }
}

/// Writes a downloaded payload into `dir`, unpacking zip archives.
pub(crate) fn store_payload(
    payload: &[u8],
    dir: &Path,
    file_name: &str,
) -> Result<(), ExtractError> {
    std::fs::create_dir_all(dir).map_err(|e| ExtractError::io(dir, e))?;

    if payload.starts_with(ZIP_MAGIC) {
        let mut archive = zip::ZipArchive::new(Cursor::new(payload))?;
        debug!(entries = archive.len(), dir = %dir.display(), "Unpacking dataset archive");
        archive.extract(dir)?;
    } else {
        let path: PathBuf = dir.join(file_name);
        std::fs::write(&path, payload).map_err(|e| ExtractError::io(&path, e))?;
    }
    Ok(())
}

/// Serves a dataset from a directory already on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDirSource {
    dir: PathBuf,
}

impl LocalDirSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DatasetSource for LocalDirSource {
    fn fetch(&self, dataset: &str) -> Result<PathBuf, ExtractError> {
        debug!(dataset, dir = %self.dir.display(), "Using local dataset directory");
        if self.dir.is_dir() {
            Ok(self.dir.clone())
        } else {
            Err(ExtractError::io(
                &self.dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "dataset directory not found"),
            ))
        }
    }
}
