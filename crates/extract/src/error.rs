// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Errors raised while fetching or copying the dataset.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The remote source could not be reached or answered with an error.
    #[error("dataset source request failed: {0}")]
    Source(#[from] reqwest::Error),
    /// The downloaded archive could not be unpacked.
    #[error("failed to unpack dataset archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    /// A filesystem operation failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Coarse category used in log lines.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Source(_) => "Source error",
            Self::Archive(_) => "Archive error",
            Self::Io { source, .. } => match source.kind() {
                ErrorKind::NotFound => "File not found",
                ErrorKind::PermissionDenied => "Permission error",
                _ => "OS error",
            },
        }
    }
}
