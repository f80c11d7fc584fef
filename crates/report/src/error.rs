// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_warehouse::WarehouseError;
use std::path::{Path, PathBuf};

/// Errors raised while producing the report charts. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Query file not found: {}", path.display())]
    MissingQuery { path: PathBuf },

    #[error("Warehouse not found: {}", path.display())]
    MissingWarehouse { path: PathBuf },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Warehouse(#[from] WarehouseError),

    #[error("Failed to write chart {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ReportError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
