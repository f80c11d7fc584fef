// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Extract stage: fetch the sales dataset and copy the raw CSV into the
//! raw-data directory.

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

mod error;
mod source;
mod stage;

#[cfg(test)]
mod tests;

pub use error::ExtractError;
pub use source::{DEFAULT_BASE_URL, DatasetSource, HttpSource, LocalDirSource};
pub use stage::{
    DEFAULT_DATASET, DEFAULT_FILE_NAME, DEFAULT_RAW_DIR, ExtractRequest, extract_data, try_extract,
};
