// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! On-disk CSV hand-off between the transform and load stages.
//!
//! Each table of a [`StarSchema`] is written to `<dir>/<table>.csv` with a
//! header row named after the record fields. The load stage reads the same
//! files back, so the staged directory is the only contract between the two.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::types::StarSchema;

/// The seven warehouse tables, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    DimBranch,
    DimCustomer,
    DimProduct,
    DimPayment,
    DimDate,
    DimTime,
    FactSales,
}

impl Table {
    /// Every table, dimensions first.
    pub const ALL: [Self; 7] = [
        Self::DimBranch,
        Self::DimCustomer,
        Self::DimProduct,
        Self::DimPayment,
        Self::DimDate,
        Self::DimTime,
        Self::FactSales,
    ];

    /// The table name used in the warehouse.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DimBranch => "dim_branch",
            Self::DimCustomer => "dim_customer",
            Self::DimProduct => "dim_product",
            Self::DimPayment => "dim_payment",
            Self::DimDate => "dim_date",
            Self::DimTime => "dim_time",
            Self::FactSales => "fact_sales",
        }
    }

    /// The staged file name, e.g. `dim_branch.csv`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }

    /// The staged file path inside `dir`.
    #[must_use]
    pub fn path_in(self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while writing or reading flat files.
#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("file not found: {}", path.display())]
    MissingFile { path: PathBuf },
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl StagingError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == ErrorKind::NotFound {
            Self::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    fn csv(path: &Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Reads every record of a headed CSV file.
///
/// Fields are trimmed and bound by header name.
///
/// # Errors
///
/// Returns `StagingError::MissingFile` if the file does not exist, or another
/// variant if it cannot be read or a record does not deserialize.
pub fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StagingError> {
    let file: File = File::open(path).map_err(|e| StagingError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let records: Vec<T> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .map_err(|e| StagingError::csv(path, e))?;

    debug!(path = %path.display(), rows = records.len(), "Read CSV file");
    Ok(records)
}

/// Writes records to a headed CSV file, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StagingError> {
    let file: File = File::create(path).map_err(|e| StagingError::io(path, e))?;
    let mut writer = csv::Writer::from_writer(file);

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| StagingError::csv(path, e))?;
    }
    writer.flush().map_err(|e| StagingError::io(path, e))?;

    debug!(path = %path.display(), rows = records.len(), "Wrote CSV file");
    Ok(())
}

/// Stages every table of `schema` under `dir`, creating the directory if absent.
///
/// # Errors
///
/// Returns an error if the directory or any file cannot be written.
pub fn write_star_schema(dir: &Path, schema: &StarSchema) -> Result<(), StagingError> {
    std::fs::create_dir_all(dir).map_err(|e| StagingError::io(dir, e))?;

    write_csv(&Table::DimBranch.path_in(dir), &schema.branches)?;
    write_csv(&Table::DimCustomer.path_in(dir), &schema.customers)?;
    write_csv(&Table::DimProduct.path_in(dir), &schema.products)?;
    write_csv(&Table::DimPayment.path_in(dir), &schema.payments)?;
    write_csv(&Table::DimDate.path_in(dir), &schema.dates)?;
    write_csv(&Table::DimTime.path_in(dir), &schema.times)?;
    write_csv(&Table::FactSales.path_in(dir), &schema.facts)?;

    info!(dir = %dir.display(), "Staged star schema");
    Ok(())
}

/// Reads a staged star schema back from `dir`.
///
/// # Errors
///
/// Returns `StagingError::MissingFile` for the first table whose file is absent.
pub fn read_star_schema(dir: &Path) -> Result<StarSchema, StagingError> {
    let schema: StarSchema = StarSchema {
        branches: read_csv(&Table::DimBranch.path_in(dir))?,
        customers: read_csv(&Table::DimCustomer.path_in(dir))?,
        products: read_csv(&Table::DimProduct.path_in(dir))?,
        payments: read_csv(&Table::DimPayment.path_in(dir))?,
        dates: read_csv(&Table::DimDate.path_in(dir))?,
        times: read_csv(&Table::DimTime.path_in(dir))?,
        facts: read_csv(&Table::FactSales.path_in(dir))?,
    };

    info!(
        dir = %dir.display(),
        facts = schema.facts.len(),
        "Read staged star schema"
    );
    Ok(schema)
}
