// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_domain::StagingError;

/// Errors that can occur while loading or querying the warehouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarehouseError {
    /// A statement against the warehouse failed.
    DatabaseError(String),
    /// The warehouse file could not be opened.
    DatabaseConnectionFailed(String),
    /// A report query failed.
    QueryFailed(String),
    /// The warehouse location could not be prepared.
    InitializationError(String),
    /// A staged input file is missing.
    MissingInput(String),
    /// A staged input file could not be read.
    StagingError(String),
    /// A stored value could not be converted back into a record.
    InvalidValue {
        /// The table holding the value.
        table: &'static str,
        /// The column holding the value.
        column: &'static str,
        /// The stored value.
        value: String,
    },
}

impl std::fmt::Display for WarehouseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Warehouse statement failed: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Cannot open warehouse: {msg}")
            }
            Self::QueryFailed(msg) => write!(f, "Report query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Cannot prepare warehouse location: {msg}"),
            Self::MissingInput(msg) => write!(f, "Staged input missing: {msg}"),
            Self::StagingError(msg) => write!(f, "Cannot read staged input: {msg}"),
            Self::InvalidValue {
                table,
                column,
                value,
            } => write!(f, "Invalid value '{value}' in {table}.{column}"),
        }
    }
}

impl std::error::Error for WarehouseError {}

impl From<diesel::result::Error> for WarehouseError {
    fn from(err: diesel::result::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<diesel::ConnectionError> for WarehouseError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<StagingError> for WarehouseError {
    fn from(err: StagingError) -> Self {
        match err {
            StagingError::MissingFile { .. } => Self::MissingInput(err.to_string()),
            _ => Self::StagingError(err.to_string()),
        }
    }
}
