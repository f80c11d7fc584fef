// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite connection setup.

use diesel::{Connection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel::sql_types::Text;
use std::path::Path;
use tracing::info;

use crate::error::WarehouseError;

/// Database URL of a private in-memory warehouse.
pub const IN_MEMORY_URL: &str = ":memory:";

/// Row of the `sqlite_master` index listing.
#[derive(QueryableByName)]
struct IndexRow {
    #[diesel(sql_type = Text)]
    name: String,
}

/// Opens a connection to `database_url`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub fn connect(database_url: &str) -> Result<SqliteConnection, WarehouseError> {
    info!("Opening SQLite warehouse at: {}", database_url);
    Ok(SqliteConnection::establish(database_url)?)
}

/// Opens the warehouse file at `path`, creating its parent directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the path is not
/// valid UTF-8, or the connection fails.
pub fn connect_file(path: &Path) -> Result<SqliteConnection, WarehouseError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            WarehouseError::InitializationError(format!(
                "cannot create directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let url: &str = path.to_str().ok_or_else(|| {
        WarehouseError::InitializationError(format!(
            "warehouse path is not valid UTF-8: {}",
            path.display()
        ))
    })?;
    connect(url)
}

/// Lists the names of all user-created indexes, sorted.
///
/// SQLite's internal `sqlite_autoindex_*` entries are excluded.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read.
pub fn list_indexes(conn: &mut SqliteConnection) -> Result<Vec<String>, WarehouseError> {
    // NOTE: the catalog has no Diesel DSL
    let rows: Vec<IndexRow> = diesel::sql_query(
        "SELECT name FROM sqlite_master \
         WHERE type = 'index' AND name NOT LIKE 'sqlite_%' \
         ORDER BY name",
    )
    .load(conn)
    .map_err(|e| WarehouseError::QueryFailed(e.to_string()))?;

    Ok(rows.into_iter().map(|row| row.name).collect())
}
