// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_domain::{StageStatus, StarSchema, read_star_schema};
use std::path::Path;
use tracing::{error, info};

use crate::error::WarehouseError;
use crate::warehouse::Warehouse;

/// Loads the staged star schema in `processed_dir` into the warehouse at
/// `warehouse_path`, replacing its contents.
///
/// # Errors
///
/// Returns an error if a staged file is missing or unreadable, or if the
/// warehouse rejects the load.
pub fn try_load(processed_dir: &Path, warehouse_path: &Path) -> Result<StarSchema, WarehouseError> {
    info!(
        processed_dir = %processed_dir.display(),
        warehouse = %warehouse_path.display(),
        "Loading staged tables"
    );

    let star: StarSchema = read_star_schema(processed_dir)?;
    let mut warehouse = Warehouse::open(warehouse_path)?;
    warehouse.replace_star_schema(&star)?;
    Ok(star)
}

/// Runs the load stage, reporting the outcome as a status.
#[must_use]
pub fn load_data_to_dw(processed_dir: &Path, warehouse_path: &Path) -> StageStatus {
    match try_load(processed_dir, warehouse_path) {
        Ok(star) => {
            info!(facts = star.facts.len(), "Data loading completed");
            StageStatus::Succeeded
        }
        Err(e @ WarehouseError::MissingInput(_)) => {
            error!(error = %e, "File not found during loading");
            StageStatus::Failed
        }
        Err(e) => {
            error!(error = %e, "Data loading failed");
            StageStatus::Failed
        }
    }
}
