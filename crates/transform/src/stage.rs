// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_domain::{
    DimBranch, DimCustomer, DimDate, DimPayment, DimProduct, DimTime, DomainError, RawSale, Sale,
    StarSchema, UnmatchedPolicy, write_star_schema,
};
use std::path::Path;
use tracing::info;

use crate::dimensions::{
    build_branch_dimension, build_customer_dimension, build_payment_dimension,
    build_product_dimension, build_time_dimension, date_dimension_from_strings,
};
use crate::error::TransformError;
use crate::fact::{DimensionTables, FactBuild, build_fact};
use crate::normalize::{normalize, read_raw_sales};

/// First day of the generated date dimension.
pub const DEFAULT_START_DATE: &str = "2019-01-01";
/// Last day of the generated date dimension.
pub const DEFAULT_END_DATE: &str = "2021-12-31";

/// Parameters of the transform stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    /// ISO start of the date dimension (inclusive).
    pub start_date: String,
    /// ISO end of the date dimension (inclusive).
    pub end_date: String,
    /// Handling of sales that do not resolve against a dimension.
    pub unmatched: UnmatchedPolicy,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            start_date: String::from(DEFAULT_START_DATE),
            end_date: String::from(DEFAULT_END_DATE),
            unmatched: UnmatchedPolicy::default(),
        }
    }
}

/// Builds the full star schema from raw sales.
///
/// # Errors
///
/// Returns an error if a sale has an unparsable date or time, or if an
/// unresolved sale is rejected by the configured policy.
pub fn transform(raw: &[RawSale], config: &TransformConfig) -> Result<StarSchema, DomainError> {
    let sales: Vec<Sale> = normalize(raw)?;
    info!(rows = sales.len(), "Renamed columns and parsed dates");

    let branches: Vec<DimBranch> = build_branch_dimension(&sales);
    info!(rows = branches.len(), "Extracted branch dimension");
    let customers: Vec<DimCustomer> = build_customer_dimension(&sales);
    info!(rows = customers.len(), "Extracted customer dimension");
    let products: Vec<DimProduct> = build_product_dimension(&sales);
    info!(rows = products.len(), "Extracted product dimension");
    let payments: Vec<DimPayment> = build_payment_dimension(&sales);
    info!(rows = payments.len(), "Extracted payment dimension");
    let dates: Vec<DimDate> = date_dimension_from_strings(&config.start_date, &config.end_date);
    info!(rows = dates.len(), "Extracted date dimension");
    let times: Vec<DimTime> = build_time_dimension();
    info!(rows = times.len(), "Extracted time dimension");

    let FactBuild {
        facts,
        unmatched_rows,
        dropped_rows,
    } = build_fact(
        &sales,
        DimensionTables {
            branches: &branches,
            customers: &customers,
            products: &products,
            payments: &payments,
            dates: &dates,
            times: &times,
        },
        config.unmatched,
    )?;
    info!(rows = facts.len(), unmatched_rows, dropped_rows, "Extracted fact sales");

    Ok(StarSchema {
        branches,
        customers,
        products,
        payments,
        dates,
        times,
        facts,
    })
}

/// Reads the raw CSV at `raw_path`, transforms it and stages every table
/// under `processed_dir`.
///
/// # Errors
///
/// Returns an error if the raw file cannot be read, the transform fails, or
/// a staged file cannot be written.
pub fn transform_file(
    raw_path: &Path,
    processed_dir: &Path,
    config: &TransformConfig,
) -> Result<StarSchema, TransformError> {
    let raw: Vec<RawSale> = read_raw_sales(raw_path)?;
    let schema: StarSchema = transform(&raw, config)?;
    write_star_schema(processed_dir, &schema)?;
    Ok(schema)
}
