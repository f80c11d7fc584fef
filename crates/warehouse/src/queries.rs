// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read access to the warehouse tables and the report queries.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use diesel::SqliteConnection;
use sales_dw_domain::{
    DimBranch, DimCustomer, DimDate, DimPayment, DimProduct, DimTime, FactSale, StarSchema,
};
use tracing::debug;

use crate::data_models::{
    BranchRow, CustomerRow, CustomerSpendingRow, DateRow, FactRow, HourlySalesRow,
    MonthlySalesRow, PaymentRow, ProductRow, TimeRow, TopProductRow,
};
use crate::diesel_schema::{
    dim_branch, dim_customer, dim_date, dim_payment, dim_product, dim_time, fact_sales,
};
use crate::error::WarehouseError;

/// # Errors
///
/// Returns an error if the table cannot be read.
pub fn load_branches(conn: &mut SqliteConnection) -> Result<Vec<DimBranch>, WarehouseError> {
    let rows: Vec<BranchRow> = dim_branch::table
        .select(BranchRow::as_select())
        .order(dim_branch::branch_key.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(DimBranch::from).collect())
}

/// # Errors
///
/// Returns an error if the table cannot be read.
pub fn load_customers(conn: &mut SqliteConnection) -> Result<Vec<DimCustomer>, WarehouseError> {
    let rows: Vec<CustomerRow> = dim_customer::table
        .select(CustomerRow::as_select())
        .order(dim_customer::customer_key.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(DimCustomer::from).collect())
}

/// # Errors
///
/// Returns an error if the table cannot be read.
pub fn load_products(conn: &mut SqliteConnection) -> Result<Vec<DimProduct>, WarehouseError> {
    let rows: Vec<ProductRow> = dim_product::table
        .select(ProductRow::as_select())
        .order(dim_product::product_key.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(DimProduct::from).collect())
}

/// # Errors
///
/// Returns an error if the table cannot be read.
pub fn load_payments(conn: &mut SqliteConnection) -> Result<Vec<DimPayment>, WarehouseError> {
    let rows: Vec<PaymentRow> = dim_payment::table
        .select(PaymentRow::as_select())
        .order(dim_payment::payment_key.asc())
        .load(conn)?;
    Ok(rows.into_iter().map(DimPayment::from).collect())
}

/// # Errors
///
/// Returns an error if the table cannot be read or holds a malformed date.
pub fn load_dates(conn: &mut SqliteConnection) -> Result<Vec<DimDate>, WarehouseError> {
    let rows: Vec<DateRow> = dim_date::table
        .select(DateRow::as_select())
        .order(dim_date::date_key.asc())
        .load(conn)?;
    rows.into_iter().map(DimDate::try_from).collect()
}

/// # Errors
///
/// Returns an error if the table cannot be read or holds a malformed time.
pub fn load_times(conn: &mut SqliteConnection) -> Result<Vec<DimTime>, WarehouseError> {
    let rows: Vec<TimeRow> = dim_time::table
        .select(TimeRow::as_select())
        .order(dim_time::time_key.asc())
        .load(conn)?;
    rows.into_iter().map(DimTime::try_from).collect()
}

/// Reads the fact table in insertion order.
///
/// # Errors
///
/// Returns an error if the table cannot be read.
pub fn load_facts(conn: &mut SqliteConnection) -> Result<Vec<FactSale>, WarehouseError> {
    let rows: Vec<FactRow> = fact_sales::table
        .select(FactRow::as_select())
        .order(sql::<BigInt>("rowid"))
        .load(conn)?;
    Ok(rows.into_iter().map(FactSale::from).collect())
}

/// Reads all seven tables.
///
/// # Errors
///
/// Returns an error if any table cannot be read.
pub fn load_star_schema(conn: &mut SqliteConnection) -> Result<StarSchema, WarehouseError> {
    let schema = StarSchema {
        branches: load_branches(conn)?,
        customers: load_customers(conn)?,
        products: load_products(conn)?,
        payments: load_payments(conn)?,
        dates: load_dates(conn)?,
        times: load_times(conn)?,
        facts: load_facts(conn)?,
    };
    debug!(facts = schema.facts.len(), "Read star schema from warehouse");
    Ok(schema)
}

// Report queries are user-editable SQL, so their results are bound by
// column name.

/// Runs a query producing `month`, `branch_name`, `monthly_sales`.
///
/// # Errors
///
/// Returns an error if the query fails or lacks those columns.
pub fn monthly_sales(
    conn: &mut SqliteConnection,
    query: &str,
) -> Result<Vec<MonthlySalesRow>, WarehouseError> {
    diesel::sql_query(query)
        .load(conn)
        .map_err(|e| WarehouseError::QueryFailed(e.to_string()))
}

/// Runs a query producing `branch_name`, `product_line`, `total_sales`.
///
/// # Errors
///
/// Returns an error if the query fails or lacks those columns.
pub fn top_products(
    conn: &mut SqliteConnection,
    query: &str,
) -> Result<Vec<TopProductRow>, WarehouseError> {
    diesel::sql_query(query)
        .load(conn)
        .map_err(|e| WarehouseError::QueryFailed(e.to_string()))
}

/// Runs a query producing `gender`, `payment_method`, `avg_spending`.
///
/// # Errors
///
/// Returns an error if the query fails or lacks those columns.
pub fn customer_spending(
    conn: &mut SqliteConnection,
    query: &str,
) -> Result<Vec<CustomerSpendingRow>, WarehouseError> {
    diesel::sql_query(query)
        .load(conn)
        .map_err(|e| WarehouseError::QueryFailed(e.to_string()))
}

/// Runs a query producing `hour`, `branch_name`, `hourly_sales`.
///
/// # Errors
///
/// Returns an error if the query fails or lacks those columns.
pub fn hourly_sales(
    conn: &mut SqliteConnection,
    query: &str,
) -> Result<Vec<HourlySalesRow>, WarehouseError> {
    diesel::sql_query(query)
        .load(conn)
        .map_err(|e| WarehouseError::QueryFailed(e.to_string()))
}
