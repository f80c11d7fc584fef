// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Warehouse DDL.
//!
//! Every load drops and recreates the seven tables, so the schema is plain
//! SQL rather than a migration history. Column types mirror
//! `diesel_schema.rs`.

use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use sales_dw_domain::Table;
use tracing::{debug, info};

use crate::error::WarehouseError;

/// Surrogate key column of each dimension table.
pub const DIMENSION_KEYS: [(Table, &str); 6] = [
    (Table::DimBranch, "branch_key"),
    (Table::DimCustomer, "customer_key"),
    (Table::DimProduct, "product_key"),
    (Table::DimPayment, "payment_key"),
    (Table::DimDate, "date_key"),
    (Table::DimTime, "time_key"),
];

fn create_table_sql(table: Table) -> &'static str {
    match table {
        Table::DimBranch => {
            "CREATE TABLE dim_branch (
                branch_key INTEGER NOT NULL,
                branch_name TEXT NOT NULL,
                city TEXT NOT NULL
            );"
        }
        Table::DimCustomer => {
            "CREATE TABLE dim_customer (
                customer_key INTEGER NOT NULL,
                customer_type TEXT NOT NULL,
                gender TEXT NOT NULL
            );"
        }
        Table::DimProduct => {
            "CREATE TABLE dim_product (
                product_key INTEGER NOT NULL,
                product_line TEXT NOT NULL
            );"
        }
        Table::DimPayment => {
            "CREATE TABLE dim_payment (
                payment_key INTEGER NOT NULL,
                payment_method TEXT NOT NULL
            );"
        }
        Table::DimDate => {
            "CREATE TABLE dim_date (
                date_key INTEGER NOT NULL,
                date TEXT NOT NULL,
                year INTEGER NOT NULL,
                quarter INTEGER NOT NULL,
                month INTEGER NOT NULL,
                month_name TEXT NOT NULL,
                week INTEGER NOT NULL,
                day INTEGER NOT NULL,
                day_name TEXT NOT NULL,
                is_weekend INTEGER NOT NULL CHECK(is_weekend IN (0, 1))
            );"
        }
        Table::DimTime => {
            "CREATE TABLE dim_time (
                time_key INTEGER NOT NULL,
                time TEXT NOT NULL,
                hour INTEGER NOT NULL,
                minute INTEGER NOT NULL,
                am_pm TEXT NOT NULL
            );"
        }
        Table::FactSales => {
            "CREATE TABLE fact_sales (
                invoice_id TEXT NOT NULL,
                date_key INTEGER,
                time_key INTEGER,
                branch_key INTEGER,
                customer_key INTEGER,
                product_key INTEGER,
                payment_key INTEGER,
                unit_price REAL NOT NULL,
                quantity INTEGER NOT NULL,
                tax_5_percent REAL NOT NULL,
                total REAL NOT NULL,
                cost_of_goods_sold REAL NOT NULL,
                gross_margin_percentage REAL NOT NULL,
                gross_income REAL NOT NULL,
                rating REAL NOT NULL
            );"
        }
    }
}

/// Drops and recreates every warehouse table.
///
/// # Errors
///
/// Returns an error if any statement fails.
pub fn recreate_tables(conn: &mut SqliteConnection) -> Result<(), WarehouseError> {
    for table in Table::ALL {
        conn.batch_execute(&format!("DROP TABLE IF EXISTS {};", table.name()))?;
        conn.batch_execute(create_table_sql(table))?;
        debug!(table = table.name(), "Recreated table");
    }
    Ok(())
}

/// Index statements: a unique index on each dimension key and a plain index
/// on each fact foreign key.
#[must_use]
pub fn index_statements() -> Vec<String> {
    let mut statements: Vec<String> = Vec::new();

    for (table, key) in DIMENSION_KEYS {
        statements.push(format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_{table}_{key} ON {table}({key});",
            table = table.name(),
        ));
    }
    for (_, key) in DIMENSION_KEYS {
        statements.push(format!(
            "CREATE INDEX IF NOT EXISTS idx_fact_sales_{key} ON fact_sales({key});"
        ));
    }

    statements
}

/// Creates the warehouse indexes.
///
/// # Errors
///
/// Returns an error if an index cannot be created, e.g. because a dimension
/// key is not unique.
pub fn create_indexes(conn: &mut SqliteConnection) -> Result<(), WarehouseError> {
    let statements: Vec<String> = index_statements();
    for statement in &statements {
        conn.batch_execute(statement)?;
    }
    info!(count = statements.len(), "Created warehouse indexes");
    Ok(())
}
