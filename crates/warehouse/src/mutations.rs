// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row inserts for each warehouse table.

use diesel::prelude::*;
use diesel::SqliteConnection;
use sales_dw_domain::{
    DimBranch, DimCustomer, DimDate, DimPayment, DimProduct, DimTime, FactSale, StarSchema,
};
use tracing::debug;

use crate::data_models::{format_clock_time, format_iso_date};
use crate::diesel_schema::{
    dim_branch, dim_customer, dim_date, dim_payment, dim_product, dim_time, fact_sales,
};
use crate::error::WarehouseError;

/// Inserts every row of `schema` into the (empty) warehouse tables.
///
/// # Errors
///
/// Returns an error if any insert fails.
pub fn insert_star_schema(
    conn: &mut SqliteConnection,
    schema: &StarSchema,
) -> Result<(), WarehouseError> {
    insert_branches(conn, &schema.branches)?;
    insert_customers(conn, &schema.customers)?;
    insert_products(conn, &schema.products)?;
    insert_payments(conn, &schema.payments)?;
    insert_dates(conn, &schema.dates)?;
    insert_times(conn, &schema.times)?;
    insert_facts(conn, &schema.facts)?;
    Ok(())
}

fn insert_branches(conn: &mut SqliteConnection, rows: &[DimBranch]) -> Result<(), WarehouseError> {
    for row in rows {
        diesel::insert_into(dim_branch::table)
            .values((
                dim_branch::branch_key.eq(row.branch_key),
                dim_branch::branch_name.eq(&row.branch_name),
                dim_branch::city.eq(&row.city),
            ))
            .execute(conn)?;
    }
    debug!(rows = rows.len(), "Inserted dim_branch rows");
    Ok(())
}

fn insert_customers(
    conn: &mut SqliteConnection,
    rows: &[DimCustomer],
) -> Result<(), WarehouseError> {
    for row in rows {
        diesel::insert_into(dim_customer::table)
            .values((
                dim_customer::customer_key.eq(row.customer_key),
                dim_customer::customer_type.eq(&row.customer_type),
                dim_customer::gender.eq(&row.gender),
            ))
            .execute(conn)?;
    }
    debug!(rows = rows.len(), "Inserted dim_customer rows");
    Ok(())
}

fn insert_products(conn: &mut SqliteConnection, rows: &[DimProduct]) -> Result<(), WarehouseError> {
    for row in rows {
        diesel::insert_into(dim_product::table)
            .values((
                dim_product::product_key.eq(row.product_key),
                dim_product::product_line.eq(&row.product_line),
            ))
            .execute(conn)?;
    }
    debug!(rows = rows.len(), "Inserted dim_product rows");
    Ok(())
}

fn insert_payments(conn: &mut SqliteConnection, rows: &[DimPayment]) -> Result<(), WarehouseError> {
    for row in rows {
        diesel::insert_into(dim_payment::table)
            .values((
                dim_payment::payment_key.eq(row.payment_key),
                dim_payment::payment_method.eq(&row.payment_method),
            ))
            .execute(conn)?;
    }
    debug!(rows = rows.len(), "Inserted dim_payment rows");
    Ok(())
}

fn insert_dates(conn: &mut SqliteConnection, rows: &[DimDate]) -> Result<(), WarehouseError> {
    for row in rows {
        diesel::insert_into(dim_date::table)
            .values((
                dim_date::date_key.eq(row.date_key),
                dim_date::date.eq(format_iso_date(row.date)?),
                dim_date::year.eq(row.year),
                dim_date::quarter.eq(row.quarter),
                dim_date::month.eq(row.month),
                dim_date::month_name.eq(&row.month_name),
                dim_date::week.eq(row.week),
                dim_date::day.eq(row.day),
                dim_date::day_name.eq(&row.day_name),
                dim_date::is_weekend.eq(i32::from(row.is_weekend)),
            ))
            .execute(conn)?;
    }
    debug!(rows = rows.len(), "Inserted dim_date rows");
    Ok(())
}

fn insert_times(conn: &mut SqliteConnection, rows: &[DimTime]) -> Result<(), WarehouseError> {
    for row in rows {
        diesel::insert_into(dim_time::table)
            .values((
                dim_time::time_key.eq(row.time_key),
                dim_time::time.eq(format_clock_time(row.time)?),
                dim_time::hour.eq(row.hour),
                dim_time::minute.eq(row.minute),
                dim_time::am_pm.eq(&row.am_pm),
            ))
            .execute(conn)?;
    }
    debug!(rows = rows.len(), "Inserted dim_time rows");
    Ok(())
}

fn insert_facts(conn: &mut SqliteConnection, rows: &[FactSale]) -> Result<(), WarehouseError> {
    for row in rows {
        diesel::insert_into(fact_sales::table)
            .values((
                fact_sales::invoice_id.eq(&row.invoice_id),
                fact_sales::date_key.eq(row.date_key),
                fact_sales::time_key.eq(row.time_key),
                fact_sales::branch_key.eq(row.branch_key),
                fact_sales::customer_key.eq(row.customer_key),
                fact_sales::product_key.eq(row.product_key),
                fact_sales::payment_key.eq(row.payment_key),
                fact_sales::unit_price.eq(row.unit_price),
                fact_sales::quantity.eq(row.quantity),
                fact_sales::tax_5_percent.eq(row.tax_5_percent),
                fact_sales::total.eq(row.total),
                fact_sales::cost_of_goods_sold.eq(row.cost_of_goods_sold),
                fact_sales::gross_margin_percentage.eq(row.gross_margin_percentage),
                fact_sales::gross_income.eq(row.gross_income),
                fact_sales::rating.eq(row.rating),
            ))
            .execute(conn)?;
    }
    debug!(rows = rows.len(), "Inserted fact_sales rows");
    Ok(())
}
