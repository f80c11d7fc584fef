// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::sql_types::{Double, Integer, Text};
use sales_dw_domain::{
    DimBranch, DimCustomer, DimDate, DimPayment, DimProduct, DimTime, FactSale, parse_iso_date,
};
use time::{Date, Time};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::diesel_schema::{
    dim_branch, dim_customer, dim_date, dim_payment, dim_product, dim_time, fact_sales,
};
use crate::error::WarehouseError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const CLOCK_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

/// Formats a date the way `dim_date.date` stores it.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn format_iso_date(date: Date) -> Result<String, WarehouseError> {
    date.format(ISO_DATE)
        .map_err(|_| WarehouseError::InvalidValue {
            table: "dim_date",
            column: "date",
            value: date.to_string(),
        })
}

/// Formats a time the way `dim_time.time` stores it.
///
/// # Errors
///
/// Returns an error if the time cannot be formatted.
pub fn format_clock_time(time: Time) -> Result<String, WarehouseError> {
    time.format(CLOCK_TIME)
        .map_err(|_| WarehouseError::InvalidValue {
            table: "dim_time",
            column: "time",
            value: time.to_string(),
        })
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = dim_branch)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BranchRow {
    pub branch_key: i64,
    pub branch_name: String,
    pub city: String,
}

impl From<BranchRow> for DimBranch {
    fn from(row: BranchRow) -> Self {
        Self {
            branch_key: row.branch_key,
            branch_name: row.branch_name,
            city: row.city,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = dim_customer)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CustomerRow {
    pub customer_key: i64,
    pub customer_type: String,
    pub gender: String,
}

impl From<CustomerRow> for DimCustomer {
    fn from(row: CustomerRow) -> Self {
        Self {
            customer_key: row.customer_key,
            customer_type: row.customer_type,
            gender: row.gender,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = dim_product)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub product_key: i64,
    pub product_line: String,
}

impl From<ProductRow> for DimProduct {
    fn from(row: ProductRow) -> Self {
        Self {
            product_key: row.product_key,
            product_line: row.product_line,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = dim_payment)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaymentRow {
    pub payment_key: i64,
    pub payment_method: String,
}

impl From<PaymentRow> for DimPayment {
    fn from(row: PaymentRow) -> Self {
        Self {
            payment_key: row.payment_key,
            payment_method: row.payment_method,
        }
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = dim_date)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DateRow {
    pub date_key: i64,
    pub date: String,
    pub year: i32,
    pub quarter: i32,
    pub month: i32,
    pub month_name: String,
    pub week: i32,
    pub day: i32,
    pub day_name: String,
    pub is_weekend: i32,
}

impl TryFrom<DateRow> for DimDate {
    type Error = WarehouseError;

    fn try_from(row: DateRow) -> Result<Self, Self::Error> {
        let date: Date = parse_iso_date(&row.date).map_err(|_| WarehouseError::InvalidValue {
            table: "dim_date",
            column: "date",
            value: row.date.clone(),
        })?;

        Ok(Self {
            date_key: row.date_key,
            date,
            year: row.year,
            quarter: row.quarter,
            month: row.month,
            month_name: row.month_name,
            week: row.week,
            day: row.day,
            day_name: row.day_name,
            is_weekend: row.is_weekend != 0,
        })
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = dim_time)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TimeRow {
    pub time_key: i64,
    pub time: String,
    pub hour: i32,
    pub minute: i32,
    pub am_pm: String,
}

impl TryFrom<TimeRow> for DimTime {
    type Error = WarehouseError;

    fn try_from(row: TimeRow) -> Result<Self, Self::Error> {
        let time: Time =
            Time::parse(&row.time, CLOCK_TIME).map_err(|_| WarehouseError::InvalidValue {
                table: "dim_time",
                column: "time",
                value: row.time.clone(),
            })?;

        Ok(Self {
            time_key: row.time_key,
            time,
            hour: row.hour,
            minute: row.minute,
            am_pm: row.am_pm,
        })
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = fact_sales)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FactRow {
    pub invoice_id: String,
    pub date_key: Option<i64>,
    pub time_key: Option<i64>,
    pub branch_key: Option<i64>,
    pub customer_key: Option<i64>,
    pub product_key: Option<i64>,
    pub payment_key: Option<i64>,
    pub unit_price: f64,
    pub quantity: i64,
    pub tax_5_percent: f64,
    pub total: f64,
    pub cost_of_goods_sold: f64,
    pub gross_margin_percentage: f64,
    pub gross_income: f64,
    pub rating: f64,
}

impl From<FactRow> for FactSale {
    fn from(row: FactRow) -> Self {
        Self {
            invoice_id: row.invoice_id,
            date_key: row.date_key,
            time_key: row.time_key,
            branch_key: row.branch_key,
            customer_key: row.customer_key,
            product_key: row.product_key,
            payment_key: row.payment_key,
            unit_price: row.unit_price,
            quantity: row.quantity,
            tax_5_percent: row.tax_5_percent,
            total: row.total,
            cost_of_goods_sold: row.cost_of_goods_sold,
            gross_margin_percentage: row.gross_margin_percentage,
            gross_income: row.gross_income,
            rating: row.rating,
        }
    }
}

/// Total sales of one branch in one `YYYY-MM` month.
#[derive(Debug, Clone, PartialEq, QueryableByName)]
pub struct MonthlySalesRow {
    #[diesel(sql_type = Text)]
    pub month: String,
    #[diesel(sql_type = Text)]
    pub branch_name: String,
    #[diesel(sql_type = Double)]
    pub monthly_sales: f64,
}

/// Total sales of one product line in one branch.
#[derive(Debug, Clone, PartialEq, QueryableByName)]
pub struct TopProductRow {
    #[diesel(sql_type = Text)]
    pub branch_name: String,
    #[diesel(sql_type = Text)]
    pub product_line: String,
    #[diesel(sql_type = Double)]
    pub total_sales: f64,
}

/// Average sale total for one gender and payment method.
#[derive(Debug, Clone, PartialEq, QueryableByName)]
pub struct CustomerSpendingRow {
    #[diesel(sql_type = Text)]
    pub gender: String,
    #[diesel(sql_type = Text)]
    pub payment_method: String,
    #[diesel(sql_type = Double)]
    pub avg_spending: f64,
}

/// Total sales of one branch in one hour of the day.
#[derive(Debug, Clone, PartialEq, QueryableByName)]
pub struct HourlySalesRow {
    #[diesel(sql_type = Integer)]
    pub hour: i32,
    #[diesel(sql_type = Text)]
    pub branch_name: String,
    #[diesel(sql_type = Double)]
    pub hourly_sales: f64,
}
