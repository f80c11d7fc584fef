// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_domain::{DomainError, RawSale, Sale, StagingError, read_csv};
use std::path::Path;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Time};
use tracing::info;

const SALE_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");
const SALE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour padding:none]:[minute]");
const SALE_TIME_WITH_SECONDS_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour padding:none]:[minute]:[second]");

/// Reads the raw sales CSV.
///
/// # Errors
///
/// Returns an error if the file is missing or a row does not match the
/// expected header.
pub fn read_raw_sales(path: &Path) -> Result<Vec<RawSale>, StagingError> {
    let sales: Vec<RawSale> = read_csv(path)?;
    info!(path = %path.display(), rows = sales.len(), "Loaded raw sales");
    Ok(sales)
}

/// Computes the `YYYYMMDD` integer key of a date.
#[must_use]
pub fn date_key(date: Date) -> i64 {
    i64::from(date.year()) * 10_000
        + i64::from(u8::from(date.month())) * 100
        + i64::from(date.day())
}

/// Parses a sale date in `M/D/YYYY` form.
///
/// # Errors
///
/// Returns `DomainError::InvalidSaleDate` if the value is not a valid date.
pub fn parse_sale_date(row: usize, value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), SALE_DATE_FORMAT).map_err(|e| DomainError::InvalidSaleDate {
        row,
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses a sale time in `H:MM` form. A trailing `:SS` is accepted.
///
/// # Errors
///
/// Returns `DomainError::InvalidSaleTime` if the value is not a valid time.
pub fn parse_sale_time(row: usize, value: &str) -> Result<Time, DomainError> {
    let trimmed: &str = value.trim();
    Time::parse(trimmed, SALE_TIME_FORMAT)
        .or_else(|_| Time::parse(trimmed, SALE_TIME_WITH_SECONDS_FORMAT))
        .map_err(|e| DomainError::InvalidSaleTime {
            row,
            value: value.to_string(),
            error: e.to_string(),
        })
}

fn normalize_sale(row: usize, raw: &RawSale) -> Result<Sale, DomainError> {
    let date: Date = parse_sale_date(row, &raw.date)?;
    let time: Time = parse_sale_time(row, &raw.time)?;

    Ok(Sale {
        invoice_id: raw.invoice_id.clone(),
        branch_name: raw.branch.clone(),
        city: raw.city.clone(),
        customer_type: raw.customer_type.clone(),
        gender: raw.gender.clone(),
        product_line: raw.product_line.clone(),
        unit_price: raw.unit_price,
        quantity: raw.quantity,
        tax_5_percent: raw.tax_5_percent,
        total: raw.total,
        date,
        time,
        date_key: date_key(date),
        payment_method: raw.payment.clone(),
        cost_of_goods_sold: raw.cogs,
        gross_margin_percentage: raw.gross_margin_percentage,
        gross_income: raw.gross_income,
        rating: raw.rating,
    })
}

/// Renames raw sales to the warehouse vocabulary and parses dates and times.
///
/// Rows are numbered from 1 in error messages.
///
/// # Errors
///
/// Returns the first date or time parse failure.
pub fn normalize(raw: &[RawSale]) -> Result<Vec<Sale>, DomainError> {
    raw.iter()
        .enumerate()
        .map(|(idx, sale)| normalize_sale(idx + 1, sale))
        .collect()
}
