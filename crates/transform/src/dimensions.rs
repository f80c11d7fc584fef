// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_domain::{
    DimBranch, DimCustomer, DimDate, DimPayment, DimProduct, DimTime, Sale, Table, parse_iso_date,
};
use time::{Date, Time, Weekday};
use tracing::warn;

use crate::normalize::date_key;
use crate::surrogate::build_dimension;

/// Branch dimension, unique by `(branch_name, city)`.
#[must_use]
pub fn build_branch_dimension(sales: &[Sale]) -> Vec<DimBranch> {
    build_dimension(Table::DimBranch, "branch_key", sales, |s| {
        (s.branch_name.clone(), s.city.clone())
    })
    .into_rows(|branch_key, (branch_name, city)| DimBranch {
        branch_key,
        branch_name,
        city,
    })
}

/// Customer dimension, unique by `(customer_type, gender)`.
#[must_use]
pub fn build_customer_dimension(sales: &[Sale]) -> Vec<DimCustomer> {
    build_dimension(Table::DimCustomer, "customer_key", sales, |s| {
        (s.customer_type.clone(), s.gender.clone())
    })
    .into_rows(|customer_key, (customer_type, gender)| DimCustomer {
        customer_key,
        customer_type,
        gender,
    })
}

/// Product dimension, unique by `product_line`.
#[must_use]
pub fn build_product_dimension(sales: &[Sale]) -> Vec<DimProduct> {
    build_dimension(Table::DimProduct, "product_key", sales, |s| {
        s.product_line.clone()
    })
    .into_rows(|product_key, product_line| DimProduct {
        product_key,
        product_line,
    })
}

/// Payment dimension, unique by `payment_method`.
#[must_use]
pub fn build_payment_dimension(sales: &[Sale]) -> Vec<DimPayment> {
    build_dimension(Table::DimPayment, "payment_key", sales, |s| {
        s.payment_method.clone()
    })
    .into_rows(|payment_key, payment_method| DimPayment {
        payment_key,
        payment_method,
    })
}

fn date_row(date: Date) -> DimDate {
    let month: u8 = u8::from(date.month());
    let weekday: Weekday = date.weekday();

    DimDate {
        date_key: date_key(date),
        date,
        year: date.year(),
        quarter: i32::from((month - 1) / 3 + 1),
        month: i32::from(month),
        month_name: date.month().to_string(),
        week: i32::from(date.iso_week()),
        day: i32::from(date.day()),
        day_name: weekday.to_string(),
        is_weekend: matches!(weekday, Weekday::Saturday | Weekday::Sunday),
    }
}

/// Builds one row per calendar day in `[start, end]`.
///
/// An inverted range yields an empty table.
#[must_use]
pub fn build_date_dimension(start: Date, end: Date) -> Vec<DimDate> {
    if start > end {
        warn!(%start, %end, "Date range is inverted; date dimension is empty");
        return Vec::new();
    }

    let mut rows: Vec<DimDate> = Vec::new();
    let mut day: Date = start;
    loop {
        rows.push(date_row(day));
        if day == end {
            break;
        }
        match day.next_day() {
            Some(next) => day = next,
            None => break,
        }
    }
    rows
}

/// Builds the date dimension from ISO `YYYY-MM-DD` bounds.
///
/// Unparsable bounds are logged and yield an empty table.
#[must_use]
pub fn date_dimension_from_strings(start: &str, end: &str) -> Vec<DimDate> {
    match (parse_iso_date(start), parse_iso_date(end)) {
        (Ok(start), Ok(end)) => build_date_dimension(start, end),
        (Err(e), _) | (_, Err(e)) => {
            warn!(error = %e, "Error generating date dimension");
            Vec::new()
        }
    }
}

/// Builds one row per minute of the day, keyed 1..=1440.
#[must_use]
pub fn build_time_dimension() -> Vec<DimTime> {
    (0_u8..24)
        .flat_map(|hour| (0_u8..60).map(move |minute| (hour, minute)))
        .filter_map(|(hour, minute)| Time::from_hms(hour, minute, 0).ok())
        .zip(1_i64..)
        .map(|(time, time_key)| DimTime {
            time_key,
            time,
            hour: i32::from(time.hour()),
            minute: i32::from(time.minute()),
            am_pm: String::from(if time.hour() < 12 { "AM" } else { "PM" }),
        })
        .collect()
}
