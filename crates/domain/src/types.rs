// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Time};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(clock_time, Time, "[hour]:[minute]:[second]");

/// One transaction line exactly as it appears in the source CSV.
///
/// Fields are bound by header name, so extra columns in the file are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSale {
    #[serde(rename = "Invoice ID")]
    pub invoice_id: String,
    #[serde(rename = "Branch")]
    pub branch: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Customer type")]
    pub customer_type: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Product line")]
    pub product_line: String,
    #[serde(rename = "Unit price")]
    pub unit_price: f64,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "Tax 5%")]
    pub tax_5_percent: f64,
    #[serde(rename = "Total")]
    pub total: f64,
    /// `M/D/YYYY`, zero padding optional.
    #[serde(rename = "Date")]
    pub date: String,
    /// `H:MM`.
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Payment")]
    pub payment: String,
    #[serde(rename = "cogs")]
    pub cogs: f64,
    #[serde(rename = "gross margin percentage")]
    pub gross_margin_percentage: f64,
    #[serde(rename = "gross income")]
    pub gross_income: f64,
    #[serde(rename = "Rating")]
    pub rating: f64,
}

/// A raw sale renamed to the warehouse vocabulary with parsed date and time.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub invoice_id: String,
    pub branch_name: String,
    pub city: String,
    pub customer_type: String,
    pub gender: String,
    pub product_line: String,
    pub unit_price: f64,
    pub quantity: i64,
    pub tax_5_percent: f64,
    pub total: f64,
    pub date: Date,
    pub time: Time,
    /// `YYYYMMDD` as an integer.
    pub date_key: i64,
    pub payment_method: String,
    pub cost_of_goods_sold: f64,
    pub gross_margin_percentage: f64,
    pub gross_income: f64,
    pub rating: f64,
}

/// Branch dimension row, unique by `(branch_name, city)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimBranch {
    pub branch_key: i64,
    pub branch_name: String,
    pub city: String,
}

/// Customer dimension row, unique by `(customer_type, gender)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimCustomer {
    pub customer_key: i64,
    pub customer_type: String,
    pub gender: String,
}

/// Product dimension row, unique by `product_line`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimProduct {
    pub product_key: i64,
    pub product_line: String,
}

/// Payment dimension row, unique by `payment_method`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimPayment {
    pub payment_key: i64,
    pub payment_method: String,
}

/// Calendar day row of the date dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimDate {
    pub date_key: i64,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub year: i32,
    pub quarter: i32,
    pub month: i32,
    pub month_name: String,
    /// ISO 8601 week number.
    pub week: i32,
    pub day: i32,
    pub day_name: String,
    pub is_weekend: bool,
}

/// Minute-of-day row of the time dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimTime {
    pub time_key: i64,
    #[serde(with = "clock_time")]
    pub time: Time,
    pub hour: i32,
    pub minute: i32,
    pub am_pm: String,
}

/// One fact row per sale. Keys are `None` when the sale did not resolve
/// against the corresponding dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactSale {
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

impl FactSale {
    /// Returns whether every dimension key resolved.
    #[must_use]
    pub const fn is_fully_resolved(&self) -> bool {
        self.date_key.is_some()
            && self.time_key.is_some()
            && self.branch_key.is_some()
            && self.customer_key.is_some()
            && self.product_key.is_some()
            && self.payment_key.is_some()
    }
}

/// The six dimension tables and the fact table of one warehouse build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarSchema {
    pub branches: Vec<DimBranch>,
    pub customers: Vec<DimCustomer>,
    pub products: Vec<DimProduct>,
    pub payments: Vec<DimPayment>,
    pub dates: Vec<DimDate>,
    pub times: Vec<DimTime>,
    pub facts: Vec<FactSale>,
}

/// Outcome of a stage that reports failure as a status instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageStatus {
    Succeeded,
    Failed,
}

impl StageStatus {
    /// Process-style status code: 0 on success, 1 on failure.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Succeeded => 0,
            Self::Failed => 1,
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// What to do with a sale that fails to resolve against a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnmatchedPolicy {
    /// Keep the row and store a NULL key.
    #[default]
    Null,
    /// Omit the row from the fact table.
    Drop,
    /// Fail the transform.
    Reject,
}

impl UnmatchedPolicy {
    /// Converts this policy to its configuration name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Drop => "drop",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for UnmatchedPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "null" => Ok(Self::Null),
            "drop" => Ok(Self::Drop),
            "reject" => Ok(Self::Reject),
            _ => Err(DomainError::InvalidUnmatchedPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for UnmatchedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), format).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}
