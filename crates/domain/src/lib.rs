// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
pub mod staging;
mod types;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use staging::{StagingError, Table, read_csv, read_star_schema, write_csv, write_star_schema};
pub use types::{
    DimBranch, DimCustomer, DimDate, DimPayment, DimProduct, DimTime, FactSale, RawSale, Sale,
    StageStatus, StarSchema, UnmatchedPolicy, parse_iso_date,
};
