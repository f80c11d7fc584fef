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

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod load;
mod mutations;
mod queries;
pub mod schema;
mod warehouse;

#[cfg(test)]
mod tests;

pub use data_models::{CustomerSpendingRow, HourlySalesRow, MonthlySalesRow, TopProductRow};
pub use error::WarehouseError;
pub use load::{load_data_to_dw, try_load};
pub use warehouse::Warehouse;
