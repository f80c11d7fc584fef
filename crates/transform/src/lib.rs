// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Star-schema construction for the supermarket sales warehouse.
//!
//! Raw sales are normalized, reduced to four entity dimensions with
//! surrogate keys, paired with generated date and time dimensions, and
//! joined into a fact table. The stage is pure apart from
//! [`transform_file`], which reads the raw CSV and stages the result.

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

mod dimensions;
mod error;
mod fact;
mod normalize;
mod stage;
mod surrogate;

#[cfg(test)]
mod tests;

pub use dimensions::{
    build_branch_dimension, build_customer_dimension, build_date_dimension,
    build_payment_dimension, build_product_dimension, build_time_dimension,
    date_dimension_from_strings,
};
pub use error::TransformError;
pub use fact::{DimensionTables, FactBuild, build_fact};
pub use normalize::{date_key, normalize, parse_sale_date, parse_sale_time, read_raw_sales};
pub use stage::{DEFAULT_END_DATE, DEFAULT_START_DATE, TransformConfig, transform, transform_file};
pub use surrogate::{Dimension, SurrogateKeys, build_dimension};
