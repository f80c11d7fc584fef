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

mod catalog;
pub mod chart;
mod error;
pub mod render;
mod stage;

#[cfg(test)]
mod tests;

pub use catalog::{QueryCatalog, ReportQuery};
pub use chart::{
    BarChart, Heatmap, LineChart, Series, customer_spending_heatmap, hourly_sales_chart,
    monthly_sales_chart, top_products_chart,
};
pub use error::ReportError;
pub use render::{ChartRenderer, load_font};
pub use stage::{
    DEFAULT_CHARTS_DIR, DEFAULT_SQL_DIR, DEFAULT_WAREHOUSE_PATH, ReportConfig, ReportData,
    generate_reports, render_charts, run_queries,
};
