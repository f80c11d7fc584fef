// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_warehouse::{
    CustomerSpendingRow, HourlySalesRow, MonthlySalesRow, TopProductRow, Warehouse,
};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::catalog::{QueryCatalog, ReportQuery};
use crate::chart::{
    customer_spending_heatmap, hourly_sales_chart, monthly_sales_chart, top_products_chart,
};
use crate::error::ReportError;
use crate::render::ChartRenderer;

pub const DEFAULT_SQL_DIR: &str = "analysis/sql";
pub const DEFAULT_CHARTS_DIR: &str = "analysis/charts";
pub const DEFAULT_WAREHOUSE_PATH: &str = "data/dw/sales_dw.db";

/// Where the report stage reads queries and data and writes charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub sql_dir: PathBuf,
    pub charts_dir: PathBuf,
    pub warehouse_path: PathBuf,
    /// TrueType font for chart labels. Well-known system fonts are tried
    /// when unset.
    pub font_path: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sql_dir: PathBuf::from(DEFAULT_SQL_DIR),
            charts_dir: PathBuf::from(DEFAULT_CHARTS_DIR),
            warehouse_path: PathBuf::from(DEFAULT_WAREHOUSE_PATH),
            font_path: None,
        }
    }
}

/// Results of the four report queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportData {
    pub monthly_sales: Vec<MonthlySalesRow>,
    pub top_products: Vec<TopProductRow>,
    pub customer_spending: Vec<CustomerSpendingRow>,
    pub hourly_sales: Vec<HourlySalesRow>,
}

/// Runs every catalog query against the warehouse.
///
/// # Errors
///
/// Returns an error if any query fails.
pub fn run_queries(
    warehouse: &mut Warehouse,
    catalog: &QueryCatalog,
) -> Result<ReportData, ReportError> {
    let data = ReportData {
        monthly_sales: warehouse.monthly_sales(catalog.sql(ReportQuery::MonthlySales))?,
        top_products: warehouse.top_products(catalog.sql(ReportQuery::TopProducts))?,
        customer_spending: warehouse
            .customer_spending(catalog.sql(ReportQuery::CustomerSpending))?,
        hourly_sales: warehouse.hourly_sales(catalog.sql(ReportQuery::HourlySales))?,
    };

    info!(
        monthly_sales = data.monthly_sales.len(),
        top_products = data.top_products.len(),
        customer_spending = data.customer_spending.len(),
        hourly_sales = data.hourly_sales.len(),
        "Report queries completed"
    );
    Ok(data)
}

/// Renders the four charts into `charts_dir`, creating it if needed.
///
/// Returns the written chart paths in query order.
///
/// # Errors
///
/// Returns an error if the directory or a chart cannot be written.
pub fn render_charts(
    data: &ReportData,
    renderer: &ChartRenderer,
    charts_dir: &Path,
) -> Result<Vec<PathBuf>, ReportError> {
    std::fs::create_dir_all(charts_dir).map_err(|e| ReportError::io(charts_dir, e))?;
    let chart_path = |query: ReportQuery| charts_dir.join(query.chart_file_name());

    let monthly: PathBuf = chart_path(ReportQuery::MonthlySales);
    renderer.render_line_chart(&monthly_sales_chart(&data.monthly_sales), &monthly)?;

    let products: PathBuf = chart_path(ReportQuery::TopProducts);
    renderer.render_bar_chart(&top_products_chart(&data.top_products), &products)?;

    let spending: PathBuf = chart_path(ReportQuery::CustomerSpending);
    renderer.render_heatmap(&customer_spending_heatmap(&data.customer_spending), &spending)?;

    let hourly: PathBuf = chart_path(ReportQuery::HourlySales);
    renderer.render_line_chart(&hourly_sales_chart(&data.hourly_sales), &hourly)?;

    Ok(vec![monthly, products, spending, hourly])
}

/// Runs the report stage end to end.
///
/// # Errors
///
/// Returns an error if a query file or the warehouse is missing, a query
/// fails, or a chart cannot be written.
pub fn generate_reports(config: &ReportConfig) -> Result<Vec<PathBuf>, ReportError> {
    let catalog = QueryCatalog::load(&config.sql_dir)?;

    if !config.warehouse_path.is_file() {
        return Err(ReportError::MissingWarehouse {
            path: config.warehouse_path.clone(),
        });
    }
    let mut warehouse = Warehouse::open(&config.warehouse_path)?;
    let data: ReportData = run_queries(&mut warehouse, &catalog)?;

    let renderer = ChartRenderer::discover(config.font_path.as_deref());
    let charts: Vec<PathBuf> = render_charts(&data, &renderer, &config.charts_dir)?;

    info!(
        charts_dir = %config.charts_dir.display(),
        charts = charts.len(),
        "Charts saved"
    );
    Ok(charts)
}
