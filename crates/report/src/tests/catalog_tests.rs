// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::repo_sql_dir;
use crate::{QueryCatalog, ReportError, ReportQuery};

#[test]
fn test_catalog_loads_repository_queries() {
    let catalog = QueryCatalog::load(&repo_sql_dir()).unwrap();

    for query in ReportQuery::ALL {
        assert!(
            catalog.sql(query).to_uppercase().contains("SELECT"),
            "{query} should contain a SELECT"
        );
    }
}

#[test]
fn test_missing_query_file_is_reported_by_path() {
    let dir = tempfile::tempdir().unwrap();
    for query in [ReportQuery::MonthlySales, ReportQuery::TopProducts] {
        std::fs::write(dir.path().join(query.file_name()), "SELECT 1").unwrap();
    }

    let result = QueryCatalog::load(dir.path());

    match result {
        Err(ReportError::MissingQuery { path }) => {
            assert_eq!(path, dir.path().join("customer_spending.sql"));
        }
        other => panic!("expected MissingQuery, got {other:?}"),
    }
}

#[test]
fn test_chart_file_names() {
    assert_eq!(
        ReportQuery::MonthlySales.chart_file_name(),
        "monthly_sales_trend.png"
    );
    assert_eq!(ReportQuery::TopProducts.chart_file_name(), "top_products.png");
    assert_eq!(
        ReportQuery::CustomerSpending.chart_file_name(),
        "customer_spending_heatmap.png"
    );
    assert_eq!(
        ReportQuery::HourlySales.chart_file_name(),
        "hourly_sales_distribution.png"
    );
}
