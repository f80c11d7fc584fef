// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Chart models built from query results.
//!
//! Query rows arrive in long form (category, series, value). Each builder
//! pivots them into a dense grid: categories and series are sorted, and a
//! combination absent from the result is `None`. Repeated combinations are
//! summed.

use sales_dw_warehouse::{CustomerSpendingRow, HourlySalesRow, MonthlySalesRow, TopProductRow};
use std::collections::{BTreeMap, BTreeSet};

/// One named series of values, aligned with the chart's categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

/// Bars grouped by category, one bar per series within each group.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub groups: Vec<String>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    /// `cells[row][column]`.
    pub cells: Vec<Vec<Option<f64>>>,
}

impl Heatmap {
    /// Smallest and largest present cell value.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .fold(None, |range, &v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

struct Pivot<K> {
    categories: Vec<K>,
    series: Vec<Series>,
}

fn pivot<K: Ord + Clone>(points: impl IntoIterator<Item = (K, String, f64)>) -> Pivot<K> {
    let mut cells: BTreeMap<(String, K), f64> = BTreeMap::new();
    let mut categories: BTreeSet<K> = BTreeSet::new();
    let mut names: BTreeSet<String> = BTreeSet::new();

    for (category, name, value) in points {
        categories.insert(category.clone());
        names.insert(name.clone());
        *cells.entry((name, category)).or_insert(0.0) += value;
    }

    let categories: Vec<K> = categories.into_iter().collect();
    let series: Vec<Series> = names
        .into_iter()
        .map(|name| {
            let values: Vec<Option<f64>> = categories
                .iter()
                .map(|category| cells.get(&(name.clone(), category.clone())).copied())
                .collect();
            Series { name, values }
        })
        .collect();

    Pivot { categories, series }
}

/// Monthly sales trend, one line per branch.
#[must_use]
pub fn monthly_sales_chart(rows: &[MonthlySalesRow]) -> LineChart {
    let pivot = pivot(
        rows.iter()
            .map(|r| (r.month.clone(), r.branch_name.clone(), r.monthly_sales)),
    );

    LineChart {
        title: String::from("Monthly Sales Trend by Branch"),
        x_label: String::from("Month"),
        y_label: String::from("Total Sales"),
        legend_title: String::from("Branch"),
        categories: pivot.categories,
        series: pivot.series,
    }
}

/// Top product lines, grouped by product line with one bar per branch.
#[must_use]
pub fn top_products_chart(rows: &[TopProductRow]) -> BarChart {
    let pivot = pivot(
        rows.iter()
            .map(|r| (r.product_line.clone(), r.branch_name.clone(), r.total_sales)),
    );

    BarChart {
        title: String::from("Top 5 Products by Sales per Branch"),
        x_label: String::from("Product Line"),
        y_label: String::from("Total Sales"),
        legend_title: String::from("Branch"),
        groups: pivot.categories,
        series: pivot.series,
    }
}

/// Average spending with genders as rows and payment methods as columns.
#[must_use]
pub fn customer_spending_heatmap(rows: &[CustomerSpendingRow]) -> Heatmap {
    let pivot = pivot(
        rows.iter()
            .map(|r| (r.payment_method.clone(), r.gender.clone(), r.avg_spending)),
    );

    Heatmap {
        title: String::from("Average Customer Spending by Gender and Payment Type"),
        x_label: String::from("Payment Type"),
        y_label: String::from("Gender"),
        rows: pivot.series.iter().map(|s| s.name.clone()).collect(),
        columns: pivot.categories,
        cells: pivot.series.into_iter().map(|s| s.values).collect(),
    }
}

/// Hourly sales, one line per branch over the hours present in the data.
#[must_use]
pub fn hourly_sales_chart(rows: &[HourlySalesRow]) -> LineChart {
    let pivot = pivot(
        rows.iter()
            .map(|r| (r.hour, r.branch_name.clone(), r.hourly_sales)),
    );

    LineChart {
        title: String::from("Hourly Sales Distribution by Branch"),
        x_label: String::from("Hour of Day"),
        y_label: String::from("Total Sales"),
        legend_title: String::from("Branch"),
        categories: pivot.categories.iter().map(ToString::to_string).collect(),
        series: pivot.series,
    }
}
