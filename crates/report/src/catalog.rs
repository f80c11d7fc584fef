// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ReportError;

/// The four canned report queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportQuery {
    MonthlySales,
    TopProducts,
    CustomerSpending,
    HourlySales,
}

impl ReportQuery {
    pub const ALL: [Self; 4] = [
        Self::MonthlySales,
        Self::TopProducts,
        Self::CustomerSpending,
        Self::HourlySales,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MonthlySales => "monthly_sales",
            Self::TopProducts => "top_products",
            Self::CustomerSpending => "customer_spending",
            Self::HourlySales => "hourly_sales",
        }
    }

    /// The query's file name inside the SQL directory.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.sql", self.name())
    }

    /// The chart file this query is rendered to.
    #[must_use]
    pub const fn chart_file_name(self) -> &'static str {
        match self {
            Self::MonthlySales => "monthly_sales_trend.png",
            Self::TopProducts => "top_products.png",
            Self::CustomerSpending => "customer_spending_heatmap.png",
            Self::HourlySales => "hourly_sales_distribution.png",
        }
    }
}

impl std::fmt::Display for ReportQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// SQL text of every report query, read from one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCatalog {
    monthly_sales: String,
    top_products: String,
    customer_spending: String,
    hourly_sales: String,
}

impl QueryCatalog {
    /// Reads all four query files from `sql_dir`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MissingQuery` if a file does not exist, or an
    /// I/O error if one cannot be read.
    pub fn load(sql_dir: &Path) -> Result<Self, ReportError> {
        Ok(Self {
            monthly_sales: read_query(sql_dir, ReportQuery::MonthlySales)?,
            top_products: read_query(sql_dir, ReportQuery::TopProducts)?,
            customer_spending: read_query(sql_dir, ReportQuery::CustomerSpending)?,
            hourly_sales: read_query(sql_dir, ReportQuery::HourlySales)?,
        })
    }

    #[must_use]
    pub fn sql(&self, query: ReportQuery) -> &str {
        match query {
            ReportQuery::MonthlySales => &self.monthly_sales,
            ReportQuery::TopProducts => &self.top_products,
            ReportQuery::CustomerSpending => &self.customer_spending,
            ReportQuery::HourlySales => &self.hourly_sales,
        }
    }
}

fn read_query(sql_dir: &Path, query: ReportQuery) -> Result<String, ReportError> {
    let path: PathBuf = sql_dir.join(query.file_name());
    match std::fs::read_to_string(&path) {
        Ok(sql) => {
            debug!(query = query.name(), path = %path.display(), "Read report query");
            Ok(sql)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ReportError::MissingQuery { path }),
        Err(e) => Err(ReportError::io(&path, e)),
    }
}
