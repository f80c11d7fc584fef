// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fact table construction.
//!
//! Each sale is resolved against every dimension by its natural key. The
//! lookups are independent left joins: a sale with no matching dimension row
//! gets a `None` key, and the [`UnmatchedPolicy`] decides whether such a row
//! is kept, dropped, or rejected. If a dimension table contains the same
//! natural key twice, the first row wins.

use sales_dw_domain::{
    DimBranch, DimCustomer, DimDate, DimPayment, DimProduct, DimTime, DomainError, FactSale, Sale,
    Table, UnmatchedPolicy,
};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Borrowed view over the six dimension tables a fact table joins against.
#[derive(Debug, Clone, Copy)]
pub struct DimensionTables<'a> {
    pub branches: &'a [DimBranch],
    pub customers: &'a [DimCustomer],
    pub products: &'a [DimProduct],
    pub payments: &'a [DimPayment],
    pub dates: &'a [DimDate],
    pub times: &'a [DimTime],
}

/// Result of building the fact table.
#[derive(Debug, Clone, PartialEq)]
pub struct FactBuild {
    /// The fact rows, in sale order.
    pub facts: Vec<FactSale>,
    /// Sales with at least one unresolved dimension key.
    pub unmatched_rows: usize,
    /// Sales omitted under `UnmatchedPolicy::Drop`.
    pub dropped_rows: usize,
}

struct Lookups<'a> {
    branch: HashMap<(&'a str, &'a str), i64>,
    customer: HashMap<(&'a str, &'a str), i64>,
    product: HashMap<&'a str, i64>,
    payment: HashMap<&'a str, i64>,
    date: HashMap<i64, i64>,
    time: HashMap<(u8, u8), i64>,
}

impl<'a> Lookups<'a> {
    fn new(dims: DimensionTables<'a>) -> Self {
        let mut branch = HashMap::new();
        for row in dims.branches {
            branch
                .entry((row.branch_name.as_str(), row.city.as_str()))
                .or_insert(row.branch_key);
        }

        let mut customer = HashMap::new();
        for row in dims.customers {
            customer
                .entry((row.customer_type.as_str(), row.gender.as_str()))
                .or_insert(row.customer_key);
        }

        let mut product = HashMap::new();
        for row in dims.products {
            product
                .entry(row.product_line.as_str())
                .or_insert(row.product_key);
        }

        let mut payment = HashMap::new();
        for row in dims.payments {
            payment
                .entry(row.payment_method.as_str())
                .or_insert(row.payment_key);
        }

        let mut date = HashMap::new();
        for row in dims.dates {
            date.entry(row.date_key).or_insert(row.date_key);
        }

        let mut time = HashMap::new();
        for row in dims.times {
            time.entry((row.time.hour(), row.time.minute()))
                .or_insert(row.time_key);
        }

        Self {
            branch,
            customer,
            product,
            payment,
            date,
            time,
        }
    }

    fn resolve(&self, sale: &Sale) -> FactSale {
        FactSale {
            invoice_id: sale.invoice_id.clone(),
            date_key: self.date.get(&sale.date_key).copied(),
            time_key: self
                .time
                .get(&(sale.time.hour(), sale.time.minute()))
                .copied(),
            branch_key: self
                .branch
                .get(&(sale.branch_name.as_str(), sale.city.as_str()))
                .copied(),
            customer_key: self
                .customer
                .get(&(sale.customer_type.as_str(), sale.gender.as_str()))
                .copied(),
            product_key: self.product.get(sale.product_line.as_str()).copied(),
            payment_key: self.payment.get(sale.payment_method.as_str()).copied(),
            unit_price: sale.unit_price,
            quantity: sale.quantity,
            tax_5_percent: sale.tax_5_percent,
            total: sale.total,
            cost_of_goods_sold: sale.cost_of_goods_sold,
            gross_margin_percentage: sale.gross_margin_percentage,
            gross_income: sale.gross_income,
            rating: sale.rating,
        }
    }
}

/// Names the first dimension, in join order, that `fact` failed to resolve.
const fn first_unmatched(fact: &FactSale) -> Option<Table> {
    if fact.branch_key.is_none() {
        Some(Table::DimBranch)
    } else if fact.customer_key.is_none() {
        Some(Table::DimCustomer)
    } else if fact.product_key.is_none() {
        Some(Table::DimProduct)
    } else if fact.payment_key.is_none() {
        Some(Table::DimPayment)
    } else if fact.date_key.is_none() {
        Some(Table::DimDate)
    } else if fact.time_key.is_none() {
        Some(Table::DimTime)
    } else {
        None
    }
}

/// Joins `sales` against `dims` and projects the fact schema.
///
/// # Errors
///
/// Returns `DomainError::UnmatchedDimensionKey` for the first unresolved sale
/// when `policy` is `UnmatchedPolicy::Reject`.
pub fn build_fact(
    sales: &[Sale],
    dims: DimensionTables<'_>,
    policy: UnmatchedPolicy,
) -> Result<FactBuild, DomainError> {
    let lookups: Lookups<'_> = Lookups::new(dims);
    let mut facts: Vec<FactSale> = Vec::with_capacity(sales.len());
    let mut unmatched_rows: usize = 0;
    let mut dropped_rows: usize = 0;

    for sale in sales {
        let fact: FactSale = lookups.resolve(sale);

        if let Some(table) = first_unmatched(&fact) {
            unmatched_rows += 1;
            debug!(invoice_id = %fact.invoice_id, dimension = %table, "Unmatched dimension key");

            match policy {
                UnmatchedPolicy::Null => {}
                UnmatchedPolicy::Drop => {
                    dropped_rows += 1;
                    continue;
                }
                UnmatchedPolicy::Reject => {
                    return Err(DomainError::UnmatchedDimensionKey {
                        invoice_id: fact.invoice_id,
                        dimension: table.name(),
                    });
                }
            }
        }

        facts.push(fact);
    }

    if unmatched_rows > 0 {
        warn!(
            unmatched_rows,
            dropped_rows,
            policy = %policy,
            "Some sales did not resolve against every dimension"
        );
    }

    Ok(FactBuild {
        facts,
        unmatched_rows,
        dropped_rows,
    })
}
