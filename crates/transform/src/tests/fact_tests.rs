// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_domain::{
    DimBranch, DimCustomer, DimDate, DimPayment, DimProduct, DimTime, DomainError, Sale,
    UnmatchedPolicy,
};
use std::collections::HashSet;

use super::{create_raw_sale, create_test_sales};
use crate::{
    DimensionTables, FactBuild, build_branch_dimension, build_customer_dimension, build_fact,
    build_payment_dimension, build_product_dimension, build_time_dimension,
    date_dimension_from_strings, normalize,
};

struct Dims {
    branches: Vec<DimBranch>,
    customers: Vec<DimCustomer>,
    products: Vec<DimProduct>,
    payments: Vec<DimPayment>,
    dates: Vec<DimDate>,
    times: Vec<DimTime>,
}

impl Dims {
    fn from_sales(sales: &[Sale]) -> Self {
        Self {
            branches: build_branch_dimension(sales),
            customers: build_customer_dimension(sales),
            products: build_product_dimension(sales),
            payments: build_payment_dimension(sales),
            dates: date_dimension_from_strings("2019-01-01", "2021-12-31"),
            times: build_time_dimension(),
        }
    }

    fn tables(&self) -> DimensionTables<'_> {
        DimensionTables {
            branches: &self.branches,
            customers: &self.customers,
            products: &self.products,
            payments: &self.payments,
            dates: &self.dates,
            times: &self.times,
        }
    }
}

/// Sales whose payment method ("Voucher") is absent from the payment dimension.
fn create_sales_with_unknown_payment() -> (Vec<Sale>, Dims) {
    let known: Vec<Sale> = create_test_sales();
    let dims: Dims = Dims::from_sales(&known);

    let mut sales: Vec<Sale> = known;
    sales.extend(
        normalize(&[create_raw_sale(
            "999-99-9999",
            "A",
            "Yangon",
            "Voucher",
            "2/2/2019",
            "11:11",
        )])
        .unwrap(),
    );
    (sales, dims)
}

#[test]
fn test_fact_preserves_cardinality() {
    let sales: Vec<Sale> = create_test_sales();
    let dims: Dims = Dims::from_sales(&sales);

    let build: FactBuild = build_fact(&sales, dims.tables(), UnmatchedPolicy::Null).unwrap();

    assert_eq!(build.facts.len(), sales.len());
    assert_eq!(build.unmatched_rows, 0);
    assert!(build.facts.iter().all(|f| f.is_fully_resolved()));
}

#[test]
fn test_fact_keys_reference_existing_dimension_rows() {
    let sales: Vec<Sale> = create_test_sales();
    let dims: Dims = Dims::from_sales(&sales);
    let build: FactBuild = build_fact(&sales, dims.tables(), UnmatchedPolicy::Null).unwrap();

    let branch_keys: HashSet<i64> = dims.branches.iter().map(|d| d.branch_key).collect();
    let customer_keys: HashSet<i64> = dims.customers.iter().map(|d| d.customer_key).collect();
    let product_keys: HashSet<i64> = dims.products.iter().map(|d| d.product_key).collect();
    let payment_keys: HashSet<i64> = dims.payments.iter().map(|d| d.payment_key).collect();
    let date_keys: HashSet<i64> = dims.dates.iter().map(|d| d.date_key).collect();
    let time_keys: HashSet<i64> = dims.times.iter().map(|d| d.time_key).collect();

    for fact in &build.facts {
        assert!(fact.branch_key.is_none_or(|k| branch_keys.contains(&k)));
        assert!(fact.customer_key.is_none_or(|k| customer_keys.contains(&k)));
        assert!(fact.product_key.is_none_or(|k| product_keys.contains(&k)));
        assert!(fact.payment_key.is_none_or(|k| payment_keys.contains(&k)));
        assert!(fact.date_key.is_none_or(|k| date_keys.contains(&k)));
        assert!(fact.time_key.is_none_or(|k| time_keys.contains(&k)));
    }
}

#[test]
fn test_fact_resolves_natural_keys() {
    let sales: Vec<Sale> = create_test_sales();
    let dims: Dims = Dims::from_sales(&sales);
    let build: FactBuild = build_fact(&sales, dims.tables(), UnmatchedPolicy::Null).unwrap();

    // 750-67-8428: branch A/Yangon, Ewallet, 1/5/2019 13:08.
    let first = &build.facts[0];
    assert_eq!(first.invoice_id, "750-67-8428");
    assert_eq!(first.branch_key, Some(1));
    assert_eq!(first.payment_key, Some(1));
    assert_eq!(first.date_key, Some(20_190_105));
    assert_eq!(first.time_key, Some(13 * 60 + 8 + 1));
    assert_eq!(first.quantity, 7);

    // 226-31-3081: branch C/Naypyitaw is the second distinct branch.
    assert_eq!(build.facts[1].branch_key, Some(2));
    assert_eq!(build.facts[1].customer_key, Some(2));
}

#[test]
fn test_unknown_payment_method_yields_null_key() {
    let (sales, dims) = create_sales_with_unknown_payment();
    let build: FactBuild = build_fact(&sales, dims.tables(), UnmatchedPolicy::Null).unwrap();

    assert_eq!(build.facts.len(), sales.len());
    assert_eq!(build.unmatched_rows, 1);
    assert_eq!(build.dropped_rows, 0);

    let orphan = build
        .facts
        .iter()
        .find(|f| f.invoice_id == "999-99-9999")
        .unwrap();
    assert_eq!(orphan.payment_key, None);
    assert_eq!(orphan.branch_key, Some(1));
}

#[test]
fn test_drop_policy_omits_unmatched_rows() {
    let (sales, dims) = create_sales_with_unknown_payment();
    let build: FactBuild = build_fact(&sales, dims.tables(), UnmatchedPolicy::Drop).unwrap();

    assert_eq!(build.facts.len(), sales.len() - 1);
    assert_eq!(build.dropped_rows, 1);
    assert!(build.facts.iter().all(|f| f.invoice_id != "999-99-9999"));
}

#[test]
fn test_reject_policy_names_missing_dimension() {
    let (sales, dims) = create_sales_with_unknown_payment();
    let result = build_fact(&sales, dims.tables(), UnmatchedPolicy::Reject);

    assert_eq!(
        result,
        Err(DomainError::UnmatchedDimensionKey {
            invoice_id: String::from("999-99-9999"),
            dimension: "dim_payment",
        })
    );
}

#[test]
fn test_sale_outside_date_range_has_null_date_key() {
    let sales: Vec<Sale> = normalize(&[create_raw_sale(
        "1", "A", "Yangon", "Cash", "6/1/2023", "09:00",
    )])
    .unwrap();
    let dims: Dims = Dims::from_sales(&sales);

    let build: FactBuild = build_fact(&sales, dims.tables(), UnmatchedPolicy::Null).unwrap();
    assert_eq!(build.facts[0].date_key, None);
    assert_eq!(build.facts[0].time_key, Some(9 * 60 + 1));
}

#[test]
fn test_duplicate_dimension_rows_do_not_duplicate_facts() {
    let sales: Vec<Sale> = create_test_sales();
    let mut dims: Dims = Dims::from_sales(&sales);
    let mut duplicate: DimPayment = dims.payments[0].clone();
    duplicate.payment_key = 99;
    dims.payments.push(duplicate);

    let build: FactBuild = build_fact(&sales, dims.tables(), UnmatchedPolicy::Null).unwrap();
    assert_eq!(build.facts.len(), sales.len());
    assert_eq!(build.facts[0].payment_key, Some(1));
}
