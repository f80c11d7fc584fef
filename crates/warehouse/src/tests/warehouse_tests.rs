// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_fact, create_test_star_schema};
use crate::{Warehouse, WarehouseError};
use sales_dw_domain::{DimBranch, StarSchema};

#[test]
fn test_replace_then_read_returns_same_schema() {
    let mut warehouse = Warehouse::in_memory().unwrap();
    let star = create_test_star_schema();

    warehouse.replace_star_schema(&star).unwrap();

    assert_eq!(warehouse.read_star_schema().unwrap(), star);
}

#[test]
fn test_replace_creates_all_indexes() {
    let mut warehouse = Warehouse::in_memory().unwrap();
    warehouse
        .replace_star_schema(&create_test_star_schema())
        .unwrap();

    let indexes = warehouse.list_indexes().unwrap();

    assert_eq!(
        indexes,
        vec![
            "idx_dim_branch_branch_key",
            "idx_dim_customer_customer_key",
            "idx_dim_date_date_key",
            "idx_dim_payment_payment_key",
            "idx_dim_product_product_key",
            "idx_dim_time_time_key",
            "idx_fact_sales_branch_key",
            "idx_fact_sales_customer_key",
            "idx_fact_sales_date_key",
            "idx_fact_sales_payment_key",
            "idx_fact_sales_product_key",
            "idx_fact_sales_time_key",
        ]
    );
}

#[test]
fn test_second_replace_discards_previous_rows() {
    let mut warehouse = Warehouse::in_memory().unwrap();
    warehouse
        .replace_star_schema(&create_test_star_schema())
        .unwrap();

    let mut smaller = create_test_star_schema();
    smaller.facts.truncate(1);
    smaller.branches.truncate(1);
    warehouse.replace_star_schema(&smaller).unwrap();

    assert_eq!(warehouse.facts().unwrap().len(), 1);
    assert_eq!(warehouse.branches().unwrap().len(), 1);
    assert_eq!(warehouse.list_indexes().unwrap().len(), 12);
}

#[test]
fn test_unresolved_fact_keys_round_trip_as_null() {
    let mut warehouse = Warehouse::in_memory().unwrap();
    let mut star = create_test_star_schema();
    star.facts.push(create_fact("101-17-6199", None, Some(1), None, 10.5));

    warehouse.replace_star_schema(&star).unwrap();

    let facts = warehouse.facts().unwrap();
    assert_eq!(facts.len(), 4);
    assert_eq!(facts[3].invoice_id, "101-17-6199");
    assert_eq!(facts[3].date_key, None);
    assert_eq!(facts[3].branch_key, None);
    assert_eq!(facts[3].time_key, Some(1));
}

#[test]
fn test_facts_keep_insertion_order() {
    let mut warehouse = Warehouse::in_memory().unwrap();
    warehouse
        .replace_star_schema(&create_test_star_schema())
        .unwrap();

    let ids: Vec<String> = warehouse
        .facts()
        .unwrap()
        .into_iter()
        .map(|f| f.invoice_id)
        .collect();

    assert_eq!(ids, vec!["750-67-8428", "226-31-3081", "631-41-3108"]);
}

#[test]
fn test_date_and_time_columns_survive_storage() {
    let mut warehouse = Warehouse::in_memory().unwrap();
    let star = create_test_star_schema();
    warehouse.replace_star_schema(&star).unwrap();

    let dates = warehouse.dates().unwrap();
    assert_eq!(dates[0].date, time::macros::date!(2019 - 01 - 05));
    assert!(dates[0].is_weekend);
    assert!(!dates[1].is_weekend);

    let times = warehouse.times().unwrap();
    assert_eq!(times[1].time, time::macros::time!(13:08));
    assert_eq!(times[1].am_pm, "PM");
}

#[test]
fn test_duplicate_dimension_key_keeps_previous_contents() {
    let mut warehouse = Warehouse::in_memory().unwrap();
    let star = create_test_star_schema();
    warehouse.replace_star_schema(&star).unwrap();

    let mut broken: StarSchema = create_test_star_schema();
    broken.branches.push(DimBranch {
        branch_key: 1,
        branch_name: String::from("C"),
        city: String::from("Naypyitaw"),
    });

    let result = warehouse.replace_star_schema(&broken);

    assert!(matches!(result, Err(WarehouseError::DatabaseError(_))));
    assert_eq!(warehouse.read_star_schema().unwrap(), star);
}

#[test]
fn test_empty_schema_loads_empty_tables() {
    let mut warehouse = Warehouse::in_memory().unwrap();

    warehouse.replace_star_schema(&StarSchema::default()).unwrap();

    assert_eq!(warehouse.read_star_schema().unwrap(), StarSchema::default());
}

#[test]
fn test_reading_before_any_load_fails() {
    let mut warehouse = Warehouse::in_memory().unwrap();

    assert!(warehouse.facts().is_err());
}

#[test]
fn test_open_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dw").join("sales_dw.db");

    let mut warehouse = Warehouse::open(&path).unwrap();
    warehouse
        .replace_star_schema(&create_test_star_schema())
        .unwrap();

    assert!(path.is_file());
}
