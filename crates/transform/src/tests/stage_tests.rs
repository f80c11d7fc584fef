// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_domain::{StarSchema, Table, UnmatchedPolicy, read_star_schema, write_csv};

use super::create_test_raw_sales;
use crate::{TransformConfig, TransformError, transform, transform_file};

#[test]
fn test_default_config_matches_fixed_calendar() {
    let config: TransformConfig = TransformConfig::default();
    assert_eq!(config.start_date, "2019-01-01");
    assert_eq!(config.end_date, "2021-12-31");
    assert_eq!(config.unmatched, UnmatchedPolicy::Null);
}

#[test]
fn test_transform_builds_every_table() {
    let schema: StarSchema = transform(&create_test_raw_sales(), &TransformConfig::default()).unwrap();

    assert_eq!(schema.branches.len(), 3);
    assert_eq!(schema.customers.len(), 4);
    assert_eq!(schema.products.len(), 3);
    assert_eq!(schema.payments.len(), 3);
    assert_eq!(schema.dates.len(), 1096);
    assert_eq!(schema.times.len(), 1440);
    assert_eq!(schema.facts.len(), 5);
}

#[test]
fn test_transform_with_invalid_range_leaves_date_keys_null() {
    let config: TransformConfig = TransformConfig {
        start_date: String::from("2021-12-31"),
        end_date: String::from("2019-01-01"),
        unmatched: UnmatchedPolicy::Null,
    };
    let schema: StarSchema = transform(&create_test_raw_sales(), &config).unwrap();

    assert!(schema.dates.is_empty());
    assert_eq!(schema.facts.len(), 5);
    assert!(schema.facts.iter().all(|f| f.date_key.is_none()));
}

#[test]
fn test_transform_file_stages_tables() {
    let dir = tempfile::tempdir().unwrap();
    let raw_path = dir.path().join("supermarket_sales.csv");
    let processed = dir.path().join("processed");
    write_csv(&raw_path, &create_test_raw_sales()).unwrap();

    let schema: StarSchema =
        transform_file(&raw_path, &processed, &TransformConfig::default()).unwrap();

    for table in Table::ALL {
        assert!(table.path_in(&processed).exists(), "{table} missing");
    }
    assert_eq!(read_star_schema(&processed).unwrap(), schema);
}

#[test]
fn test_transform_file_reports_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let result = transform_file(
        &dir.path().join("absent.csv"),
        &dir.path().join("processed"),
        &TransformConfig::default(),
    );
    assert!(matches!(result, Err(TransformError::Staging(_))));
}
