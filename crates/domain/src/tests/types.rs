// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FactSale, StageStatus, UnmatchedPolicy, parse_iso_date};
use std::str::FromStr;
use time::{Date, Month};

fn create_test_fact() -> FactSale {
    FactSale {
        invoice_id: String::from("750-67-8428"),
        date_key: Some(20_190_105),
        time_key: Some(799),
        branch_key: Some(1),
        customer_key: Some(1),
        product_key: Some(1),
        payment_key: Some(1),
        unit_price: 74.69,
        quantity: 7,
        tax_5_percent: 26.1415,
        total: 548.9715,
        cost_of_goods_sold: 522.83,
        gross_margin_percentage: 4.761_904_762,
        gross_income: 26.1415,
        rating: 9.1,
    }
}

#[test]
fn test_unmatched_policy_defaults_to_null() {
    assert_eq!(UnmatchedPolicy::default(), UnmatchedPolicy::Null);
}

#[test]
fn test_unmatched_policy_parses_case_insensitively() {
    assert_eq!(
        UnmatchedPolicy::from_str("NULL").unwrap(),
        UnmatchedPolicy::Null
    );
    assert_eq!(
        UnmatchedPolicy::from_str(" drop ").unwrap(),
        UnmatchedPolicy::Drop
    );
    assert_eq!(
        UnmatchedPolicy::from_str("Reject").unwrap(),
        UnmatchedPolicy::Reject
    );
}

#[test]
fn test_unmatched_policy_rejects_unknown_name() {
    let result: Result<UnmatchedPolicy, DomainError> = UnmatchedPolicy::from_str("skip");
    assert!(matches!(
        result,
        Err(DomainError::InvalidUnmatchedPolicy(value)) if value == "skip"
    ));
}

#[test]
fn test_unmatched_policy_display_matches_config_name() {
    for policy in [
        UnmatchedPolicy::Null,
        UnmatchedPolicy::Drop,
        UnmatchedPolicy::Reject,
    ] {
        assert_eq!(UnmatchedPolicy::from_str(&policy.to_string()).unwrap(), policy);
    }
}

#[test]
fn test_fact_fully_resolved() {
    let fact: FactSale = create_test_fact();
    assert!(fact.is_fully_resolved());

    let mut missing_payment: FactSale = create_test_fact();
    missing_payment.payment_key = None;
    assert!(!missing_payment.is_fully_resolved());
}

#[test]
fn test_parse_iso_date() {
    let date: Date = parse_iso_date("2019-01-01").unwrap();
    assert_eq!(
        date,
        Date::from_calendar_date(2019, Month::January, 1).unwrap()
    );
}

#[test]
fn test_parse_iso_date_rejects_invalid_day() {
    assert!(matches!(
        parse_iso_date("2019-02-30"),
        Err(DomainError::DateParseError { .. })
    ));
}

#[test]
fn test_stage_status_codes() {
    assert_eq!(StageStatus::Succeeded.code(), 0);
    assert_eq!(StageStatus::Failed.code(), 1);
    assert!(StageStatus::Succeeded.is_success());
    assert!(!StageStatus::Failed.is_success());
}
