// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_domain::{DomainError, RawSale, Sale};
use time::{Date, Month, Time};

use super::create_raw_sale;
use crate::{date_key, normalize, parse_sale_date, parse_sale_time, read_raw_sales};

#[test]
fn test_normalize_renames_fields() {
    let raw: RawSale = create_raw_sale("750-67-8428", "A", "Yangon", "Ewallet", "1/5/2019", "13:08");
    let sales: Vec<Sale> = normalize(&[raw]).unwrap();

    assert_eq!(sales.len(), 1);
    let sale: &Sale = &sales[0];
    assert_eq!(sale.invoice_id, "750-67-8428");
    assert_eq!(sale.branch_name, "A");
    assert_eq!(sale.city, "Yangon");
    assert_eq!(sale.payment_method, "Ewallet");
    assert!((sale.cost_of_goods_sold - 522.83).abs() < f64::EPSILON);
    assert_eq!(sale.quantity, 7);
}

#[test]
fn test_normalize_parses_date_and_time() {
    let raw: RawSale = create_raw_sale("750-67-8428", "A", "Yangon", "Ewallet", "1/5/2019", "13:08");
    let sale: Sale = normalize(&[raw]).unwrap().remove(0);

    assert_eq!(
        sale.date,
        Date::from_calendar_date(2019, Month::January, 5).unwrap()
    );
    assert_eq!(sale.time, Time::from_hms(13, 8, 0).unwrap());
    assert_eq!(sale.date_key, 20_190_105);
}

#[test]
fn test_sale_date_accepts_zero_padding() {
    let padded: Date = parse_sale_date(1, "01/05/2019").unwrap();
    let unpadded: Date = parse_sale_date(1, "1/5/2019").unwrap();
    assert_eq!(padded, unpadded);
}

#[test]
fn test_sale_time_accepts_seconds() {
    assert_eq!(
        parse_sale_time(1, "9:05:00").unwrap(),
        Time::from_hms(9, 5, 0).unwrap()
    );
    assert_eq!(
        parse_sale_time(1, "9:05").unwrap(),
        Time::from_hms(9, 5, 0).unwrap()
    );
}

#[test]
fn test_date_key_is_yyyymmdd() {
    let date: Date = Date::from_calendar_date(2021, Month::December, 31).unwrap();
    assert_eq!(date_key(date), 20_211_231);
}

#[test]
fn test_invalid_date_reports_row() {
    let good: RawSale = create_raw_sale("1", "A", "Yangon", "Cash", "1/5/2019", "13:08");
    let bad: RawSale = create_raw_sale("2", "A", "Yangon", "Cash", "2019-01-05", "13:08");

    let result = normalize(&[good, bad]);
    assert!(matches!(
        result,
        Err(DomainError::InvalidSaleDate { row: 2, value, .. }) if value == "2019-01-05"
    ));
}

#[test]
fn test_invalid_time_is_rejected() {
    let bad: RawSale = create_raw_sale("1", "A", "Yangon", "Cash", "1/5/2019", "25:61");
    assert!(matches!(
        normalize(&[bad]),
        Err(DomainError::InvalidSaleTime { row: 1, .. })
    ));
}

#[test]
fn test_read_raw_sales_binds_columns_by_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("supermarket_sales.csv");
    std::fs::write(
        &path,
        "Invoice ID,Branch,City,Customer type,Gender,Product line,Unit price,Quantity,Tax 5%,Total,Date,Time,Payment,cogs,gross margin percentage,gross income,Rating\n\
         750-67-8428,A,Yangon,Member,Female,Health and beauty,74.69,7,26.1415,548.9715,1/5/2019,13:08,Ewallet,522.83,4.761904762,26.1415,9.1\n",
    )
    .unwrap();

    let raw: Vec<RawSale> = read_raw_sales(&path).unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].invoice_id, "750-67-8428");
    assert_eq!(raw[0].payment, "Ewallet");
    assert_eq!(raw[0].date, "1/5/2019");
}
