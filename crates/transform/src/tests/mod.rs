// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod fact_tests;
mod normalize_tests;
mod stage_tests;

use sales_dw_domain::{RawSale, Sale};

use crate::normalize;

/// Creates a raw sale with fixed measures for the given attributes.
pub fn create_raw_sale(
    invoice_id: &str,
    branch: &str,
    city: &str,
    payment: &str,
    date: &str,
    time: &str,
) -> RawSale {
    RawSale {
        invoice_id: String::from(invoice_id),
        branch: String::from(branch),
        city: String::from(city),
        customer_type: String::from("Member"),
        gender: String::from("Female"),
        product_line: String::from("Health and beauty"),
        unit_price: 74.69,
        quantity: 7,
        tax_5_percent: 26.1415,
        total: 548.9715,
        date: String::from(date),
        time: String::from(time),
        payment: String::from(payment),
        cogs: 522.83,
        gross_margin_percentage: 4.761_904_762,
        gross_income: 26.1415,
        rating: 9.1,
    }
}

/// A small, varied set of raw sales.
pub fn create_test_raw_sales() -> Vec<RawSale> {
    let mut sales: Vec<RawSale> = vec![
        create_raw_sale("750-67-8428", "A", "Yangon", "Ewallet", "1/5/2019", "13:08"),
        create_raw_sale("226-31-3081", "C", "Naypyitaw", "Cash", "3/8/2019", "10:29"),
        create_raw_sale("631-41-3108", "A", "Yangon", "Credit card", "3/3/2019", "13:23"),
        create_raw_sale("123-19-1176", "A", "Yangon", "Ewallet", "1/27/2019", "20:33"),
        create_raw_sale("373-73-7910", "B", "Mandalay", "Ewallet", "2/8/2019", "10:37"),
    ];
    sales[1].customer_type = String::from("Normal");
    sales[1].gender = String::from("Male");
    sales[1].product_line = String::from("Electronic accessories");
    sales[3].gender = String::from("Male");
    sales[4].customer_type = String::from("Normal");
    sales[4].product_line = String::from("Sports and travel");
    sales
}

/// The test raw sales, normalized.
pub fn create_test_sales() -> Vec<Sale> {
    normalize(&create_test_raw_sales()).unwrap()
}
