// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod catalog_tests;

use sales_dw_domain::{
    DimBranch, DimCustomer, DimDate, DimPayment, DimProduct, DimTime, FactSale, StarSchema,
};
use std::path::PathBuf;

/// The query files shipped with the repository.
pub fn repo_sql_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("analysis")
        .join("sql")
}

fn fact(
    invoice_id: &str,
    date_key: i64,
    time_key: i64,
    branch_key: i64,
    product_key: i64,
    total: f64,
) -> FactSale {
    FactSale {
        invoice_id: invoice_id.to_string(),
        date_key: Some(date_key),
        time_key: Some(time_key),
        branch_key: Some(branch_key),
        customer_key: Some(1),
        product_key: Some(product_key),
        payment_key: Some(1),
        unit_price: total,
        quantity: 1,
        tax_5_percent: total / 21.0,
        total,
        cost_of_goods_sold: total / 1.05,
        gross_margin_percentage: 4.761_904_762,
        gross_income: total / 21.0,
        rating: 8.0,
    }
}

/// Two branches, two product lines, sales on two days at two hours.
pub fn create_report_star_schema() -> StarSchema {
    let date = |date_key: i64, date: time::Date, day_name: &str| DimDate {
        date_key,
        date,
        year: date.year(),
        quarter: 1,
        month: i32::from(u8::from(date.month())),
        month_name: date.month().to_string(),
        week: i32::from(date.iso_week()),
        day: i32::from(date.day()),
        day_name: day_name.to_string(),
        is_weekend: false,
    };

    StarSchema {
        branches: vec![
            DimBranch {
                branch_key: 1,
                branch_name: String::from("A"),
                city: String::from("Yangon"),
            },
            DimBranch {
                branch_key: 2,
                branch_name: String::from("B"),
                city: String::from("Mandalay"),
            },
        ],
        customers: vec![DimCustomer {
            customer_key: 1,
            customer_type: String::from("Normal"),
            gender: String::from("Male"),
        }],
        products: vec![
            DimProduct {
                product_key: 1,
                product_line: String::from("Food and beverages"),
            },
            DimProduct {
                product_key: 2,
                product_line: String::from("Sports and travel"),
            },
        ],
        payments: vec![DimPayment {
            payment_key: 1,
            payment_method: String::from("Cash"),
        }],
        dates: vec![
            date(20_190_115, time::macros::date!(2019 - 01 - 15), "Tuesday"),
            date(20_190_212, time::macros::date!(2019 - 02 - 12), "Tuesday"),
        ],
        times: vec![
            DimTime {
                time_key: 1,
                time: time::macros::time!(09:15),
                hour: 9,
                minute: 15,
                am_pm: String::from("AM"),
            },
            DimTime {
                time_key: 2,
                time: time::macros::time!(19:45),
                hour: 19,
                minute: 45,
                am_pm: String::from("PM"),
            },
        ],
        facts: vec![
            fact("1", 20_190_115, 1, 1, 1, 100.0),
            fact("2", 20_190_115, 2, 1, 2, 50.0),
            fact("3", 20_190_212, 1, 2, 1, 75.0),
            fact("4", 20_190_212, 2, 1, 1, 25.0),
        ],
    }
}
