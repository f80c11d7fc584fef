// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod warehouse_tests;

use sales_dw_domain::{
    DimBranch, DimCustomer, DimDate, DimPayment, DimProduct, DimTime, FactSale, StarSchema,
};

pub fn create_fact(
    invoice_id: &str,
    date_key: Option<i64>,
    time_key: Option<i64>,
    branch_key: Option<i64>,
    total: f64,
) -> FactSale {
    FactSale {
        invoice_id: invoice_id.to_string(),
        date_key,
        time_key,
        branch_key,
        customer_key: Some(1),
        product_key: Some(1),
        payment_key: Some(1),
        unit_price: total / 2.1,
        quantity: 2,
        tax_5_percent: total / 21.0,
        total,
        cost_of_goods_sold: total / 1.05,
        gross_margin_percentage: 4.761_904_762,
        gross_income: total / 21.0,
        rating: 7.5,
    }
}

/// Two branches, two days, two clock times and three sales.
pub fn create_test_star_schema() -> StarSchema {
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
            customer_type: String::from("Member"),
            gender: String::from("Female"),
        }],
        products: vec![DimProduct {
            product_key: 1,
            product_line: String::from("Health and beauty"),
        }],
        payments: vec![DimPayment {
            payment_key: 1,
            payment_method: String::from("Ewallet"),
        }],
        dates: vec![
            DimDate {
                date_key: 20_190_105,
                date: time::macros::date!(2019 - 01 - 05),
                year: 2019,
                quarter: 1,
                month: 1,
                month_name: String::from("January"),
                week: 1,
                day: 5,
                day_name: String::from("Saturday"),
                is_weekend: true,
            },
            DimDate {
                date_key: 20_190_308,
                date: time::macros::date!(2019 - 03 - 08),
                year: 2019,
                quarter: 1,
                month: 3,
                month_name: String::from("March"),
                week: 10,
                day: 8,
                day_name: String::from("Friday"),
                is_weekend: false,
            },
        ],
        times: vec![
            DimTime {
                time_key: 1,
                time: time::macros::time!(10:29),
                hour: 10,
                minute: 29,
                am_pm: String::from("AM"),
            },
            DimTime {
                time_key: 2,
                time: time::macros::time!(13:08),
                hour: 13,
                minute: 8,
                am_pm: String::from("PM"),
            },
        ],
        facts: vec![
            create_fact("750-67-8428", Some(20_190_105), Some(2), Some(1), 548.9715),
            create_fact("226-31-3081", Some(20_190_308), Some(1), Some(2), 80.22),
            create_fact("631-41-3108", Some(20_190_308), Some(2), Some(1), 340.5255),
        ],
    }
}
