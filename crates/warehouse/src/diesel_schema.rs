// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

// Tables are created by `schema::create_tables`; keep both in sync.

diesel::table! {
    dim_branch (branch_key) {
        branch_key -> BigInt,
        branch_name -> Text,
        city -> Text,
    }
}

diesel::table! {
    dim_customer (customer_key) {
        customer_key -> BigInt,
        customer_type -> Text,
        gender -> Text,
    }
}

diesel::table! {
    dim_product (product_key) {
        product_key -> BigInt,
        product_line -> Text,
    }
}

diesel::table! {
    dim_payment (payment_key) {
        payment_key -> BigInt,
        payment_method -> Text,
    }
}

diesel::table! {
    dim_date (date_key) {
        date_key -> BigInt,
        date -> Text,
        year -> Integer,
        quarter -> Integer,
        month -> Integer,
        month_name -> Text,
        week -> Integer,
        day -> Integer,
        day_name -> Text,
        is_weekend -> Integer,
    }
}

diesel::table! {
    dim_time (time_key) {
        time_key -> BigInt,
        time -> Text,
        hour -> Integer,
        minute -> Integer,
        am_pm -> Text,
    }
}

diesel::table! {
    fact_sales (invoice_id) {
        invoice_id -> Text,
        date_key -> Nullable<BigInt>,
        time_key -> Nullable<BigInt>,
        branch_key -> Nullable<BigInt>,
        customer_key -> Nullable<BigInt>,
        product_key -> Nullable<BigInt>,
        payment_key -> Nullable<BigInt>,
        unit_price -> Double,
        quantity -> BigInt,
        tax_5_percent -> Double,
        total -> Double,
        cost_of_goods_sold -> Double,
        gross_margin_percentage -> Double,
        gross_income -> Double,
        rating -> Double,
    }
}
