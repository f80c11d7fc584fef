// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::{PipelineConfig, SourceConfig};
use std::path::{Path, PathBuf};

pub const RAW_HEADER: &str = "Invoice ID,Branch,City,Customer type,Gender,Product line,\
Unit price,Quantity,Tax 5%,Total,Date,Time,Payment,cogs,gross margin percentage,\
gross income,Rating";

/// Six sales across three branches and three payment methods.
pub const RAW_ROWS: [&str; 6] = [
    "750-67-8428,A,Yangon,Member,Female,Health and beauty,74.69,7,26.1415,548.9715,1/5/2019,13:08,Ewallet,522.83,4.761904762,26.1415,9.1",
    "226-31-3081,C,Naypyitaw,Normal,Female,Electronic accessories,15.28,5,3.82,80.22,3/8/2019,10:29,Cash,76.4,4.761904762,3.82,9.6",
    "631-41-3108,A,Yangon,Normal,Male,Home and lifestyle,46.33,7,16.2155,340.5255,3/3/2019,13:23,Credit card,324.31,4.761904762,16.2155,7.4",
    "123-19-1176,A,Yangon,Member,Male,Health and beauty,58.22,8,23.288,489.048,1/27/2019,20:33,Ewallet,465.76,4.761904762,23.288,8.4",
    "373-73-7910,A,Yangon,Normal,Male,Sports and travel,86.31,7,30.2085,634.3785,2/8/2019,10:37,Ewallet,604.17,4.761904762,30.2085,5.3",
    "699-14-3026,C,Naypyitaw,Normal,Male,Electronic accessories,85.39,7,29.8865,627.6165,3/25/2019,18:30,Ewallet,597.73,4.761904762,29.8865,4.1",
];

pub fn raw_csv(rows: &[&str]) -> String {
    let mut csv = String::from(RAW_HEADER);
    csv.push('\n');
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    csv
}

/// The report queries shipped with the repository.
pub fn repo_sql_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("analysis")
        .join("sql")
}

/// A configuration rooted at `root`, reading the dataset from
/// `root/source/supermarket_sales.csv`.
pub fn local_config(root: &Path, csv: &str) -> PipelineConfig {
    let source_dir: PathBuf = root.join("source");
    std::fs::create_dir_all(&source_dir).unwrap();
    std::fs::write(source_dir.join("supermarket_sales.csv"), csv).unwrap();

    PipelineConfig {
        source: SourceConfig::LocalDir(source_dir),
        raw_dir: root.join("data").join("raw"),
        cache_dir: root.join("data").join("cache"),
        processed_dir: root.join("data").join("processed"),
        warehouse_path: root.join("data").join("dw").join("sales_dw.db"),
        sql_dir: repo_sql_dir(),
        charts_dir: root.join("analysis").join("charts"),
        log_dir: root.join("logs"),
        ..PipelineConfig::default()
    }
}
