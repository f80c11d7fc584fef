// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use color_eyre::Result;
use sales_dw::{Args, Command, PipelineConfig, init_logging, run_all, run_etl, run_report};
use tracing::info;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    let config: PipelineConfig = args.config();

    init_logging(&config.log_dir, args.log_level())?;
    info!(command = ?args.command(), "Initializing sales warehouse pipeline");

    match args.command() {
        Command::Etl => {
            run_etl(&config)?;
        }
        Command::Report => {
            run_report(&config)?;
        }
        Command::All => {
            run_all(&config)?;
        }
    }

    Ok(())
}
