// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stage orchestration.
//!
//! Extract → Transform → Load runs strictly in order. Any failed stage halts
//! the run; nothing is retried and nothing already written is undone.

use sales_dw_domain::{StageStatus, StarSchema};
use sales_dw_extract::{DatasetSource, extract_data};
use sales_dw_report::generate_reports;
use sales_dw_transform::transform_file;
use sales_dw_warehouse::load_data_to_dw;
use std::path::PathBuf;
use tracing::{error, info};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Stage};

/// What an ETL run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtlSummary {
    pub raw_path: PathBuf,
    pub warehouse_path: PathBuf,
    pub fact_rows: usize,
    /// Fact rows with at least one unresolved dimension key.
    pub unresolved_rows: usize,
}

fn require(stage: Stage, status: StageStatus) -> Result<(), PipelineError> {
    if status.is_success() {
        Ok(())
    } else {
        error!(%stage, code = status.code(), "Stage failed");
        Err(PipelineError::StageFailed { stage })
    }
}

fn extract(config: &PipelineConfig) -> Result<PathBuf, PipelineError> {
    info!("PHASE 1: Data Extraction started.");

    let source: Box<dyn DatasetSource> = config.dataset_source().map_err(|e| {
        error!(category = e.category(), error = %e, "Extraction failed");
        PipelineError::StageFailed {
            stage: Stage::Extract,
        }
    })?;
    require(
        Stage::Extract,
        extract_data(source.as_ref(), &config.extract_request()),
    )?;

    info!("Data extraction completed successfully.");
    Ok(config.raw_path())
}

fn transform(config: &PipelineConfig) -> Result<StarSchema, PipelineError> {
    info!("PHASE 2: Data Transformation started.");

    let star: StarSchema = transform_file(
        &config.raw_path(),
        &config.processed_dir,
        &config.transform_config(),
    )?;

    info!(
        processed_dir = %config.processed_dir.display(),
        "Data transformation completed successfully."
    );
    Ok(star)
}

fn load(config: &PipelineConfig) -> Result<(), PipelineError> {
    info!("PHASE 3: Data Loading started.");
    require(
        Stage::Load,
        load_data_to_dw(&config.processed_dir, &config.warehouse_path),
    )?;
    info!("Data loading completed successfully.");
    Ok(())
}

/// Runs Extract, Transform and Load.
///
/// # Errors
///
/// Returns `PipelineError::StageFailed` if extraction or loading fails, or
/// the transform error if transformation fails.
pub fn run_etl(config: &PipelineConfig) -> Result<EtlSummary, PipelineError> {
    info!("Starting ETL process.");

    let result = extract(config).and_then(|raw_path| {
        let star: StarSchema = transform(config)?;
        load(config)?;
        Ok(EtlSummary {
            raw_path,
            warehouse_path: config.warehouse_path.clone(),
            fact_rows: star.facts.len(),
            unresolved_rows: star.facts.iter().filter(|f| !f.is_fully_resolved()).count(),
        })
    });

    match &result {
        Ok(summary) => info!(
            fact_rows = summary.fact_rows,
            unresolved_rows = summary.unresolved_rows,
            "ETL process finished."
        ),
        Err(e) => error!(error = %e, "An error occurred during ETL process"),
    }
    result
}

/// Runs the report queries and renders the charts.
///
/// # Errors
///
/// Returns the report error if a query file or the warehouse is missing, a
/// query fails, or a chart cannot be written.
pub fn run_report(config: &PipelineConfig) -> Result<Vec<PathBuf>, PipelineError> {
    info!("PHASE 4: Report Generation started.");
    let charts: Vec<PathBuf> = generate_reports(&config.report_config()).inspect_err(|e| {
        error!(error = %e, "Report generation failed");
    })?;
    info!(charts_dir = %config.charts_dir.display(), "Charts saved.");
    Ok(charts)
}

/// Runs the ETL stages and then the report.
///
/// # Errors
///
/// Returns the first stage error.
pub fn run_all(config: &PipelineConfig) -> Result<(EtlSummary, Vec<PathBuf>), PipelineError> {
    let summary: EtlSummary = run_etl(config)?;
    let charts: Vec<PathBuf> = run_report(config)?;
    Ok((summary, charts))
}
