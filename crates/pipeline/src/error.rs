// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_report::ReportError;
use sales_dw_transform::TransformError;

/// The stages of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Extract,
    Transform,
    Load,
    Report,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Extract => "extract",
            Self::Transform => "transform",
            Self::Load => "load",
            Self::Report => "report",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that halt a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A stage that reports its outcome as a status failed. The cause has
    /// already been logged by the stage.
    #[error("Stage '{stage}' failed")]
    StageFailed { stage: Stage },

    #[error("Transformation failed: {0}")]
    Transform(#[from] TransformError),

    #[error("Report generation failed: {0}")]
    Report(#[from] ReportError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
