// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sales_dw_domain::{DomainError, StagingError};

/// Errors raised by the transform stage.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// Reading raw sales or writing staged tables failed.
    #[error(transparent)]
    Staging(#[from] StagingError),
    /// A sale could not be interpreted or resolved.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
