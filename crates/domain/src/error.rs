// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while interpreting sales records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A raw sale carries a date that does not match `M/D/YYYY`.
    InvalidSaleDate {
        /// The 1-based data row (excluding the header).
        row: usize,
        /// The offending value.
        value: String,
        /// The parser message.
        error: String,
    },
    /// A raw sale carries a time that does not match `H:MM`.
    InvalidSaleTime {
        /// The 1-based data row (excluding the header).
        row: usize,
        /// The offending value.
        value: String,
        /// The parser message.
        error: String,
    },
    /// Failed to parse an ISO date (`YYYY-MM-DD`).
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Unknown unmatched-key policy name.
    InvalidUnmatchedPolicy(String),
    /// A fact row could not be resolved against a dimension and the
    /// active policy rejects such rows.
    UnmatchedDimensionKey {
        /// The invoice that failed to resolve.
        invoice_id: String,
        /// The dimension table that had no matching row.
        dimension: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSaleDate { row, value, error } => {
                write!(f, "Row {row}: invalid sale date '{value}': {error}")
            }
            Self::InvalidSaleTime { row, value, error } => {
                write!(f, "Row {row}: invalid sale time '{value}': {error}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidUnmatchedPolicy(value) => {
                write!(
                    f,
                    "Invalid unmatched-key policy '{value}' (must be null, drop, or reject)"
                )
            }
            Self::UnmatchedDimensionKey {
                invoice_id,
                dimension,
            } => {
                write!(
                    f,
                    "Invoice '{invoice_id}' has no matching row in {dimension}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
