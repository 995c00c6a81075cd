// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub type LoanResult<T> = Result<T, LoanError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoanError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },

    #[error("No records provided")]
    EmptyBatch,
}

impl LoanError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        LoanError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Prefixes the offending field or context with the record's position in a batch.
    pub fn for_record(self, index: usize, sample_no: &str) -> Self {
        let at = format!("record {} (sample {})", index + 1, sample_no);
        match self {
            LoanError::InvalidInput { field, reason } => LoanError::InvalidInput {
                field: format!("{}: {}", at, field),
                reason,
            },
            LoanError::DivisionByZero { context } => LoanError::DivisionByZero {
                context: format!("{}: {}", at, context),
            },
            LoanError::Overflow { context } => LoanError::Overflow {
                context: format!("{}: {}", at, context),
            },
            LoanError::EmptyBatch => LoanError::EmptyBatch,
        }
    }

    /// Client-side mistakes, as opposed to inputs that validate but cannot be computed.
    pub fn is_client_error(&self) -> bool {
        matches!(self, LoanError::InvalidInput { .. } | LoanError::EmptyBatch)
    }
}
