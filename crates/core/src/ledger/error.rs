//! Ledger error types for posting validation.

use cashflow_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while validating or resolving a posting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Transaction has no line items.
    #[error("Transaction must have at least one detail")]
    NoDetails,

    /// Line item amount is negative.
    #[error("Detail {serial_no}: amount cannot be negative")]
    NegativeAmount {
        /// 1-based position of the line item.
        serial_no: i32,
    },

    /// Line item description is blank.
    #[error("Detail {serial_no}: description is required")]
    MissingDescription {
        /// 1-based position of the line item.
        serial_no: i32,
    },

    /// Debit and credit totals differ by more than the tolerance.
    #[error(
        "Total debits must equal total credits (debits: {total_debits}, credits: {total_credits})"
    )]
    UnbalancedTransaction {
        /// Sum of debit amounts.
        total_debits: Decimal,
        /// Sum of credit amounts.
        total_credits: Decimal,
    },

    /// An account reference did not resolve.
    #[error("Account \"{0}\" not found")]
    AccountNotFound(String),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoDetails => "NO_DETAILS",
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::MissingDescription { .. } => "MISSING_DESCRIPTION",
            Self::UnbalancedTransaction { .. } => "UNBALANCED_TRANSACTION",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::UnbalancedTransaction {
                total_debits,
                total_credits,
            } => Self::UnbalancedTransaction {
                total_debits,
                total_credits,
            },
            other => Self::Validation(other.to_string()),
        }
    }
}
