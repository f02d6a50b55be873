//! Ledger service for posting validation and resolution.
//!
//! Pure logic, no database. The repository layer supplies an account lookup
//! and persists whatever this service hands back.

use cashflow_shared::types::AccountId;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::resolution::resolve_account_ref;
use super::types::{CreateTransactionInput, ResolvedLineItem, TransactionTotals};
use super::validation::{serial_no, validate_balance, validate_line_items};
use crate::reference::EntityRef;

/// A posting that passed every check and is ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTransaction {
    /// Line items with serial numbers and canonical account ids.
    pub details: Vec<ResolvedLineItem>,
    /// Debit, credit and overall totals.
    pub totals: TransactionTotals,
}

/// Ledger service for transaction validation and resolution.
pub struct LedgerService;

impl LedgerService {
    /// Validates line items and their balance.
    ///
    /// Runs the field checks before the balance check, so an empty or
    /// malformed posting is reported before an unbalanced one.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if any line item is invalid or the totals differ
    /// by more than one cent.
    pub fn validate(input: &CreateTransactionInput) -> Result<TransactionTotals, LedgerError> {
        validate_line_items(&input.details)?;
        validate_balance(&input.details)
    }

    /// Resolves every line item's account and assigns serial numbers.
    ///
    /// Serial numbers follow input order starting at 1.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` for the first reference `lookup` cannot
    /// resolve.
    pub fn resolve<F>(
        input: &CreateTransactionInput,
        lookup: F,
    ) -> Result<Vec<ResolvedLineItem>, LedgerError>
    where
        F: Fn(&EntityRef) -> Option<AccountId>,
    {
        input
            .details
            .iter()
            .enumerate()
            .map(|(index, detail)| {
                let account_id = resolve_account_ref(&detail.account, &lookup)?;
                Ok(ResolvedLineItem {
                    serial_no: serial_no(index),
                    account_id,
                    description: detail.description.trim().to_string(),
                    amount: detail.amount,
                    entry_type: detail.entry_type,
                })
            })
            .collect()
    }

    /// Validates then resolves a posting.
    ///
    /// # Errors
    ///
    /// Returns the first `LedgerError` encountered.
    pub fn prepare<F>(
        input: &CreateTransactionInput,
        lookup: F,
    ) -> Result<PreparedTransaction, LedgerError>
    where
        F: Fn(&EntityRef) -> Option<AccountId>,
    {
        let totals = Self::validate(input)?;
        let details = Self::resolve(input, lookup)?;
        Ok(PreparedTransaction { details, totals })
    }

    /// Sums the amounts of resolved line items.
    #[must_use]
    pub fn total_amount(details: &[ResolvedLineItem]) -> Decimal {
        details.iter().map(|d| d.amount).sum()
    }
}
