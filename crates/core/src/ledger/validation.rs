//! Business rule validation for postings.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{EntryType, LineItemInput, TransactionTotals};

/// Converts a 0-based list index into a 1-based serial number.
///
/// Saturates at `i32::MAX`; no realistic posting gets there.
#[must_use]
pub fn serial_no(index: usize) -> i32 {
    i32::try_from(index).map_or(i32::MAX, |i| i.saturating_add(1))
}

/// Checks each line item's own fields.
///
/// # Errors
///
/// Returns the first offending line item as `NegativeAmount` or
/// `MissingDescription`, or `NoDetails` if the list is empty.
pub fn validate_line_items(details: &[LineItemInput]) -> Result<(), LedgerError> {
    if details.is_empty() {
        return Err(LedgerError::NoDetails);
    }

    for (index, detail) in details.iter().enumerate() {
        if detail.amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount {
                serial_no: serial_no(index),
            });
        }
        if detail.description.trim().is_empty() {
            return Err(LedgerError::MissingDescription {
                serial_no: serial_no(index),
            });
        }
    }

    Ok(())
}

/// Sums debits, credits and the overall amount.
#[must_use]
pub fn calculate_totals(details: &[LineItemInput]) -> TransactionTotals {
    let mut total_debits = Decimal::ZERO;
    let mut total_credits = Decimal::ZERO;

    for detail in details {
        match detail.entry_type {
            EntryType::Debit => total_debits += detail.amount,
            EntryType::Credit => total_credits += detail.amount,
        }
    }

    TransactionTotals {
        total_debits,
        total_credits,
        total_amount: total_debits + total_credits,
    }
}

/// Validates that the line items balance.
///
/// # Errors
///
/// Returns `UnbalancedTransaction` carrying both totals when they differ by
/// more than one cent.
pub fn validate_balance(details: &[LineItemInput]) -> Result<TransactionTotals, LedgerError> {
    let totals = calculate_totals(details);

    if !totals.is_balanced() {
        return Err(LedgerError::UnbalancedTransaction {
            total_debits: totals.total_debits,
            total_credits: totals.total_credits,
        });
    }

    Ok(totals)
}
