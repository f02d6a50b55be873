//! Ledger domain types for transaction posting.
//!
//! A transaction is an ordered list of line items. Callers submit line items
//! with free-form account references; the ledger resolves them to canonical
//! account ids and numbers them in input order.

use cashflow_shared::types::AccountId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::reference::EntityRef;

/// Largest permitted difference between debit and credit totals (0.01).
pub const BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Entry type: either Debit or Credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit entry.
    Debit,
    /// Credit entry.
    Credit,
}

impl EntryType {
    /// Returns the lowercase storage name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

/// Lifecycle status of a transaction.
///
/// Status is recorded as supplied and has no effect on posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Awaiting confirmation.
    Pending,
    /// Settled.
    #[default]
    Completed,
    /// Cancelled by the user.
    Cancelled,
}

impl TransactionStatus {
    /// Returns the lowercase storage name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A line item as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemInput {
    /// Account id or account name.
    pub account: EntityRef,
    /// Free-text description (required).
    pub description: String,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Debit or credit.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

/// Input for posting a new transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTransactionInput {
    /// Transaction date; today (UTC) when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Status; `completed` when absent.
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    /// Line items in posting order.
    #[serde(default)]
    pub details: Vec<LineItemInput>,
}

/// A line item after validation and account resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLineItem {
    /// 1-based position in the submitted list.
    pub serial_no: i32,
    /// Canonical account id.
    pub account_id: AccountId,
    /// Trimmed description.
    pub description: String,
    /// Amount.
    pub amount: Decimal,
    /// Debit or credit.
    pub entry_type: EntryType,
}

/// Debit and credit sums of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransactionTotals {
    /// Sum of debit amounts.
    pub total_debits: Decimal,
    /// Sum of credit amounts.
    pub total_credits: Decimal,
    /// Sum of all amounts; stored as the transaction total.
    pub total_amount: Decimal,
}

impl TransactionTotals {
    /// Returns the absolute difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        (self.total_debits - self.total_credits).abs()
    }

    /// Returns true if debits equal credits within [`BALANCE_TOLERANCE`].
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.difference() <= BALANCE_TOLERANCE
    }
}
