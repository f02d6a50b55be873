//! Double-entry bookkeeping logic.
//!
//! This module implements the pure half of transaction posting:
//! - Domain types for posting input and resolved line items
//! - Line item and balance validation
//! - Account reference resolution
//! - The ledger service tying the steps together

pub mod error;
pub mod resolution;
pub mod service;
pub mod types;
pub mod validation;

#[cfg(test)]
mod service_props;
#[cfg(test)]
mod validation_props;

pub use error::LedgerError;
pub use resolution::{AccountDirectory, resolve_account_ref};
pub use service::{LedgerService, PreparedTransaction};
pub use types::{
    BALANCE_TOLERANCE, CreateTransactionInput, EntryType, LineItemInput, ResolvedLineItem,
    TransactionStatus, TransactionTotals,
};
