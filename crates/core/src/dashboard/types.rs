//! Dashboard data types.

use cashflow_shared::types::{AccountId, AccountTypeId};
use serde::{Deserialize, Serialize};

/// Number of transactions shown in the recent-activity list.
pub const RECENT_TRANSACTIONS_LIMIT: u64 = 5;

/// Headline entity counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    /// All accounts.
    pub total_accounts: u64,
    /// Accounts flagged as owned by the bookkeeping entity.
    pub owner_accounts: u64,
    /// All transactions.
    pub total_transactions: u64,
    /// All account types.
    pub total_account_types: u64,
}

/// Number of accounts of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTypeCount {
    /// Type name; absent when accounts point at a deleted type.
    pub type_name: Option<String>,
    /// Number of accounts.
    pub count: u64,
}

/// Account type as embedded in summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTypeRef {
    /// Type id.
    pub id: AccountTypeId,
    /// Type name.
    pub name: String,
}

/// Compact account listing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    /// Account id.
    pub id: AccountId,
    /// Human-facing account number.
    pub sequence_number: i64,
    /// Account name.
    pub name: String,
    /// Expanded type, absent if dangling.
    pub account_type: Option<AccountTypeRef>,
    /// Owner flag.
    pub is_owner_account: bool,
}
