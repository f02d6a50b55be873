//! Entity re-exports.

pub use super::account_types::Entity as AccountTypes;
pub use super::accounts::Entity as Accounts;
pub use super::parties::Entity as Parties;
pub use super::sequence_counters::Entity as SequenceCounters;
pub use super::transaction_details::Entity as TransactionDetails;
pub use super::transactions::Entity as Transactions;
