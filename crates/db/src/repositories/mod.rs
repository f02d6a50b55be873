//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod account;
pub mod account_type;
pub mod dashboard;
pub mod party;
pub mod sequence;
pub mod transaction;

pub use account::{
    AccountError, AccountRepository, AccountWithType, CreateAccountInput, UpdateAccountInput,
};
pub use account_type::{AccountTypeError, AccountTypeRepository};
pub use dashboard::{DashboardError, DashboardRepository, DashboardStats};
pub use party::{CreatePartyInput, PartyError, PartyRepository, UpdatePartyInput};
pub use sequence::{ACCOUNT_COUNTER, SequenceError, SequenceRepository, TRANSACTION_COUNTER};
pub use transaction::{
    DetailWithAccount, TransactionError, TransactionFilter, TransactionRepository,
    TransactionWithDetails,
};
