//! Dashboard summaries.
//!
//! This module provides types and pure aggregation for dashboard data:
//! - Entity counts
//! - Accounts grouped by type
//! - Compact account listings

pub mod summary;
pub mod types;

pub use summary::group_accounts_by_type;
pub use types::*;
