//! `SeaORM` entity definitions.

pub mod prelude;

pub mod account_types;
pub mod accounts;
pub mod parties;
pub mod sea_orm_active_enums;
pub mod sequence_counters;
pub mod transaction_details;
pub mod transactions;
