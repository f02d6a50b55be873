//! Core business logic for Cashflow.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Double-entry posting validation and account resolution
//! - `dashboard` - Reporting types and aggregation
//! - `reference` - Id-or-name entity references
//! - `validation` - Shared field normalization

pub mod dashboard;
pub mod ledger;
pub mod reference;
pub mod validation;

pub use reference::EntityRef;
pub use validation::FieldError;
