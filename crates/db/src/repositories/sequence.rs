//! Sequence generator for human-facing numbers.
//!
//! Each named counter hands out strictly increasing integers starting at 1.
//! Allocation is a single upsert statement, so concurrent callers never see
//! the same value.

use cashflow_shared::AppError;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use tracing::debug;

use crate::entities::sequence_counters;

/// Counter used for account sequence numbers.
pub const ACCOUNT_COUNTER: &str = "account_id";

/// Counter used for transaction sequence numbers.
pub const TRANSACTION_COUNTER: &str = "transaction_id";

/// Error types for sequence operations.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    /// Counter name is empty.
    #[error("Counter name is required")]
    EmptyName,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<SequenceError> for AppError {
    fn from(err: SequenceError) -> Self {
        match err {
            SequenceError::EmptyName => Self::Validation(err.to_string()),
            SequenceError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Sequence repository for counter allocation.
#[derive(Debug, Clone)]
pub struct SequenceRepository {
    db: DatabaseConnection,
}

impl SequenceRepository {
    /// Creates a new sequence repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Allocates the next value of `name`.
    ///
    /// A missing counter is created and returns 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the upsert fails.
    pub async fn next(&self, name: &str) -> Result<i64, SequenceError> {
        next_value(&self.db, name).await
    }

    /// Returns the last allocated value of `name`, or 0 if none.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the query fails.
    pub async fn current(&self, name: &str) -> Result<i64, SequenceError> {
        if name.is_empty() {
            return Err(SequenceError::EmptyName);
        }

        let counter = sequence_counters::Entity::find_by_id(name.to_string())
            .one(&self.db)
            .await?;

        Ok(counter.map_or(0, |c| c.value))
    }
}

/// Allocates the next value of `name` on any connection.
pub(crate) async fn next_value<C>(db: &C, name: &str) -> Result<i64, SequenceError>
where
    C: ConnectionTrait,
{
    if name.is_empty() {
        return Err(SequenceError::EmptyName);
    }

    let seed = sequence_counters::ActiveModel {
        name: Set(name.to_string()),
        value: Set(1),
    };

    // INSERT ... ON CONFLICT (name) DO UPDATE SET value = sequence_counters.value + 1 RETURNING *
    let counter = sequence_counters::Entity::insert(seed)
        .on_conflict(
            OnConflict::column(sequence_counters::Column::Name)
                .value(
                    sequence_counters::Column::Value,
                    Expr::col((sequence_counters::Entity, sequence_counters::Column::Value)).add(1),
                )
                .to_owned(),
        )
        .exec_with_returning(db)
        .await?;

    debug!(counter = name, value = counter.value, "Sequence allocated");
    Ok(counter.value)
}
