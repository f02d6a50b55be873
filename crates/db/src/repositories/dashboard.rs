//! Dashboard repository for read-only summaries.
//!
//! Queries the registries and the ledger and composes the results; grouping
//! is delegated to [`cashflow_core::dashboard`]. Nothing here mutates.

use cashflow_core::dashboard::{
    AccountSummary, AccountTypeCount, AccountTypeRef, EntityCounts, RECENT_TRANSACTIONS_LIMIT,
    group_accounts_by_type,
};
use cashflow_shared::AppError;
use cashflow_shared::types::{AccountId, AccountTypeId};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde::Serialize;
use uuid::Uuid;

use super::account::{AccountError, list_with_types};
use super::transaction::{TransactionWithDetails, load_with_details};
use crate::entities::{account_types, accounts, transactions};

/// Error types for dashboard operations.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<AccountError> for DashboardError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Database(e) => Self::Database(e),
            other => Self::Database(DbErr::Custom(other.to_string())),
        }
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Dashboard statistics.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    /// Entity counts.
    #[serde(flatten)]
    pub counts: EntityCounts,
    /// Most recently created transactions, accounts expanded.
    pub recent_transactions: Vec<TransactionWithDetails>,
    /// Accounts per type.
    pub accounts_by_type: Vec<AccountTypeCount>,
}

/// Dashboard repository for summary queries.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    db: DatabaseConnection,
}

impl DashboardRepository {
    /// Creates a new dashboard repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets counts, recent transactions and accounts grouped by type.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn get_stats(&self) -> Result<DashboardStats, DashboardError> {
        let counts = self.query_counts().await?;
        let recent_transactions = self.query_recent_transactions().await?;
        let accounts_by_type = self.query_accounts_by_type().await?;

        Ok(DashboardStats {
            counts,
            recent_transactions,
            accounts_by_type,
        })
    }

    /// Lists every account in compact form, by sequence number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_accounts_summary(&self) -> Result<Vec<AccountSummary>, DashboardError> {
        let accounts = list_with_types(&self.db, accounts::Entity::find()).await?;

        Ok(accounts
            .into_iter()
            .map(|row| AccountSummary {
                id: AccountId::from_uuid(row.account.id),
                sequence_number: row.account.sequence_number,
                name: row.account.name,
                account_type: row.account_type.map(|t| AccountTypeRef {
                    id: AccountTypeId::from_uuid(t.id),
                    name: t.name,
                }),
                is_owner_account: row.account.is_owner_account,
            })
            .collect())
    }

    async fn query_counts(&self) -> Result<EntityCounts, DashboardError> {
        Ok(EntityCounts {
            total_accounts: accounts::Entity::find().count(&self.db).await?,
            owner_accounts: accounts::Entity::find()
                .filter(accounts::Column::IsOwnerAccount.eq(true))
                .count(&self.db)
                .await?,
            total_transactions: transactions::Entity::find().count(&self.db).await?,
            total_account_types: account_types::Entity::find().count(&self.db).await?,
        })
    }

    /// Sequence numbers follow creation order, so the highest are the newest.
    async fn query_recent_transactions(
        &self,
    ) -> Result<Vec<TransactionWithDetails>, DashboardError> {
        let headers = transactions::Entity::find()
            .order_by_desc(transactions::Column::SequenceNumber)
            .limit(RECENT_TRANSACTIONS_LIMIT)
            .all(&self.db)
            .await?;

        Ok(load_with_details(&self.db, headers).await?)
    }

    async fn query_accounts_by_type(&self) -> Result<Vec<AccountTypeCount>, DashboardError> {
        let types: Vec<(AccountTypeId, String)> = account_types::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|t| (AccountTypeId::from_uuid(t.id), t.name))
            .collect();

        let account_type_ids: Vec<Uuid> = accounts::Entity::find()
            .select_only()
            .column(accounts::Column::AccountTypeId)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(group_accounts_by_type(
            &types,
            account_type_ids.into_iter().map(AccountTypeId::from_uuid),
        ))
    }
}
