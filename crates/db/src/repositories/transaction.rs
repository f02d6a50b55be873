//! Transaction repository for ledger postings.
//!
//! Validation and account resolution happen in
//! [`LedgerService`](cashflow_core::ledger::LedgerService); this repository
//! loads the accounts the posting refers to, allocates the sequence number
//! and writes the header and its details in one database transaction.

use std::collections::HashMap;

use cashflow_core::EntityRef;
use cashflow_core::ledger::{
    AccountDirectory, CreateTransactionInput, LedgerError, LedgerService, PreparedTransaction,
    ResolvedLineItem,
};
use cashflow_shared::AppError;
use cashflow_shared::types::{AccountId, PageRequest, PageResponse, TransactionId};
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::sequence::{SequenceError, TRANSACTION_COUNTER, next_value};
use crate::entities::{accounts, transaction_details, transactions};

/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    NotFound(Uuid),

    /// Posting rejected by ledger rules.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Sequence number allocation failed.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<TransactionError> for AppError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::NotFound(_) => Self::NotFound(err.to_string()),
            TransactionError::Ledger(e) => e.into(),
            TransactionError::Sequence(e) => e.into(),
            TransactionError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Filter options for listing transactions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFilter {
    /// Only transactions with a detail posted to this account.
    pub account_id: Option<Uuid>,
    /// Earliest transaction date (inclusive).
    pub date_from: Option<NaiveDate>,
    /// Latest transaction date (inclusive).
    pub date_to: Option<NaiveDate>,
}

/// Transaction detail with its account expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailWithAccount {
    /// The detail record.
    #[serde(flatten)]
    pub detail: transaction_details::Model,
    /// The account, absent if it has been deleted.
    pub account: Option<accounts::Model>,
}

/// Transaction with its details in serial order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionWithDetails {
    /// Transaction header.
    #[serde(flatten)]
    pub transaction: transactions::Model,
    /// Details ordered by serial number.
    pub details: Vec<DetailWithAccount>,
}

/// Transaction repository for ledger operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a new transaction.
    ///
    /// Steps, in order: line item checks, balance check, account
    /// resolution, serial numbering, sequence allocation, persistence.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no details, or a detail has a negative amount or blank description
    /// - Debits and credits differ by more than 0.01
    /// - An account reference does not resolve
    /// - Database operation fails
    pub async fn create(
        &self,
        input: CreateTransactionInput,
    ) -> Result<TransactionWithDetails, TransactionError> {
        let directory = self.load_directory(&input).await?;
        let PreparedTransaction { details, totals } =
            LedgerService::prepare(&input, |r| directory.lookup(r)).inspect_err(|e| {
                warn!(error = %e, code = e.error_code(), "Transaction rejected");
            })?;

        // Allocated outside the write transaction; a failed insert burns the number
        let sequence_number = next_value(&self.db, TRANSACTION_COUNTER).await?;

        let txn = self.db.begin().await?;
        let transaction = insert_transaction(
            &txn,
            &input,
            sequence_number,
            LedgerService::total_amount(&details),
        )
        .await?;
        insert_details(&txn, transaction.id, &details).await?;
        txn.commit().await?;

        info!(
            transaction_id = %transaction.id,
            sequence_number,
            total_amount = %transaction.total_amount,
            total_debits = %totals.total_debits,
            details = details.len(),
            "Transaction created"
        );

        let mut loaded = load_with_details(&self.db, vec![transaction]).await?;
        loaded.pop().ok_or_else(|| {
            TransactionError::Database(DbErr::RecordNotFound(
                "transaction vanished after insert".to_string(),
            ))
        })
    }

    /// Lists transactions, newest sequence number first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: TransactionFilter,
        page: PageRequest,
    ) -> Result<PageResponse<TransactionWithDetails>, TransactionError> {
        let page = page.normalized();
        let mut query = transactions::Entity::find();

        if let Some(account_id) = filter.account_id {
            query = query.filter(
                transactions::Column::Id.in_subquery(
                    Query::select()
                        .column(transaction_details::Column::TransactionId)
                        .from(transaction_details::Entity)
                        .and_where(Expr::col(transaction_details::Column::AccountId).eq(account_id))
                        .to_owned(),
                ),
            );
        }

        if let Some(date_from) = filter.date_from {
            query = query.filter(transactions::Column::TransactionDate.gte(date_from));
        }

        if let Some(date_to) = filter.date_to {
            query = query.filter(transactions::Column::TransactionDate.lte(date_to));
        }

        let paginator = query
            .order_by_desc(transactions::Column::SequenceNumber)
            .paginate(&self.db, page.limit());

        let total = paginator.num_items().await?;
        let headers = paginator
            .fetch_page(page.page_index())
            .await?;

        let data = load_with_details(&self.db, headers).await?;
        Ok(PageResponse::new(data, page, total))
    }

    /// Gets a transaction with its details.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no transaction has this id.
    pub async fn get(&self, id: Uuid) -> Result<TransactionWithDetails, TransactionError> {
        let transaction = transactions::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(TransactionError::NotFound(id))?;

        let mut loaded = load_with_details(&self.db, vec![transaction]).await?;
        loaded.pop().ok_or(TransactionError::NotFound(id))
    }

    /// Deletes a transaction and its details.
    ///
    /// No reversing entry is recorded.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no transaction has this id.
    pub async fn delete(&self, id: Uuid) -> Result<(), TransactionError> {
        let exists = transactions::Entity::find_by_id(id).one(&self.db).await?;
        if exists.is_none() {
            return Err(TransactionError::NotFound(id));
        }

        let txn = self.db.begin().await?;
        transaction_details::Entity::delete_many()
            .filter(transaction_details::Column::TransactionId.eq(id))
            .exec(&txn)
            .await?;
        let result = transactions::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        if result.rows_affected == 0 {
            return Err(TransactionError::NotFound(id));
        }

        info!(transaction_id = %id, "Transaction deleted");
        Ok(())
    }

    /// Loads every account the posting refers to, by id or by name.
    ///
    /// Accounts are read in sequence order so that duplicate names resolve to
    /// the oldest account.
    async fn load_directory(
        &self,
        input: &CreateTransactionInput,
    ) -> Result<AccountDirectory, TransactionError> {
        let mut ids = Vec::new();
        let mut names = Vec::new();
        for detail in &input.details {
            match &detail.account {
                EntityRef::Id(id) => ids.push(*id),
                EntityRef::Name(name) => names.push(name.clone()),
            }
        }

        let accounts = accounts::Entity::find()
            .filter(
                Condition::any()
                    .add(accounts::Column::Id.is_in(ids))
                    .add(accounts::Column::Name.is_in(names)),
            )
            .order_by_asc(accounts::Column::SequenceNumber)
            .all(&self.db)
            .await?;

        Ok(AccountDirectory::from_accounts(
            accounts
                .into_iter()
                .map(|a| (AccountId::from_uuid(a.id), a.name)),
        ))
    }
}

async fn insert_transaction(
    txn: &DatabaseTransaction,
    input: &CreateTransactionInput,
    sequence_number: i64,
    total_amount: rust_decimal::Decimal,
) -> Result<transactions::Model, TransactionError> {
    let now = Utc::now().into();

    let transaction = transactions::ActiveModel {
        id: Set(TransactionId::new().into_inner()),
        sequence_number: Set(sequence_number),
        transaction_date: Set(input.date.unwrap_or_else(|| Utc::now().date_naive())),
        total_amount: Set(total_amount),
        status: Set(input.status.unwrap_or_default().into()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    Ok(transaction.insert(txn).await?)
}

async fn insert_details(
    txn: &DatabaseTransaction,
    transaction_id: Uuid,
    details: &[ResolvedLineItem],
) -> Result<(), TransactionError> {
    for detail in details {
        let row = transaction_details::ActiveModel {
            transaction_id: Set(transaction_id),
            serial_no: Set(detail.serial_no),
            account_id: Set(detail.account_id.into_inner()),
            description: Set(detail.description.clone()),
            amount: Set(detail.amount),
            entry_type: Set(detail.entry_type.into()),
        };
        row.insert(txn).await?;
    }
    Ok(())
}

/// Loads details and accounts for a batch of transaction headers.
///
/// Output order follows `headers`.
pub(crate) async fn load_with_details<C>(
    db: &C,
    headers: Vec<transactions::Model>,
) -> Result<Vec<TransactionWithDetails>, DbErr>
where
    C: ConnectionTrait,
{
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = headers.iter().map(|t| t.id).collect();
    let rows = transaction_details::Entity::find()
        .filter(transaction_details::Column::TransactionId.is_in(ids))
        .order_by_asc(transaction_details::Column::TransactionId)
        .order_by_asc(transaction_details::Column::SerialNo)
        .find_also_related(accounts::Entity)
        .all(db)
        .await?;

    let mut grouped: HashMap<Uuid, Vec<DetailWithAccount>> = HashMap::new();
    for (detail, account) in rows {
        grouped
            .entry(detail.transaction_id)
            .or_default()
            .push(DetailWithAccount { detail, account });
    }

    Ok(headers
        .into_iter()
        .map(|transaction| {
            let details = grouped.remove(&transaction.id).unwrap_or_default();
            TransactionWithDetails {
                transaction,
                details,
            }
        })
        .collect())
}
