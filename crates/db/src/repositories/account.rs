//! Account repository for the account registry.
//!
//! Accounts carry a human-facing sequence number taken from the
//! [`ACCOUNT_COUNTER`](super::sequence::ACCOUNT_COUNTER) sequence at creation.
//! Names are not unique; lookups by name pick the lowest sequence number.

use cashflow_core::EntityRef;
use cashflow_core::validation::{FieldError, optional_text, required_text};
use cashflow_shared::AppError;
use cashflow_shared::types::AccountId;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, Select, Set,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::account_type;
use super::sequence::{ACCOUNT_COUNTER, SequenceError, next_value};
use crate::entities::{account_types, accounts};

/// Error types for account operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Account not found.
    #[error("Account not found: {0}")]
    NotFound(Uuid),

    /// Missing or blank field.
    #[error(transparent)]
    Validation(#[from] FieldError),

    /// The account type reference did not resolve.
    #[error("Account type \"{0}\" not found")]
    AccountTypeNotFound(String),

    /// Sequence number allocation failed.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NotFound(_) => Self::NotFound(err.to_string()),
            AccountError::Validation(_) | AccountError::AccountTypeNotFound(_) => {
                Self::Validation(err.to_string())
            }
            AccountError::Sequence(e) => e.into(),
            AccountError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Account with its type expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountWithType {
    /// The account record.
    #[serde(flatten)]
    pub account: accounts::Model,
    /// The account type, absent if it has been deleted.
    pub account_type: Option<account_types::Model>,
}

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Account name.
    pub name: String,
    /// Account type id or name.
    pub account_type: EntityRef,
    /// Bank account number.
    pub account_no: Option<String>,
    /// Bank branch.
    pub branch: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Contact details.
    pub contact: Option<String>,
    /// Whether the bookkeeping entity owns this account.
    pub is_owner_account: bool,
}

impl CreateAccountInput {
    /// Creates an input with only the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, account_type: impl Into<EntityRef>) -> Self {
        Self {
            name: name.into(),
            account_type: account_type.into(),
            account_no: None,
            branch: None,
            address: None,
            contact: None,
            is_owner_account: false,
        }
    }
}

/// Input for updating an account.
///
/// `None` leaves a field unchanged; `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct UpdateAccountInput {
    /// Account name.
    pub name: Option<String>,
    /// Account type id or name.
    pub account_type: Option<EntityRef>,
    /// Bank account number.
    pub account_no: Option<Option<String>>,
    /// Bank branch.
    pub branch: Option<Option<String>>,
    /// Postal address.
    pub address: Option<Option<String>>,
    /// Contact details.
    pub contact: Option<Option<String>>,
    /// Owner flag.
    pub is_owner_account: Option<bool>,
}

/// Account repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all accounts by sequence number, types expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<AccountWithType>, AccountError> {
        list_with_types(&self.db, accounts::Entity::find()).await
    }

    /// Lists owner accounts by sequence number, types expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_owner_accounts(&self) -> Result<Vec<AccountWithType>, AccountError> {
        let query = accounts::Entity::find().filter(accounts::Column::IsOwnerAccount.eq(true));
        list_with_types(&self.db, query).await
    }

    /// Gets an account by id with its type expanded.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account has this id.
    pub async fn get(&self, id: Uuid) -> Result<AccountWithType, AccountError> {
        let (account, account_type) = accounts::Entity::find_by_id(id)
            .find_also_related(account_types::Entity)
            .one(&self.db)
            .await?
            .ok_or(AccountError::NotFound(id))?;

        Ok(AccountWithType {
            account,
            account_type,
        })
    }

    /// Finds an account by exact name; the lowest sequence number wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<accounts::Model>, AccountError> {
        let account = accounts::Entity::find()
            .filter(accounts::Column::Name.eq(name))
            .order_by_asc(accounts::Column::SequenceNumber)
            .one(&self.db)
            .await?;
        Ok(account)
    }

    /// Creates an account and assigns its sequence number.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is blank
    /// - The account type reference does not resolve
    /// - Sequence allocation or the insert fails
    pub async fn create(&self, input: CreateAccountInput) -> Result<AccountWithType, AccountError> {
        let name = required_text("name", &input.name)?;
        let account_type = resolve_type(&self.db, &input.account_type).await?;

        let sequence_number = next_value(&self.db, ACCOUNT_COUNTER).await?;

        let now = chrono::Utc::now().into();
        let account = accounts::ActiveModel {
            id: Set(AccountId::new().into_inner()),
            sequence_number: Set(sequence_number),
            name: Set(name),
            account_type_id: Set(account_type.id),
            account_no: Set(optional_text(input.account_no)),
            branch: Set(optional_text(input.branch)),
            address: Set(optional_text(input.address)),
            contact: Set(optional_text(input.contact)),
            is_owner_account: Set(input.is_owner_account),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let account = account.insert(&self.db).await?;
        info!(
            account_id = %account.id,
            sequence_number = account.sequence_number,
            name = %account.name,
            "Account created"
        );

        Ok(AccountWithType {
            account,
            account_type: Some(account_type),
        })
    }

    /// Applies a partial update. The sequence number never changes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - A new name is blank
    /// - A new account type reference does not resolve
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateAccountInput,
    ) -> Result<AccountWithType, AccountError> {
        let account = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AccountError::NotFound(id))?;

        let name = input
            .name
            .as_deref()
            .map(|n| required_text("name", n))
            .transpose()?;

        let new_type = match &input.account_type {
            Some(reference) => Some(resolve_type(&self.db, reference).await?),
            None => None,
        };

        let mut active: accounts::ActiveModel = account.into();

        if let Some(name) = name {
            active.name = Set(name);
        }
        if let Some(account_type) = &new_type {
            active.account_type_id = Set(account_type.id);
        }
        if let Some(account_no) = input.account_no {
            active.account_no = Set(optional_text(account_no));
        }
        if let Some(branch) = input.branch {
            active.branch = Set(optional_text(branch));
        }
        if let Some(address) = input.address {
            active.address = Set(optional_text(address));
        }
        if let Some(contact) = input.contact {
            active.contact = Set(optional_text(contact));
        }
        if let Some(is_owner_account) = input.is_owner_account {
            active.is_owner_account = Set(is_owner_account);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let account = active.update(&self.db).await?;

        let account_type = match new_type {
            Some(account_type) => Some(account_type),
            None => {
                account_types::Entity::find_by_id(account.account_type_id)
                    .one(&self.db)
                    .await?
            }
        };

        Ok(AccountWithType {
            account,
            account_type,
        })
    }

    /// Deletes an account.
    ///
    /// Transaction details referencing the account are left as they are.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account has this id.
    pub async fn delete(&self, id: Uuid) -> Result<(), AccountError> {
        let account = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AccountError::NotFound(id))?;

        account.delete(&self.db).await?;
        info!(account_id = %id, "Account deleted");
        Ok(())
    }
}

/// Runs an account query ordered by sequence number with types joined.
pub(crate) async fn list_with_types<C>(
    db: &C,
    query: Select<accounts::Entity>,
) -> Result<Vec<AccountWithType>, AccountError>
where
    C: ConnectionTrait,
{
    let rows = query
        .order_by_asc(accounts::Column::SequenceNumber)
        .find_also_related(account_types::Entity)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(account, account_type)| AccountWithType {
            account,
            account_type,
        })
        .collect())
}

async fn resolve_type<C>(
    db: &C,
    reference: &EntityRef,
) -> Result<account_types::Model, AccountError>
where
    C: ConnectionTrait,
{
    account_type::resolve(db, reference)
        .await?
        .ok_or_else(|| AccountError::AccountTypeNotFound(reference.to_string()))
}
