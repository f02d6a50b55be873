//! Account type repository.

use cashflow_core::EntityRef;
use cashflow_core::validation::{FieldError, required_text};
use cashflow_shared::AppError;
use cashflow_shared::types::AccountTypeId;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, Set, SqlErr,
};
use tracing::info;
use uuid::Uuid;

use crate::entities::account_types;

/// Error types for account type operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountTypeError {
    /// Account type not found.
    #[error("Account type not found: {0}")]
    NotFound(Uuid),

    /// Missing or blank field.
    #[error(transparent)]
    Validation(#[from] FieldError),

    /// Another account type already has this name.
    #[error("Account type \"{0}\" already exists")]
    DuplicateName(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<AccountTypeError> for AppError {
    fn from(err: AccountTypeError) -> Self {
        match err {
            AccountTypeError::NotFound(_) => Self::NotFound(err.to_string()),
            AccountTypeError::Validation(_) | AccountTypeError::DuplicateName(_) => {
                Self::Validation(err.to_string())
            }
            AccountTypeError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Account type repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct AccountTypeRepository {
    db: DatabaseConnection,
}

impl AccountTypeRepository {
    /// Creates a new account type repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all account types ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<account_types::Model>, AccountTypeError> {
        let types = account_types::Entity::find()
            .order_by_asc(account_types::Column::Name)
            .all(&self.db)
            .await?;
        Ok(types)
    }

    /// Gets an account type by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account type has this id.
    pub async fn get(&self, id: Uuid) -> Result<account_types::Model, AccountTypeError> {
        account_types::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AccountTypeError::NotFound(id))
    }

    /// Finds an account type by exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<account_types::Model>, AccountTypeError> {
        Ok(find_by_name(&self.db, name).await?)
    }

    /// Creates an account type.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is blank
    /// - Another account type already has the name
    pub async fn create(&self, name: &str) -> Result<account_types::Model, AccountTypeError> {
        let name = required_text("name", name)?;

        if find_by_name(&self.db, &name).await?.is_some() {
            return Err(AccountTypeError::DuplicateName(name));
        }

        let now = chrono::Utc::now().into();
        let account_type = account_types::ActiveModel {
            id: Set(AccountTypeId::new().into_inner()),
            name: Set(name.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // A concurrent create can pass the lookup above; the unique index decides
        let account_type = account_type
            .insert(&self.db)
            .await
            .map_err(|e| duplicate_or_database(e, &name))?;
        info!(
            account_type_id = %account_type.id,
            name = %account_type.name,
            "Account type created"
        );
        Ok(account_type)
    }

    /// Renames an account type. `None` leaves the name unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account type does not exist
    /// - The new name is blank or taken by another type
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
    ) -> Result<account_types::Model, AccountTypeError> {
        let account_type = self.get(id).await?;

        let Some(name) = name else {
            return Ok(account_type);
        };
        let name = required_text("name", name)?;

        if name != account_type.name
            && let Some(existing) = find_by_name(&self.db, &name).await?
            && existing.id != id
        {
            return Err(AccountTypeError::DuplicateName(name));
        }

        let mut active: account_types::ActiveModel = account_type.into();
        active.name = Set(name.clone());
        active.updated_at = Set(chrono::Utc::now().into());

        active
            .update(&self.db)
            .await
            .map_err(|e| duplicate_or_database(e, &name))
    }

    /// Deletes an account type.
    ///
    /// Accounts still pointing at the type are left as they are.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account type has this id.
    pub async fn delete(&self, id: Uuid) -> Result<(), AccountTypeError> {
        let account_type = self.get(id).await?;
        account_type.delete(&self.db).await?;
        info!(account_type_id = %id, "Account type deleted");
        Ok(())
    }
}

/// Maps a unique index violation on the name to `DuplicateName`.
fn duplicate_or_database(err: DbErr, name: &str) -> AccountTypeError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AccountTypeError::DuplicateName(name.to_string())
        }
        _ => AccountTypeError::Database(err),
    }
}

/// Finds an account type by exact name on any connection.
pub(crate) async fn find_by_name<C>(
    db: &C,
    name: &str,
) -> Result<Option<account_types::Model>, DbErr>
where
    C: ConnectionTrait,
{
    account_types::Entity::find()
        .filter(account_types::Column::Name.eq(name))
        .one(db)
        .await
}

/// Resolves an account type reference to an existing type.
///
/// Ids must exist; names match exactly.
pub(crate) async fn resolve<C>(
    db: &C,
    reference: &EntityRef,
) -> Result<Option<account_types::Model>, DbErr>
where
    C: ConnectionTrait,
{
    match reference {
        EntityRef::Id(id) => account_types::Entity::find_by_id(*id).one(db).await,
        EntityRef::Name(name) => find_by_name(db, name).await,
    }
}
