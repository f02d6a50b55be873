//! Party repository for counterparties.

use cashflow_core::validation::{FieldError, optional_text, required_text};
use cashflow_shared::AppError;
use cashflow_shared::types::PartyId;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder, Set,
};
use tracing::info;
use uuid::Uuid;

use crate::entities::parties;

/// Error types for party operations.
#[derive(Debug, thiserror::Error)]
pub enum PartyError {
    /// Party not found.
    #[error("Party not found: {0}")]
    NotFound(Uuid),

    /// Missing or blank field.
    #[error(transparent)]
    Validation(#[from] FieldError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<PartyError> for AppError {
    fn from(err: PartyError) -> Self {
        match err {
            PartyError::NotFound(_) => Self::NotFound(err.to_string()),
            PartyError::Validation(_) => Self::Validation(err.to_string()),
            PartyError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a party.
#[derive(Debug, Clone, Default)]
pub struct CreatePartyInput {
    /// Party name.
    pub name: String,
    /// Contact details.
    pub contact: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

/// Input for updating a party.
#[derive(Debug, Clone, Default)]
pub struct UpdatePartyInput {
    /// Party name.
    pub name: Option<String>,
    /// Contact details.
    pub contact: Option<Option<String>>,
    /// Postal address.
    pub address: Option<Option<String>>,
}

/// Party repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct PartyRepository {
    db: DatabaseConnection,
}

impl PartyRepository {
    /// Creates a new party repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all parties ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<parties::Model>, PartyError> {
        let parties = parties::Entity::find()
            .order_by_asc(parties::Column::Name)
            .all(&self.db)
            .await?;
        Ok(parties)
    }

    /// Gets a party by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no party has this id.
    pub async fn get(&self, id: Uuid) -> Result<parties::Model, PartyError> {
        parties::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(PartyError::NotFound(id))
    }

    /// Creates a party.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the insert fails.
    pub async fn create(&self, input: CreatePartyInput) -> Result<parties::Model, PartyError> {
        let name = required_text("name", &input.name)?;

        let now = chrono::Utc::now().into();
        let party = parties::ActiveModel {
            id: Set(PartyId::new().into_inner()),
            name: Set(name),
            contact: Set(optional_text(input.contact)),
            address: Set(optional_text(input.address)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let party = party.insert(&self.db).await?;
        info!(party_id = %party.id, "Party created");
        Ok(party)
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns an error if the party does not exist or a new name is blank.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdatePartyInput,
    ) -> Result<parties::Model, PartyError> {
        let party = self.get(id).await?;
        let mut active: parties::ActiveModel = party.into();

        if let Some(name) = input.name {
            active.name = Set(required_text("name", &name)?);
        }
        if let Some(contact) = input.contact {
            active.contact = Set(optional_text(contact));
        }
        if let Some(address) = input.address {
            active.address = Set(optional_text(address));
        }
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a party.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no party has this id.
    pub async fn delete(&self, id: Uuid) -> Result<(), PartyError> {
        let party = self.get(id).await?;
        party.delete(&self.db).await?;
        info!(party_id = %id, "Party deleted");
        Ok(())
    }
}
