//! Entity references given either as a canonical id or as a display name.
//!
//! Callers may point at an account or account type by its storage id or by
//! its human-chosen name. The string is classified once, at the boundary, and
//! everything downstream works with [`EntityRef`].

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reference to a named entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityRef {
    /// Canonical storage identity.
    Id(Uuid),
    /// Display name, resolved by exact match.
    Name(String),
}

impl EntityRef {
    /// Classifies a raw reference.
    ///
    /// Anything that parses as a UUID is an id; every other string is a name.
    /// Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match Uuid::parse_str(trimmed) {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(trimmed.to_string()),
        }
    }

    /// Returns the id if this is an id reference.
    #[must_use]
    pub const fn as_id(&self) -> Option<Uuid> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Name(_) => None,
        }
    }

    /// Returns the name if this is a name reference.
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<Uuid> for EntityRef {
    fn from(id: Uuid) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for EntityRef {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for EntityRef {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<EntityRef> for String {
    fn from(reference: EntityRef) -> Self {
        reference.to_string()
    }
}
