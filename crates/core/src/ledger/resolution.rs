//! Account reference resolution.

use std::collections::{HashMap, HashSet};

use cashflow_shared::types::AccountId;

use super::error::LedgerError;
use crate::reference::EntityRef;

/// Resolves one account reference through `lookup`.
///
/// # Errors
///
/// Returns `AccountNotFound` carrying the literal reference when the lookup
/// yields nothing.
pub fn resolve_account_ref<F>(reference: &EntityRef, lookup: F) -> Result<AccountId, LedgerError>
where
    F: Fn(&EntityRef) -> Option<AccountId>,
{
    lookup(reference).ok_or_else(|| LedgerError::AccountNotFound(reference.to_string()))
}

/// In-memory snapshot of account ids and names used to resolve a posting.
///
/// Names are not unique. When several accounts share a name, the first one
/// inserted wins, so callers build the directory in ascending sequence-number
/// order.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    ids: HashSet<AccountId>,
    names: HashMap<String, AccountId>,
}

impl AccountDirectory {
    /// Builds a directory from `(id, name)` pairs in sequence-number order.
    pub fn from_accounts<I, S>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (AccountId, S)>,
        S: Into<String>,
    {
        let mut directory = Self::default();
        for (id, name) in accounts {
            directory.insert(id, name.into());
        }
        directory
    }

    /// Adds an account. An existing entry with the same name is kept.
    pub fn insert(&mut self, id: AccountId, name: String) {
        self.ids.insert(id);
        self.names.entry(name).or_insert(id);
    }

    /// Looks up a reference: ids must be present, names match exactly.
    #[must_use]
    pub fn lookup(&self, reference: &EntityRef) -> Option<AccountId> {
        match reference {
            EntityRef::Id(id) => {
                let id = AccountId::from_uuid(*id);
                self.ids.contains(&id).then_some(id)
            }
            EntityRef::Name(name) => self.names.get(name).copied(),
        }
    }
}
