//! Aggregation helpers for dashboard views.

use std::collections::HashMap;

use cashflow_shared::types::AccountTypeId;

use super::types::AccountTypeCount;

/// Counts accounts per type.
///
/// `types` lists the known account types; `account_types` yields the type id
/// of every account. Types without accounts are omitted. Known types come
/// first, ordered by name; accounts whose type no longer exists are pooled
/// into a single trailing bucket with no name.
pub fn group_accounts_by_type<I>(
    types: &[(AccountTypeId, String)],
    account_types: I,
) -> Vec<AccountTypeCount>
where
    I: IntoIterator<Item = AccountTypeId>,
{
    let names: HashMap<AccountTypeId, &str> = types
        .iter()
        .map(|(id, name)| (*id, name.as_str()))
        .collect();

    let mut counts: HashMap<AccountTypeId, u64> = HashMap::new();
    let mut dangling = 0u64;

    for type_id in account_types {
        if names.contains_key(&type_id) {
            *counts.entry(type_id).or_default() += 1;
        } else {
            dangling += 1;
        }
    }

    let mut grouped: Vec<AccountTypeCount> = counts
        .into_iter()
        .filter_map(|(id, count)| {
            names.get(&id).map(|name| AccountTypeCount {
                type_name: Some((*name).to_string()),
                count,
            })
        })
        .collect();
    grouped.sort_by(|a, b| a.type_name.cmp(&b.type_name));

    if dangling > 0 {
        grouped.push(AccountTypeCount {
            type_name: None,
            count: dangling,
        });
    }

    grouped
}
