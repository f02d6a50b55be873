//! Property-based tests for `LedgerService` resolution.

use cashflow_shared::types::AccountId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::resolution::AccountDirectory;
use super::service::LedgerService;
use super::types::{CreateTransactionInput, EntryType, LineItemInput};
use crate::reference::EntityRef;

const NAMES: [&str; 4] = ["Cash", "Bank", "Capital", "Sales"];

fn directory() -> (AccountDirectory, Vec<AccountId>) {
    let ids: Vec<AccountId> = NAMES.iter().map(|_| AccountId::new()).collect();
    let directory = AccountDirectory::from_accounts(ids.iter().copied().zip(NAMES));
    (directory, ids)
}

/// Balanced postings over the fixed account names; each pair debits and
/// credits the same amount.
fn balanced_pairs() -> impl Strategy<Value = Vec<(usize, usize, Decimal)>> {
    prop::collection::vec(
        (0..NAMES.len(), 0..NAMES.len(), (1i64..1_000_000i64)),
        1..10,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(d, c, cents)| (d, c, Decimal::new(cents, 2)))
            .collect()
    })
}

fn build_input(
    pairs: &[(usize, usize, Decimal)],
    ids: &[AccountId],
    by_id: bool,
) -> CreateTransactionInput {
    let reference = |i: usize| {
        if by_id {
            EntityRef::Id(ids[i].into_inner())
        } else {
            EntityRef::Name(NAMES[i].to_string())
        }
    };

    let details = pairs
        .iter()
        .flat_map(|(d, c, amount)| {
            [
                LineItemInput {
                    account: reference(*d),
                    description: "debit side".into(),
                    amount: *amount,
                    entry_type: EntryType::Debit,
                },
                LineItemInput {
                    account: reference(*c),
                    description: "credit side".into(),
                    amount: *amount,
                    entry_type: EntryType::Credit,
                },
            ]
        })
        .collect();

    CreateTransactionInput {
        details,
        ..Default::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Serial numbers are 1..=N in input order and totals match the amounts.
    #[test]
    fn prop_serials_follow_input_order(pairs in balanced_pairs(), by_id in any::<bool>()) {
        let (directory, ids) = directory();
        let input = build_input(&pairs, &ids, by_id);

        let prepared = LedgerService::prepare(&input, |r| directory.lookup(r)).unwrap();

        let serials: Vec<i32> = prepared.details.iter().map(|d| d.serial_no).collect();
        let expected: Vec<i32> = (1..=i32::try_from(input.details.len()).unwrap()).collect();
        prop_assert_eq!(serials, expected);

        let sum: Decimal = input.details.iter().map(|d| d.amount).sum();
        prop_assert_eq!(prepared.totals.total_amount, sum);
        prop_assert_eq!(LedgerService::total_amount(&prepared.details), sum);
    }

    /// Name and id references to the same account resolve identically.
    #[test]
    fn prop_names_and_ids_resolve_alike(pairs in balanced_pairs()) {
        let (directory, ids) = directory();

        let lookup = |r: &EntityRef| directory.lookup(r);
        let by_name = LedgerService::prepare(&build_input(&pairs, &ids, false), lookup).unwrap();
        let by_id = LedgerService::prepare(&build_input(&pairs, &ids, true), lookup).unwrap();

        prop_assert_eq!(by_name.details, by_id.details);
    }
}
