//! Property-based tests for line item and balance validation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{BALANCE_TOLERANCE, EntryType, LineItemInput};
use super::validation::{calculate_totals, validate_balance, validate_line_items};
use crate::reference::EntityRef;

/// Strategy to generate a non-negative amount (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a negative amount.
fn negative_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

fn entry_type_strategy() -> impl Strategy<Value = EntryType> {
    prop_oneof![Just(EntryType::Debit), Just(EntryType::Credit)]
}

fn line(entry_type: EntryType, amount: Decimal) -> LineItemInput {
    LineItemInput {
        account: EntityRef::Name("Cash".into()),
        description: "line".into(),
        amount,
        entry_type,
    }
}

fn lines() -> impl Strategy<Value = Vec<LineItemInput>> {
    prop::collection::vec(
        (entry_type_strategy(), amount()).prop_map(|(t, a)| line(t, a)),
        1..12,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Totals always equal the sum of the amounts on each side.
    #[test]
    fn prop_total_amount_is_sum_of_amounts(details in lines()) {
        let totals = calculate_totals(&details);
        let sum: Decimal = details.iter().map(|d| d.amount).sum();

        prop_assert_eq!(totals.total_amount, sum);
        prop_assert_eq!(totals.total_debits + totals.total_credits, sum);
    }

    /// A mirrored posting (every debit matched by an equal credit) balances.
    #[test]
    fn prop_mirrored_posting_balances(amounts in prop::collection::vec(amount(), 1..8)) {
        let details: Vec<_> = amounts
            .iter()
            .flat_map(|a| [line(EntryType::Debit, *a), line(EntryType::Credit, *a)])
            .collect();

        prop_assert!(validate_balance(&details).is_ok());
    }

    /// Balance is accepted exactly when the difference is within one cent.
    #[test]
    fn prop_balance_matches_tolerance(details in lines()) {
        let totals = calculate_totals(&details);
        let within = (totals.total_debits - totals.total_credits).abs() <= BALANCE_TOLERANCE;

        match validate_balance(&details) {
            Ok(_) => prop_assert!(within),
            Err(LedgerError::UnbalancedTransaction { total_debits, total_credits }) => {
                prop_assert!(!within);
                prop_assert_eq!(total_debits, totals.total_debits);
                prop_assert_eq!(total_credits, totals.total_credits);
            }
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }

    /// Any negative amount is rejected at its own position.
    #[test]
    fn prop_negative_amount_rejected(
        mut details in lines(),
        bad in negative_amount(),
        pick in any::<prop::sample::Index>(),
    ) {
        let index = pick.index(details.len());
        details[index].amount = bad;

        // Earlier lines are all valid, so the offending one is reported
        let expected = i32::try_from(index + 1).unwrap();
        prop_assert_eq!(
            validate_line_items(&details),
            Err(LedgerError::NegativeAmount { serial_no: expected })
        );
    }
}
