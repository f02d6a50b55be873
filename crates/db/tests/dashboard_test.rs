//! Dashboard aggregation tests.

use cashflow_core::dashboard::{AccountTypeCount, RECENT_TRANSACTIONS_LIMIT};
use cashflow_core::ledger::{CreateTransactionInput, EntryType, LineItemInput};
use cashflow_db::repositories::{
    AccountRepository, AccountTypeRepository, CreateAccountInput, DashboardRepository,
    TransactionRepository,
};
use rust_decimal::Decimal;

mod common;

fn bucket(type_name: Option<&str>, count: u64) -> AccountTypeCount {
    AccountTypeCount {
        type_name: type_name.map(str::to_string),
        count,
    }
}

fn transfer(amount: Decimal) -> CreateTransactionInput {
    let line = |account: &str, entry_type| LineItemInput {
        account: account.into(),
        description: "transfer".to_string(),
        amount,
        entry_type,
    };
    CreateTransactionInput {
        details: vec![line("Cash", EntryType::Debit), line("Capital", EntryType::Credit)],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_empty_dashboard() {
    let db = common::setup_db().await;
    let repo = DashboardRepository::new(db);

    let stats = repo.get_stats().await.unwrap();
    assert_eq!(stats.counts.total_accounts, 0);
    assert_eq!(stats.counts.total_transactions, 0);
    assert!(stats.recent_transactions.is_empty());
    assert!(stats.accounts_by_type.is_empty());
    assert!(repo.get_accounts_summary().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_stats() {
    let db = common::setup_db().await;
    common::create_type(&db, "Asset").await;
    common::create_type(&db, "Equity").await;
    common::create_type(&db, "Expense").await;
    common::create_account(&db, "Cash", "Asset").await;
    common::create_account(&db, "Capital", "Equity").await;
    AccountRepository::new(db.clone())
        .create(CreateAccountInput {
            is_owner_account: true,
            ..CreateAccountInput::new("Bank", "Asset")
        })
        .await
        .unwrap();

    let transactions = TransactionRepository::new(db.clone());
    for amount in 1..=7 {
        transactions.create(transfer(amount.into())).await.unwrap();
    }

    let stats = DashboardRepository::new(db).get_stats().await.unwrap();

    assert_eq!(stats.counts.total_accounts, 3);
    assert_eq!(stats.counts.owner_accounts, 1);
    assert_eq!(stats.counts.total_transactions, 7);
    assert_eq!(stats.counts.total_account_types, 3);

    let limit = usize::try_from(RECENT_TRANSACTIONS_LIMIT).unwrap();
    assert_eq!(stats.recent_transactions.len(), limit);
    let recent: Vec<i64> = stats
        .recent_transactions
        .iter()
        .map(|t| t.transaction.sequence_number)
        .collect();
    assert_eq!(recent, vec![7, 6, 5, 4, 3]);
    assert!(
        stats.recent_transactions[0]
            .details
            .iter()
            .all(|d| d.account.is_some())
    );

    assert_eq!(
        stats.accounts_by_type,
        vec![bucket(Some("Asset"), 2), bucket(Some("Equity"), 1)]
    );
}

#[tokio::test]
async fn test_dangling_type_bucket() {
    let db = common::setup_db().await;
    let asset = common::create_type(&db, "Asset").await;
    common::create_type(&db, "Equity").await;
    common::create_account(&db, "Cash", "Asset").await;
    common::create_account(&db, "Capital", "Equity").await;

    AccountTypeRepository::new(db.clone()).delete(asset.id).await.unwrap();

    let stats = DashboardRepository::new(db).get_stats().await.unwrap();
    assert_eq!(stats.counts.total_account_types, 1);
    assert_eq!(
        stats.accounts_by_type,
        vec![bucket(Some("Equity"), 1), bucket(None, 1)]
    );
}

#[tokio::test]
async fn test_accounts_summary() {
    let db = common::setup_db().await;
    let asset = common::create_type(&db, "Asset").await;
    let cash = common::create_account(&db, "Cash", "Asset").await;
    common::create_account(&db, "Bank", "Asset").await;

    let summary = DashboardRepository::new(db).get_accounts_summary().await.unwrap();

    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].id.into_inner(), cash.account.id);
    assert_eq!(summary[0].sequence_number, 1);
    assert_eq!(summary[0].name, "Cash");
    assert_eq!(
        summary[0].account_type.as_ref().map(|t| t.id.into_inner()),
        Some(asset.id)
    );
    assert_eq!(summary[1].name, "Bank");
    assert!(!summary[1].is_owner_account);
}
