//! Account type registry tests.

use std::sync::Arc;

use cashflow_db::repositories::{AccountTypeError, AccountTypeRepository};
use cashflow_shared::AppError;
use futures::future::join_all;
use tokio::sync::Barrier;
use uuid::Uuid;

mod common;

#[tokio::test]
async fn test_create_and_list_sorted_by_name() {
    let db = common::setup_db().await;
    let repo = AccountTypeRepository::new(db);

    repo.create("Liability").await.unwrap();
    repo.create("  Asset ").await.unwrap();
    repo.create("Equity").await.unwrap();

    let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Asset", "Equity", "Liability"]);
}

#[tokio::test]
async fn test_blank_name_rejected() {
    let db = common::setup_db().await;
    let repo = AccountTypeRepository::new(db);

    let err = repo.create("   ").await.unwrap_err();
    assert!(matches!(err, AccountTypeError::Validation(_)));
}

#[tokio::test]
async fn test_duplicate_name_is_validation_error() {
    let db = common::setup_db().await;
    let repo = AccountTypeRepository::new(db);

    repo.create("Asset").await.unwrap();
    let err = repo.create("Asset").await.unwrap_err();

    assert_eq!(err.to_string(), "Account type \"Asset\" already exists");
    let app: AppError = err.into();
    assert_eq!(app.status_code(), 400);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_creates_are_validation_errors() {
    const CALLERS: usize = 10;

    let pooled = common::setup_pooled_db(8).await;
    let repo = AccountTypeRepository::new(pooled.db.clone());

    let barrier = Arc::new(Barrier::new(CALLERS));
    let handles: Vec<_> = (0..CALLERS)
        .map(|_| {
            let repo = repo.clone();
            let barrier = Arc::clone(&barrier);
            tokio::spawn(async move {
                barrier.wait().await;
                repo.create("Asset").await
            })
        })
        .collect();

    let mut created = 0;
    for joined in join_all(handles).await {
        match joined.expect("task panicked") {
            Ok(_) => created += 1,
            Err(err) => {
                assert!(
                    matches!(err, AccountTypeError::DuplicateName(ref name) if name == "Asset"),
                    "unexpected error: {err:?}"
                );
                let app: AppError = err.into();
                assert!(app.is_client_error());
            }
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_renames_to_same_name() {
    let pooled = common::setup_pooled_db(4).await;
    let repo = AccountTypeRepository::new(pooled.db.clone());

    let first = repo.create("Revenue").await.unwrap();
    let second = repo.create("Sales").await.unwrap();

    let barrier = Arc::new(Barrier::new(2));
    let handles: Vec<_> = [first.id, second.id]
        .into_iter()
        .map(|id| {
            let repo = repo.clone();
            let barrier = Arc::clone(&barrier);
            tokio::spawn(async move {
                barrier.wait().await;
                repo.update(id, Some("Income")).await
            })
        })
        .collect();

    let results: Vec<_> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked"))
        .collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, AccountTypeError::DuplicateName(_)))
    );
}

#[tokio::test]
async fn test_find_by_name() {
    let db = common::setup_db().await;
    let repo = AccountTypeRepository::new(db);

    let asset = repo.create("Asset").await.unwrap();
    assert_eq!(repo.find_by_name("Asset").await.unwrap(), Some(asset));
    assert_eq!(repo.find_by_name("asset").await.unwrap(), None);
}

#[tokio::test]
async fn test_update_renames() {
    let db = common::setup_db().await;
    let repo = AccountTypeRepository::new(db);

    let created = repo.create("Revenue").await.unwrap();
    let updated = repo.update(created.id, Some("Income")).await.unwrap();
    assert_eq!(updated.name, "Income");
    assert_eq!(repo.get(created.id).await.unwrap().name, "Income");

    // No name leaves the type untouched
    let unchanged = repo.update(created.id, None).await.unwrap();
    assert_eq!(unchanged.name, "Income");

    let err = repo.update(created.id, Some("")).await.unwrap_err();
    assert!(matches!(err, AccountTypeError::Validation(_)));
}

#[tokio::test]
async fn test_update_into_existing_name_rejected() {
    let db = common::setup_db().await;
    let repo = AccountTypeRepository::new(db);

    repo.create("Asset").await.unwrap();
    let expense = repo.create("Expense").await.unwrap();

    let err = repo.update(expense.id, Some("Asset")).await.unwrap_err();
    assert!(matches!(err, AccountTypeError::DuplicateName(name) if name == "Asset"));
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let db = common::setup_db().await;
    let repo = AccountTypeRepository::new(db);
    let missing = Uuid::new_v4();

    assert!(matches!(
        repo.get(missing).await,
        Err(AccountTypeError::NotFound(id)) if id == missing
    ));
    assert!(matches!(
        repo.update(missing, Some("X")).await,
        Err(AccountTypeError::NotFound(_))
    ));
    assert!(matches!(
        repo.delete(missing).await,
        Err(AccountTypeError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_leaves_accounts_dangling() {
    let db = common::setup_db().await;
    let repo = AccountTypeRepository::new(db.clone());

    let asset = common::create_type(&db, "Asset").await;
    let cash = common::create_account(&db, "Cash", "Asset").await;

    repo.delete(asset.id).await.unwrap();

    let accounts = cashflow_db::AccountRepository::new(db);
    let reloaded = accounts.get(cash.account.id).await.unwrap();
    assert_eq!(reloaded.account.account_type_id, asset.id);
    assert!(reloaded.account_type.is_none());
}
