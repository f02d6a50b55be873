//! Party registry tests.

use cashflow_db::repositories::{CreatePartyInput, PartyError, PartyRepository, UpdatePartyInput};
use uuid::Uuid;

mod common;

fn party(name: &str) -> CreatePartyInput {
    CreatePartyInput {
        name: name.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_crud_round() {
    let db = common::setup_db().await;
    let repo = PartyRepository::new(db);

    let acme = repo
        .create(CreatePartyInput {
            name: " Acme Ltd ".into(),
            contact: Some("ops@acme.test".into()),
            address: Some("  ".into()),
        })
        .await
        .unwrap();
    assert_eq!(acme.name, "Acme Ltd");
    assert_eq!(acme.address, None);

    let updated = repo
        .update(
            acme.id,
            UpdatePartyInput {
                address: Some(Some("9 Dock Rd".into())),
                contact: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Acme Ltd");
    assert_eq!(updated.address.as_deref(), Some("9 Dock Rd"));
    assert_eq!(updated.contact, None);

    repo.delete(acme.id).await.unwrap();
    assert!(matches!(repo.get(acme.id).await, Err(PartyError::NotFound(_))));
}

#[tokio::test]
async fn test_list_sorted_by_name() {
    let db = common::setup_db().await;
    let repo = PartyRepository::new(db);

    for name in ["Zenith", "Acme", "Mercury"] {
        repo.create(party(name)).await.unwrap();
    }

    let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Acme", "Mercury", "Zenith"]);
}

#[tokio::test]
async fn test_blank_name_rejected() {
    let db = common::setup_db().await;
    let repo = PartyRepository::new(db);

    assert!(matches!(repo.create(party("")).await, Err(PartyError::Validation(_))));

    let acme = repo.create(party("Acme")).await.unwrap();
    let err = repo
        .update(
            acme.id,
            UpdatePartyInput {
                name: Some(" ".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PartyError::Validation(_)));
}

#[tokio::test]
async fn test_missing_party() {
    let db = common::setup_db().await;
    let repo = PartyRepository::new(db);

    assert!(matches!(repo.delete(Uuid::new_v4()).await, Err(PartyError::NotFound(_))));
}
