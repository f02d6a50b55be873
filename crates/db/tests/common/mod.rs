//! Shared setup for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use cashflow_db::entities::account_types;
use cashflow_db::migration::{Migrator, MigratorTrait};
use cashflow_db::repositories::{
    AccountRepository, AccountTypeRepository, AccountWithType, CreateAccountInput,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use uuid::Uuid;

/// Opens a fresh in-memory SQLite database with the schema applied.
///
/// The pool is pinned to one connection; each connection to `sqlite::memory:`
/// is its own database.
pub async fn setup_db() -> DatabaseConnection {
    connect_migrated("sqlite::memory:", 1).await
}

/// File-backed SQLite database shared by several pooled connections.
///
/// The database files are removed on drop.
pub struct PooledDb {
    /// Connection pool.
    pub db: DatabaseConnection,
    path: PathBuf,
}

impl Drop for PooledDb {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", self.path.display()));
        }
    }
}

/// Opens a migrated file-backed SQLite database with `connections` pooled
/// connections, so queries really run side by side.
pub async fn setup_pooled_db(connections: u32) -> PooledDb {
    let path = std::env::temp_dir().join(format!("cashflow-test-{}.db", Uuid::new_v4()));
    let url = format!("sqlite://{}?mode=rwc", path.display());

    PooledDb {
        db: connect_migrated(&url, connections).await,
        path,
    }
}

async fn connect_migrated(url: &str, connections: u32) -> DatabaseConnection {
    let mut options = ConnectOptions::new(url);
    options
        .max_connections(connections)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Creates an account type and returns it.
pub async fn create_type(db: &DatabaseConnection, name: &str) -> account_types::Model {
    AccountTypeRepository::new(db.clone())
        .create(name)
        .await
        .expect("Failed to create account type")
}

/// Creates an account of the named type.
pub async fn create_account(
    db: &DatabaseConnection,
    name: &str,
    type_name: &str,
) -> AccountWithType {
    AccountRepository::new(db.clone())
        .create(CreateAccountInput::new(name, type_name))
        .await
        .expect("Failed to create account")
}
