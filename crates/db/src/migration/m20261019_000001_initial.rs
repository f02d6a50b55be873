//! Initial database migration.
//!
//! Creates the bookkeeping tables. The SQL is kept portable between
//! PostgreSQL and SQLite; only the money column type differs per backend.

use sea_orm::DbBackend;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let money = money_type(manager.get_database_backend());

        // ============================================================
        // PART 1: SEQUENCE COUNTERS
        // ============================================================
        db.execute_unprepared(SEQUENCE_COUNTERS_SQL).await?;

        // ============================================================
        // PART 2: REGISTRIES
        // ============================================================
        db.execute_unprepared(ACCOUNT_TYPES_SQL).await?;
        db.execute_unprepared(ACCOUNTS_SQL).await?;
        for index in ACCOUNTS_INDEXES_SQL {
            db.execute_unprepared(index).await?;
        }
        db.execute_unprepared(PARTIES_SQL).await?;

        // ============================================================
        // PART 3: TRANSACTIONS & DETAILS
        // ============================================================
        db.execute_unprepared(&transactions_sql(money)).await?;
        db.execute_unprepared(TRANSACTIONS_INDEX_SQL).await?;
        db.execute_unprepared(&transaction_details_sql(money)).await?;
        db.execute_unprepared(TRANSACTION_DETAILS_INDEX_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for statement in DROP_ALL_SQL {
            db.execute_unprepared(statement).await?;
        }
        Ok(())
    }
}

/// Column type used for money amounts.
///
/// SQLite has no exact decimal storage; amounts round-trip through REAL there.
const fn money_type(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::Sqlite => "REAL",
        _ => "NUMERIC(19, 4)",
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const SEQUENCE_COUNTERS_SQL: &str = r"
CREATE TABLE sequence_counters (
    name VARCHAR(100) PRIMARY KEY,
    value BIGINT NOT NULL DEFAULT 0
)";

const ACCOUNT_TYPES_SQL: &str = r"
CREATE TABLE account_types (
    id UUID PRIMARY KEY,
    name VARCHAR(255) NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)";

// account_type_id has no foreign key: deleting a type leaves its accounts dangling.
const ACCOUNTS_SQL: &str = r"
CREATE TABLE accounts (
    id UUID PRIMARY KEY,
    sequence_number BIGINT NOT NULL UNIQUE,
    name VARCHAR(255) NOT NULL,
    account_type_id UUID NOT NULL,
    account_no VARCHAR(100),
    branch VARCHAR(255),
    address TEXT,
    contact VARCHAR(255),
    is_owner_account BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)";

const ACCOUNTS_INDEXES_SQL: [&str; 3] = [
    "CREATE INDEX idx_accounts_name ON accounts(name)",
    "CREATE INDEX idx_accounts_type ON accounts(account_type_id)",
    "CREATE INDEX idx_accounts_owner ON accounts(is_owner_account)",
];

const PARTIES_SQL: &str = r"
CREATE TABLE parties (
    id UUID PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    contact VARCHAR(255),
    address TEXT,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)";

fn transactions_sql(money: &str) -> String {
    format!(
        r"
CREATE TABLE transactions (
    id UUID PRIMARY KEY,
    sequence_number BIGINT NOT NULL UNIQUE,
    transaction_date DATE NOT NULL,
    total_amount {money} NOT NULL,
    status VARCHAR(20) NOT NULL DEFAULT 'completed'
        CHECK (status IN ('pending', 'completed', 'cancelled')),
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)"
    )
}

const TRANSACTIONS_INDEX_SQL: &str =
    "CREATE INDEX idx_transactions_date ON transactions(transaction_date)";

// account_id has no foreign key: deleting an account leaves its details dangling.
fn transaction_details_sql(money: &str) -> String {
    format!(
        r"
CREATE TABLE transaction_details (
    transaction_id UUID NOT NULL REFERENCES transactions(id) ON DELETE CASCADE,
    serial_no INTEGER NOT NULL CHECK (serial_no > 0),
    account_id UUID NOT NULL,
    description TEXT NOT NULL,
    amount {money} NOT NULL CHECK (amount >= 0),
    entry_type VARCHAR(10) NOT NULL CHECK (entry_type IN ('debit', 'credit')),
    PRIMARY KEY (transaction_id, serial_no)
)"
    )
}

const TRANSACTION_DETAILS_INDEX_SQL: &str =
    "CREATE INDEX idx_transaction_details_account ON transaction_details(account_id)";

const DROP_ALL_SQL: [&str; 6] = [
    "DROP TABLE IF EXISTS transaction_details",
    "DROP TABLE IF EXISTS transactions",
    "DROP TABLE IF EXISTS parties",
    "DROP TABLE IF EXISTS accounts",
    "DROP TABLE IF EXISTS account_types",
    "DROP TABLE IF EXISTS sequence_counters",
];
