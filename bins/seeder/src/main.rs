//! Database seeder for Cashflow.
//!
//! Seeds the standard account types. Types that already exist are skipped,
//! so the seeder can be re-run safely.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use cashflow_db::repositories::AccountTypeRepository;
use cashflow_shared::{AppConfig, telemetry};
use tracing::info;

/// Account types every new ledger starts with.
const DEFAULT_ACCOUNT_TYPES: [&str; 5] = ["Asset", "Liability", "Equity", "Revenue", "Expense"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    telemetry::init(&config.logging)?;

    let db = cashflow_db::connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;

    let repo = AccountTypeRepository::new(db);
    let mut created = 0;

    for name in DEFAULT_ACCOUNT_TYPES {
        if repo.find_by_name(name).await?.is_some() {
            info!(name, "Account type exists, skipping");
            continue;
        }
        repo.create(name).await?;
        created += 1;
    }

    info!(created, "Seeding complete");
    Ok(())
}
