//! Init-db command - bootstraps the tasks table and exits

use tracing::info;

use crate::infrastructure::storage::{StorageFactory, StorageType};

/// Connect to the configured database and create the schema if missing
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    if StorageType::from_url(&config.database.url) == Some(StorageType::InMemory) {
        info!("In-memory storage selected, nothing to initialize");
        return Ok(());
    }

    StorageFactory::create_task_repository(&config.database).await?;
    info!("Database schema ready");

    Ok(())
}
