use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::{config::DatabaseConfig, migration::Migrator};

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;

    if cfg.run_migrations {
        let pending = Migrator::get_pending_migrations(&db).await?;
        info!(pending = pending.len(), "applying pending migrations");
        Migrator::up(&db, None).await?;
    }

    Ok(db)
}
