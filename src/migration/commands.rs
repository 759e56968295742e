use std::path::PathBuf;

use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use super::{Migrator, connection, restore};
use crate::config::ScriptDbConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationCommand {
    /// Apply pending migrations, all of them when `steps` is `None`.
    Up { steps: Option<u32> },
    Down { steps: u32 },
    Status,
    /// Drop the public schema and replay an SQL dump.
    Restore { file: PathBuf, confirm_destroy: bool },
}

impl MigrationCommand {
    pub fn name(&self) -> &'static str {
        match self {
            MigrationCommand::Up { .. } => "up",
            MigrationCommand::Down { .. } => "down",
            MigrationCommand::Status => "status",
            MigrationCommand::Restore { .. } => "restore",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MigrationCommandError {
    #[error("invalid database settings: {0:#}")]
    Config(anyhow::Error),
    #[error("failed to connect to database: {0:#}")]
    Connect(anyhow::Error),
    #[error(
        "refusing to restore without --confirm-destroy: every object in the public schema would be dropped"
    )]
    RestoreNotConfirmed,
    #[error("failed to read SQL dump {}: {source}", path.display())]
    DumpRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("SQL dump {} is empty", .0.display())]
    EmptyDump(PathBuf),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

/// Runs one command against its own connection:
/// connecting, executing, then disconnecting on success and failure alike.
/// Nothing is retried.
pub async fn run(
    cfg: &ScriptDbConfig,
    command: MigrationCommand,
) -> Result<(), MigrationCommandError> {
    let dump = prepare(&command)?;

    info!(host = %cfg.host, database = %cfg.name, "connecting");
    let db = connection::connect(cfg)
        .await
        .map_err(MigrationCommandError::Connect)?;

    info!(command = command.name(), "executing");
    let result = execute(&db, &command, dump.as_deref()).await;
    match &result {
        Ok(()) => info!(command = command.name(), "finished"),
        Err(err) => error!(command = command.name(), error = %err, "failed"),
    }

    if let Err(err) = db.close().await {
        warn!(error = %err, "failed to close database connection");
    }
    info!("disconnected");

    result
}

/// Checks that can fail before a connection is opened.
fn prepare(command: &MigrationCommand) -> Result<Option<String>, MigrationCommandError> {
    match command {
        MigrationCommand::Restore {
            confirm_destroy: false,
            ..
        } => Err(MigrationCommandError::RestoreNotConfirmed),
        MigrationCommand::Restore { file, .. } => restore::load_dump(file).map(Some),
        _ => Ok(None),
    }
}

pub async fn execute(
    db: &DatabaseConnection,
    command: &MigrationCommand,
    dump: Option<&str>,
) -> Result<(), MigrationCommandError> {
    match command {
        MigrationCommand::Up { steps } => {
            let pending = Migrator::get_pending_migrations(db).await?;
            if pending.is_empty() {
                info!("schema is up to date");
                return Ok(());
            }
            for migration in &pending {
                info!(migration = migration.name(), "pending");
            }
            Migrator::up(db, *steps).await?;
        }
        MigrationCommand::Down { steps } => {
            Migrator::down(db, Some(*steps)).await?;
        }
        MigrationCommand::Status => {
            for migration in Migrator::get_applied_migrations(db).await? {
                info!(migration = migration.name(), "applied");
            }
            for migration in Migrator::get_pending_migrations(db).await? {
                info!(migration = migration.name(), "pending");
            }
        }
        MigrationCommand::Restore {
            confirm_destroy, ..
        } => {
            let sql = match (confirm_destroy, dump) {
                (true, Some(sql)) => sql,
                _ => return Err(MigrationCommandError::RestoreNotConfirmed),
            };
            warn!("dropping and recreating the public schema");
            restore::restore_schema(db, sql).await?;
        }
    }
    Ok(())
}
