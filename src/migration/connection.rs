use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::{ScriptDbConfig, defaults::SCRIPT_CONNECT_TIMEOUT_SECS};

/// Opens the single, unpooled connection a migrate command owns for its
/// whole run. TLS is required but the server certificate is not verified.
pub async fn connect(cfg: &ScriptDbConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.url()?);
    options
        .max_connections(1)
        .connect_timeout(Duration::from_secs(SCRIPT_CONNECT_TIMEOUT_SECS))
        .sqlx_logging(false);

    Ok(Database::connect(options).await?)
}
