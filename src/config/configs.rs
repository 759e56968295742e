use anyhow::{Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub database: Option<DatabaseConfig>,
    pub auth: AuthConfig,
    pub login_security: LoginSecurityConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }
}

impl EnvConfig for AppConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT as u16,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_db_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_db_min_idle")]
    pub min_idle: u32,
    #[serde(default)]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub access_token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            access_token_ttl_secs: defaults::DEFAULT_ACCESS_TOKEN_TTL_SECS as u64,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoginSecurityConfig {
    /// Failed attempts that trigger a block.
    pub max_attempts: u32,
    pub lockout_secs: u64,
}

impl Default for LoginSecurityConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::DEFAULT_MAX_LOGIN_ATTEMPTS as u32,
            lockout_secs: defaults::DEFAULT_LOCKOUT_SECS as u64,
        }
    }
}

/// Connection settings for the `migrate` binary, read from `DB_HOST`,
/// `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_PORT` and `DB_SSLMODE`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScriptDbConfig {
    pub host: String,
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub name: String,
    #[serde(default = "default_script_db_port")]
    pub port: u16,
    #[serde(default = "default_script_db_sslmode")]
    pub sslmode: String,
}

impl EnvConfig for ScriptDbConfig {
    const PREFIX: &'static str = "DB";
    // Keep passwords such as "0123" verbatim.
    const TRY_PARSING: bool = false;

    fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.host.trim().is_empty() {
            missing.push("DB_HOST");
        }
        if self.user.trim().is_empty() {
            missing.push("DB_USER");
        }
        if self.name.trim().is_empty() {
            missing.push("DB_NAME");
        }
        if !missing.is_empty() {
            anyhow::bail!("missing database settings: {}", missing.join(", "));
        }
        Ok(())
    }
}

impl ScriptDbConfig {
    pub fn url(&self) -> Result<String> {
        let mut url = Url::parse("postgres://localhost").context("base postgres url")?;
        url.set_host(Some(self.host.trim()))
            .context("DB_HOST is not a valid host")?;
        url.set_port(Some(self.port))
            .map_err(|_| anyhow::anyhow!("DB_PORT cannot be set on this url"))?;
        url.set_username(self.user.trim())
            .map_err(|_| anyhow::anyhow!("DB_USER cannot be set on this url"))?;
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|_| anyhow::anyhow!("DB_PASSWORD cannot be set on this url"))?;
        }
        url.set_path(self.name.trim());
        url.query_pairs_mut().append_pair("sslmode", &self.sslmode);
        Ok(url.into())
    }
}

fn default_db_max_connections() -> u32 {
    defaults::DEFAULT_DB_MAX_CONNECTIONS as u32
}

fn default_db_min_idle() -> u32 {
    defaults::DEFAULT_DB_MIN_IDLE as u32
}

fn default_script_db_port() -> u16 {
    defaults::DEFAULT_SCRIPT_DB_PORT as u16
}

fn default_script_db_sslmode() -> String {
    defaults::DEFAULT_SCRIPT_DB_SSLMODE.to_string()
}
