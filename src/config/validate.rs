use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if let Some(database) = cfg.database.as_ref() {
        if database.url.trim().is_empty() {
            errors.push("database.url must not be empty".to_string());
        }

        if database.min_idle > database.max_connections {
            errors.push(format!(
                "database.min_idle ({}) must be <= database.max_connections ({})",
                database.min_idle, database.max_connections
            ));
        }
    }

    if cfg.auth.jwt_secret.trim().is_empty() {
        errors.push("auth.jwt_secret must not be empty".to_string());
    }

    if cfg.auth.access_token_ttl_secs == 0 {
        errors.push("auth.access_token_ttl_secs must be > 0".to_string());
    }

    if cfg.login_security.max_attempts == 0 {
        errors.push("login_security.max_attempts must be > 0".to_string());
    }

    if cfg.login_security.lockout_secs == 0 {
        errors.push("login_security.lockout_secs must be > 0".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::{AppConfig, DatabaseConfig};

    fn valid_config() -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.auth.jwt_secret = "unit-test-secret".to_string();
        cfg
    }

    #[test]
    fn accepts_defaults_with_secret() {
        validate(&valid_config()).expect("defaults with a secret should validate");
    }

    #[test]
    fn collects_every_problem() {
        let mut cfg = AppConfig::default();
        cfg.login_security.max_attempts = 0;
        cfg.database = Some(DatabaseConfig {
            url: "postgres://localhost/tienda".to_string(),
            max_connections: 1,
            min_idle: 4,
            run_migrations: false,
        });

        let message = validate(&cfg).expect_err("config should fail").to_string();
        assert!(message.contains("auth.jwt_secret"));
        assert!(message.contains("login_security.max_attempts"));
        assert!(message.contains("database.min_idle (4)"));
    }
}
