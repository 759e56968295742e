use sea_orm_migration::prelude::*;

pub mod cli;
pub mod commands;
pub mod connection;
mod m20240101_000001_create_usuarios;
mod m20240610_000002_add_last_activity_to_usuarios;
mod m20240610_000003_create_login_security;
pub mod restore;

pub use commands::{MigrationCommand, MigrationCommandError};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_usuarios::Migration),
            Box::new(m20240610_000002_add_last_activity_to_usuarios::Migration),
            Box::new(m20240610_000003_create_login_security::Migration),
        ]
    }
}

/// Every statement of an up/down script must carry an existence guard so a
/// second run leaves the schema untouched.
#[cfg(test)]
pub(crate) fn assert_guarded(script: &str) {
    for statement in script.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let upper = statement.to_ascii_uppercase();
        assert!(
            upper.contains("IF NOT EXISTS") || upper.contains("IF EXISTS"),
            "unguarded statement: {statement}"
        );
    }
}
