use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

pub(crate) const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS login_security (
    id SERIAL PRIMARY KEY,
    email VARCHAR(255) NOT NULL UNIQUE,
    login_attempts INTEGER NOT NULL DEFAULT 0,
    last_login_attempt TIMESTAMPTZ,
    login_blocked_until TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
CREATE INDEX IF NOT EXISTS idx_login_security_email ON login_security (email);
CREATE INDEX IF NOT EXISTS idx_login_security_blocked_until ON login_security (login_blocked_until);
"#;

pub(crate) const DOWN_SQL: &str = "DROP TABLE IF EXISTS login_security;";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.get_connection().execute_unprepared(UP_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.get_connection().execute_unprepared(DOWN_SQL).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DOWN_SQL, UP_SQL};
    use crate::migration::assert_guarded;

    #[test]
    fn statements_are_guarded() {
        assert_guarded(UP_SQL);
        assert_guarded(DOWN_SQL);
    }

    #[test]
    fn email_is_unique() {
        assert!(UP_SQL.contains("email VARCHAR(255) NOT NULL UNIQUE"));
    }
}
