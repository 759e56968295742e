use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

pub(crate) const UP_SQL: &str = r#"
ALTER TABLE usuarios ADD COLUMN IF NOT EXISTS last_activity TIMESTAMP DEFAULT NOW();
CREATE INDEX IF NOT EXISTS idx_usuarios_last_activity
    ON usuarios (last_activity)
    WHERE activo = true;
"#;

pub(crate) const DOWN_SQL: &str = r#"
DROP INDEX IF EXISTS idx_usuarios_last_activity;
ALTER TABLE usuarios DROP COLUMN IF EXISTS last_activity;
"#;

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
