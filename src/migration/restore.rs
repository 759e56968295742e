use std::path::{Path, PathBuf};

use sea_orm::{ConnectionTrait, DbErr};

use super::MigrationCommandError;

pub const DEFAULT_DUMP_FILE: &str = "db/schema.sql";

const RESET_SCHEMA_SQL: &str = "DROP SCHEMA IF EXISTS public CASCADE;\n\
CREATE SCHEMA public;\n\
GRANT ALL ON SCHEMA public TO public;\n";

/// The dump that ships next to the crate manifest.
pub fn default_dump_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DUMP_FILE)
}

pub fn load_dump(path: &Path) -> Result<String, MigrationCommandError> {
    let sql = std::fs::read_to_string(path).map_err(|source| MigrationCommandError::DumpRead {
        path: path.to_path_buf(),
        source,
    })?;

    if sql.trim().is_empty() {
        return Err(MigrationCommandError::EmptyDump(path.to_path_buf()));
    }
    Ok(sql)
}

/// Schema reset followed by the dump, as one batch. Postgres runs a
/// multi-statement simple query in an implicit transaction, so a failing dump
/// leaves the previous schema in place.
pub fn restore_batch(dump_sql: &str) -> String {
    format!("{RESET_SCHEMA_SQL}{dump_sql}")
}

/// Drops every object in `public` and replays the dump. Irreversible.
pub async fn restore_schema<C>(db: &C, dump_sql: &str) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    db.execute_unprepared(&restore_batch(dump_sql)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn batch_resets_schema_before_dump() {
        let batch = restore_batch("CREATE TABLE t (id INT);");

        let drop_at = batch.find("DROP SCHEMA IF EXISTS public CASCADE").expect("drop present");
        let create_at = batch.find("CREATE SCHEMA public").expect("create present");
        let dump_at = batch.find("CREATE TABLE t").expect("dump present");
        assert!(drop_at < create_at && create_at < dump_at);
    }

    #[test]
    fn load_dump_rejects_missing_file() {
        let err = load_dump(Path::new("/nonexistent/schema.sql")).expect_err("missing file");
        assert!(matches!(err, MigrationCommandError::DumpRead { .. }));
    }

    #[test]
    fn load_dump_rejects_blank_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "   ").expect("write");

        let err = load_dump(file.path()).expect_err("blank dump");
        assert!(matches!(err, MigrationCommandError::EmptyDump(_)));
    }

    #[test]
    fn bundled_dump_is_readable() {
        let sql = load_dump(&default_dump_path()).expect("bundled dump should load");
        assert!(sql.contains("login_security"));
    }
}
