//! Runs against a real Postgres. Point `DATABASE_URL` at a scratch database
//! and run with `--ignored`.

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use sea_orm_migration::MigratorTrait;
use tokio::sync::{Mutex, MutexGuard};

use joyeria_backend::{
    db::dao::{LoginSecurityDao, LoginThrottle},
    migration::Migrator,
};

// The tests share one schema, so they take turns.
static SCHEMA_LOCK: Mutex<()> = Mutex::const_new(());

async fn connect() -> (MutexGuard<'static, ()>, DatabaseConnection) {
    let guard = SCHEMA_LOCK.lock().await;
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = Database::connect(url).await.expect("connect to database");
    (guard, db)
}

async fn column_count(db: &DatabaseConnection, table: &str) -> i64 {
    let row = db
        .query_one_raw(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT COUNT(*) AS n FROM information_schema.columns WHERE table_name = $1",
            [table.into()],
        ))
        .await
        .expect("count columns")
        .expect("count row");
    row.try_get("", "n").expect("count value")
}

async fn reset(db: &DatabaseConnection) {
    Migrator::reset(db).await.expect("reset migrations");
}

async fn migrated() -> (MutexGuard<'static, ()>, DatabaseConnection) {
    let (guard, db) = connect().await;
    reset(&db).await;
    Migrator::up(&db, None).await.expect("up");
    (guard, db)
}

const THROTTLE: LoginThrottle = LoginThrottle {
    max_attempts: 3,
    lockout_secs: 600,
};

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn migrations_rerun_without_changing_schema() {
    let (_guard, db) = connect().await;
    reset(&db).await;

    Migrator::up(&db, None).await.expect("first up");
    let usuarios = column_count(&db, "usuarios").await;
    let login_security = column_count(&db, "login_security").await;

    // Forget the history so every script runs again against the live schema.
    db.execute_unprepared("DELETE FROM seaql_migrations")
        .await
        .expect("clear migration history");
    Migrator::up(&db, None).await.expect("second up");

    Migrator::down(&db, Some(2)).await.expect("down two");
    Migrator::up(&db, None).await.expect("third up");

    assert_eq!(column_count(&db, "usuarios").await, usuarios);
    assert_eq!(column_count(&db, "login_security").await, login_security);
    assert!(Migrator::get_pending_migrations(&db).await.expect("pending").is_empty());
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn login_security_email_is_unique() {
    let (_guard, db) = connect().await;
    reset(&db).await;
    Migrator::up(&db, None).await.expect("up");

    let insert = "INSERT INTO login_security (email, login_attempts) VALUES ('dup@joyeria.test', 0)";
    db.execute_unprepared(insert).await.expect("first insert");
    let err = db
        .execute_unprepared(insert)
        .await
        .expect_err("duplicate email should violate the unique constraint");
    assert!(err.to_string().contains("duplicate key"), "unexpected error: {err}");
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn add_last_activity_keeps_existing_column_and_data() {
    let (_guard, db) = connect().await;
    reset(&db).await;
    Migrator::up(&db, Some(2)).await.expect("up to last_activity");

    db.execute_unprepared(
        "INSERT INTO usuarios (id, nombre, email, password_hash, rol, last_activity) \
         VALUES ('00000000-0000-0000-0000-000000000001', 'Ana', 'ana@joyeria.test', 'x', 'cliente', \
         TIMESTAMP '2024-05-01 10:00:00')",
    )
    .await
    .expect("seed user");

    db.execute_unprepared(
        "DELETE FROM seaql_migrations \
         WHERE version = 'm20240610_000002_add_last_activity_to_usuarios'",
    )
    .await
    .expect("forget last_activity migration");
    Migrator::up(&db, Some(1)).await.expect("re-run last_activity");

    let row = db
        .query_one_raw(Statement::from_string(
            DbBackend::Postgres,
            "SELECT to_char(last_activity, 'YYYY-MM-DD HH24:MI:SS') AS seen FROM usuarios \
             WHERE email = 'ana@joyeria.test'",
        ))
        .await
        .expect("select user")
        .expect("user row");
    let seen: String = row.try_get("", "seen").expect("seen value");
    assert_eq!(seen, "2024-05-01 10:00:00");
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn failures_count_up_to_the_limit_then_block() {
    let (_guard, db) = migrated().await;
    let dao = LoginSecurityDao::new(&db);
    let email = "lock@joyeria.test";

    for expected in 1..THROTTLE.max_attempts as i32 {
        let status = dao.record_failure(email, THROTTLE).await.expect("record failure");
        assert_eq!(status.attempts, expected);
        assert!(!status.is_blocked);
        assert!(status.blocked_until.is_none());
    }

    let status = dao.record_failure(email, THROTTLE).await.expect("record failure");
    assert_eq!(status.attempts, THROTTLE.max_attempts as i32);
    assert!(status.is_blocked);
    assert!(status.blocked_until.is_some());
    assert!(dao.status(email).await.expect("status").is_blocked);
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn expired_block_restarts_count_at_one() {
    let (_guard, db) = migrated().await;
    let dao = LoginSecurityDao::new(&db);
    let email = "expired@joyeria.test";

    for _ in 0..THROTTLE.max_attempts {
        dao.record_failure(email, THROTTLE).await.expect("record failure");
    }
    db.execute_unprepared(
        "UPDATE login_security SET login_blocked_until = NOW() - INTERVAL '1 second' \
         WHERE email = 'expired@joyeria.test'",
    )
    .await
    .expect("expire block");

    let status = dao.status(email).await.expect("status");
    assert!(!status.is_blocked);

    let status = dao.record_failure(email, THROTTLE).await.expect("record failure");
    assert_eq!(status.attempts, 1);
    assert!(status.blocked_until.is_none());
    assert!(!status.is_blocked);
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn success_clears_attempts_and_block() {
    let (_guard, db) = migrated().await;
    let dao = LoginSecurityDao::new(&db);
    let email = "clear@joyeria.test";

    for _ in 0..THROTTLE.max_attempts {
        dao.record_failure(email, THROTTLE).await.expect("record failure");
    }
    dao.record_success(email).await.expect("record success");

    let record = dao
        .find_by_email(email)
        .await
        .expect("find")
        .expect("row is kept");
    assert_eq!(record.login_attempts, 0);
    assert!(record.login_blocked_until.is_none());
    assert!(!dao.status(email).await.expect("status").is_blocked);

    dao.record_success("nadie@joyeria.test").await.expect("record success");
    assert!(dao.find_by_email("nadie@joyeria.test").await.expect("find").is_none());
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn concurrent_failures_are_all_counted() {
    const CALLERS: i32 = 40;
    let (_guard, db) = migrated().await;
    let dao = LoginSecurityDao::new(&db);
    let email = "race@joyeria.test";
    let throttle = LoginThrottle {
        max_attempts: 1_000,
        lockout_secs: 600,
    };

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..CALLERS {
        let dao = dao.clone();
        tasks.spawn(async move { dao.record_failure(email, throttle).await });
    }
    let mut seen = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let status = joined.expect("task").expect("record failure");
        seen.push(status.attempts);
    }

    // Every caller observed its own increment.
    seen.sort_unstable();
    assert_eq!(seen, (1..=CALLERS).collect::<Vec<_>>());
    assert_eq!(dao.status(email).await.expect("status").attempts, CALLERS);
}
