use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, QueryFilter, Set, Statement,
};

use super::{DaoLayerError, DaoResult};
use crate::db::entities::{login_security, prelude::LoginSecurity};

/// Increments the counter and arms the block in one statement, so concurrent
/// failures for the same email never lose an increment. An expired block
/// restarts the count at 1.
const RECORD_FAILURE_SQL: &str = r#"
INSERT INTO login_security
    (email, login_attempts, last_login_attempt, login_blocked_until, created_at, updated_at)
VALUES (
    $1,
    1,
    NOW(),
    CASE WHEN 1 >= $2 THEN NOW() + make_interval(secs => $3) ELSE NULL END,
    NOW(),
    NOW()
)
ON CONFLICT (email) DO UPDATE SET
    login_attempts = CASE
        WHEN login_security.login_blocked_until <= NOW() THEN 1
        ELSE login_security.login_attempts + 1
    END,
    login_blocked_until = CASE
        WHEN (CASE
            WHEN login_security.login_blocked_until <= NOW() THEN 1
            ELSE login_security.login_attempts + 1
        END) >= $2 THEN NOW() + make_interval(secs => $3)
        WHEN login_security.login_blocked_until <= NOW() THEN NULL
        ELSE login_security.login_blocked_until
    END,
    last_login_attempt = NOW(),
    updated_at = NOW()
RETURNING id, email, login_attempts, last_login_attempt, login_blocked_until, created_at, updated_at
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginThrottle {
    pub max_attempts: u32,
    pub lockout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LockoutStatus {
    pub email: String,
    pub attempts: i32,
    pub blocked_until: Option<DateTime<FixedOffset>>,
    pub is_blocked: bool,
}

impl LockoutStatus {
    pub fn clear(email: &str) -> Self {
        Self {
            email: email.to_string(),
            attempts: 0,
            blocked_until: None,
            is_blocked: false,
        }
    }

    pub fn from_record(record: &login_security::Model, now: DateTime<Utc>) -> Self {
        let blocked_until = record.login_blocked_until;
        Self {
            email: record.email.clone(),
            attempts: record.login_attempts,
            blocked_until,
            is_blocked: blocked_until.is_some_and(|until| until > now),
        }
    }
}

#[derive(Clone)]
pub struct LoginSecurityDao {
    db: DatabaseConnection,
}

impl LoginSecurityDao {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<login_security::Model>> {
        LoginSecurity::find()
            .filter(login_security::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    pub async fn status(&self, email: &str) -> DaoResult<LockoutStatus> {
        Ok(match self.find_by_email(email).await? {
            Some(record) => LockoutStatus::from_record(&record, Utc::now()),
            None => LockoutStatus::clear(email),
        })
    }

    pub async fn record_failure(
        &self,
        email: &str,
        throttle: LoginThrottle,
    ) -> DaoResult<LockoutStatus> {
        let max_attempts = i32::try_from(throttle.max_attempts).unwrap_or(i32::MAX);
        let statement = Statement::from_sql_and_values(
            DbBackend::Postgres,
            RECORD_FAILURE_SQL,
            [
                email.into(),
                max_attempts.into(),
                (throttle.lockout_secs as f64).into(),
            ],
        );

        let record = LoginSecurity::find()
            .from_raw_sql(statement)
            .one(&self.db)
            .await?
            .ok_or(DaoLayerError::Db(DbErr::RecordNotInserted))?;

        Ok(LockoutStatus::from_record(&record, Utc::now()))
    }

    /// Clears the counter and any block. No row is created for unknown emails.
    pub async fn record_success(&self, email: &str) -> DaoResult<()> {
        let now = Utc::now().fixed_offset();
        LoginSecurity::update_many()
            .set(login_security::ActiveModel {
                login_attempts: Set(0),
                login_blocked_until: Set(None),
                last_login_attempt: Set(Some(now)),
                updated_at: Set(now),
                ..Default::default()
            })
            .filter(login_security::Column::Email.eq(email))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use super::{LockoutStatus, LoginSecurityDao, LoginThrottle, RECORD_FAILURE_SQL};
    use crate::db::entities::login_security;

    const THROTTLE: LoginThrottle = LoginThrottle {
        max_attempts: 3,
        lockout_secs: 600,
    };

    fn record(
        attempts: i32,
        blocked_until: Option<chrono::DateTime<chrono::FixedOffset>>,
    ) -> login_security::Model {
        let now = Utc::now().fixed_offset();
        login_security::Model {
            id: 1,
            email: "ana@example.com".to_string(),
            login_attempts: attempts,
            last_login_attempt: Some(now),
            login_blocked_until: blocked_until,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn future_block_is_active_and_past_block_is_not() {
        let now = Utc::now();
        let blocked = record(3, Some((now + Duration::minutes(5)).fixed_offset()));
        let expired = record(3, Some((now - Duration::minutes(5)).fixed_offset()));

        assert!(LockoutStatus::from_record(&blocked, now).is_blocked);
        assert!(!LockoutStatus::from_record(&expired, now).is_blocked);
        assert!(!LockoutStatus::from_record(&record(2, None), now).is_blocked);
    }

    #[test]
    fn failure_statement_is_a_single_upsert() {
        assert!(RECORD_FAILURE_SQL.contains("ON CONFLICT (email) DO UPDATE"));
        assert!(RECORD_FAILURE_SQL.contains("RETURNING"));
    }

    #[tokio::test]
    async fn status_for_unknown_email_is_clear() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<login_security::Model>::new()])
            .into_connection();
        let dao = LoginSecurityDao::new(&db);

        let status = dao.status("nadie@example.com").await.expect("query should succeed");
        assert_eq!(status, LockoutStatus::clear("nadie@example.com"));
    }

    #[tokio::test]
    async fn record_failure_reports_block_from_returned_row() {
        let until = (Utc::now() + Duration::minutes(10)).fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[record(3, Some(until))]])
            .into_connection();
        let dao = LoginSecurityDao::new(&db);

        let status = dao
            .record_failure("ana@example.com", THROTTLE)
            .await
            .expect("upsert should succeed");
        assert_eq!(status.attempts, 3);
        assert!(status.is_blocked);
        assert_eq!(status.blocked_until, Some(until));
    }

    #[tokio::test]
    async fn record_success_issues_one_update() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let dao = LoginSecurityDao::new(&db);

        dao.record_success("ana@example.com")
            .await
            .expect("reset should succeed");
    }
}
