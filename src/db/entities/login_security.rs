use sea_orm::entity::prelude::*;

/// Per-email failed-login counter. `login_blocked_until = NULL` means the
/// email is not blocked.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "login_security")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub login_attempts: i32,
    pub last_login_attempt: Option<DateTimeWithTimeZone>,
    #[sea_orm(indexed)]
    pub login_blocked_until: Option<DateTimeWithTimeZone>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeWithTimeZone,
}

impl ActiveModelBehavior for ActiveModel {}
