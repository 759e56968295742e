use sea_orm::entity::prelude::*;

use crate::db::dao::base_traits::{HasCreatedAtColumn, TimestampedActiveModel};

/// A store account. Registration happens elsewhere; this crate reads it for
/// login and writes the password, security question and activity stamp.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nombre: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub rol: String,
    #[sea_orm(default_value = true)]
    pub activo: bool,
    pub pregunta_seguridad: Option<String>,
    /// argon2 hash of the normalized answer, never the answer itself.
    pub respuesta_seguridad: Option<String>,
    pub last_activity: Option<DateTime>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeWithTimeZone,
}

impl ActiveModelBehavior for ActiveModel {}

impl TimestampedActiveModel for ActiveModel {
    fn set_updated_at(&mut self, ts: DateTimeWithTimeZone) {
        self.updated_at = sea_orm::ActiveValue::Set(ts);
    }
}

impl HasCreatedAtColumn for Entity {
    fn created_at_column() -> Column {
        Column::CreatedAt
    }
}
