use chrono::NaiveDateTime;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::Usuario, usuario};

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = Usuario;
    const ENTITY_NAME: &'static str = "usuario";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<usuario::Model>> {
        let email = email.to_string();
        self.find(1, 1, None, move |query| {
            query.filter(usuario::Column::Email.eq(email))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    pub async fn set_security_question(
        &self,
        id: &Uuid,
        question: &str,
        answer_hash: &str,
    ) -> DaoResult<usuario::Model> {
        let question = question.to_string();
        let answer_hash = answer_hash.to_string();
        self.update(*id, move |active| {
            active.pregunta_seguridad = Set(Some(question));
            active.respuesta_seguridad = Set(Some(answer_hash));
        })
        .await
    }

    pub async fn set_password_hash(&self, id: &Uuid, password_hash: &str) -> DaoResult<()> {
        let password_hash = password_hash.to_string();
        self.update(*id, move |active| {
            active.password_hash = Set(password_hash);
        })
        .await
        .map(|_| ())
    }

    pub async fn touch_last_activity(&self, id: &Uuid, at: &NaiveDateTime) -> DaoResult<()> {
        let at = *at;
        self.update(*id, move |active| {
            active.last_activity = Set(Some(at));
        })
        .await
        .map(|_| ())
    }
}
