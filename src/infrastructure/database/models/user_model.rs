use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::infrastructure::database::schema::users;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserModel {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub current_summary_text: Option<String>,
    pub current_pdf_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUserModel {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub current_summary_text: Option<String>,
    pub current_pdf_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for NewUserModel {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            password_hash: user.password_hash().to_string(),
            current_summary_text: user.current_summary().map(str::to_string),
            current_pdf_name: user.current_pdf_name().map(str::to_string),
            created_at: user.created_at(),
        }
    }
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::from_parts(
            model.id,
            model.username,
            model.password_hash,
            model.current_summary_text,
            model.current_pdf_name,
            model.created_at,
        )
    }
}
