use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::repositories::{user_repository::UserRepositoryError, UserRepository};
use crate::infrastructure::database::models::{NewUserModel, UserModel};
use crate::infrastructure::database::schema::users::dsl::*;
use crate::infrastructure::database::{get_connection_from_pool, DbPool};

pub struct PostgresUserRepository {
    pool: DbPool,
}

impl PostgresUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        let new_user = NewUserModel::from(user);

        diesel::insert_into(users)
            .values(&new_user)
            .execute(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    UserRepositoryError::DuplicateUsername(user.username().to_string())
                }
                other => UserRepositoryError::DatabaseError(other.to_string()),
            })?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        let result = users
            .find(user_id)
            .first::<UserModel>(&mut conn)
            .optional()
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.map(User::from))
    }

    async fn find_by_username(&self, name: &str) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        let result = users
            .filter(username.eq(name))
            .first::<UserModel>(&mut conn)
            .optional()
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.map(User::from))
    }

    async fn update_current_document(
        &self,
        user_id: Uuid,
        summary: &str,
        pdf_name: &str,
    ) -> Result<(), UserRepositoryError> {
        let mut conn = get_connection_from_pool(&self.pool)
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        let updated = diesel::update(users.find(user_id))
            .set((
                current_summary_text.eq(summary),
                current_pdf_name.eq(pdf_name),
            ))
            .execute(&mut conn)
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if updated == 0 {
            return Err(UserRepositoryError::NotFound(user_id));
        }
        Ok(())
    }
}
