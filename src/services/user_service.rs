use serde::Deserialize;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::User;

/// Partial profile edit: absent fields retain their prior values
#[derive(Debug, Default, Deserialize)]
pub struct EditUser {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Credentials taken")]
    EmailTaken,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn edit_by_id(&self, user_id: Uuid, edit: EditUser) -> Result<User, UserError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET \
                email = COALESCE($2, email), \
                first_name = COALESCE($3, first_name), \
                last_name = COALESCE($4, last_name), \
                updated_at = now() \
             WHERE id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(&edit.email)
        .bind(&edit.first_name)
        .bind(&edit.last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => UserError::EmailTaken,
            other => UserError::Database(other),
        })?
        .ok_or(UserError::NotFound)
    }
}
