use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::auth::password::{PasswordScheme, Sha256Scheme};
use crate::auth::{self, Claims};
use crate::config;
use crate::database::models::User;

#[derive(Debug, serde::Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signed, expiring identity issued on signup/signin
#[derive(Debug, serde::Serialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    // Uniform for unknown email and wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Credentials taken")]
    EmailTaken,

    #[error("Token error: {0}")]
    Token(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Auth as a capability: credential verification and session issuance
/// behind one seam, so the transport layer never touches hashes or keys.
#[async_trait]
pub trait AuthCapability: Send + Sync {
    async fn signup(&self, credentials: Credentials) -> Result<Session, AuthError>;
    async fn signin(&self, credentials: Credentials) -> Result<Session, AuthError>;
}

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    scheme: Arc<dyn PasswordScheme>,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self::with_scheme(pool, Arc::new(Sha256Scheme))
    }

    pub fn with_scheme(pool: PgPool, scheme: Arc<dyn PasswordScheme>) -> Self {
        Self { pool, scheme }
    }

    fn issue_session(&self, user: &User) -> Result<Session, AuthError> {
        let claims = Claims::new(user.id, user.email.clone());
        let access_token =
            auth::generate_jwt(&claims).map_err(|e| AuthError::Token(e.to_string()))?;

        Ok(Session {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: config::config().security.jwt_expiry_hours * 3600,
        })
    }
}

#[async_trait]
impl AuthCapability for AuthService {
    async fn signup(&self, credentials: Credentials) -> Result<Session, AuthError> {
        let password_hash = self.scheme.hash(&credentials.password);

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(&credentials.email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::EmailTaken,
            other => AuthError::Database(other),
        })?;

        info!("Registered user {}", user.id);
        self.issue_session(&user)
    }

    async fn signin(&self, credentials: Credentials) -> Result<Session, AuthError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(&credentials.email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.scheme.verify(&credentials.password, &user.password_hash) {
            warn!("Failed signin attempt for user {}", user.id);
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_session(&user)
    }
}
