use sqlx::PgPool;

use crate::services::{AuthService, BookmarkService, UserService};

/// Shared application state. Services are constructed once with an explicit
/// pool handle and carried through axum State.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth: AuthService,
    pub users: UserService,
    pub bookmarks: BookmarkService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            auth: AuthService::new(pool.clone()),
            users: UserService::new(pool.clone()),
            bookmarks: BookmarkService::new(pool.clone()),
            pool,
        }
    }
}
