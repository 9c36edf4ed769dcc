use serde::Deserialize;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::Bookmark;

#[derive(Debug, Deserialize)]
pub struct CreateBookmark {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

/// Partial update: absent fields retain their prior values
#[derive(Debug, Default, Deserialize)]
pub struct EditBookmark {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Error)]
pub enum BookmarkError {
    // Covers both "record absent" and "record owned by someone else"
    #[error("Access to resource denied.")]
    AccessDenied,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Ownership-scoped CRUD over bookmark records. Every mutation carries the
/// owner id in its WHERE clause, so the ownership check and the effect are
/// one atomic statement.
#[derive(Clone)]
pub struct BookmarkService {
    pool: PgPool,
}

impl BookmarkService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        input: CreateBookmark,
    ) -> Result<Bookmark, BookmarkError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            "INSERT INTO bookmarks (user_id, title, description, link) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(owner_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.link)
        .fetch_one(&self.pool)
        .await?;

        Ok(bookmark)
    }

    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Bookmark>, BookmarkError> {
        let bookmarks = sqlx::query_as::<_, Bookmark>(
            "SELECT * FROM bookmarks WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookmarks)
    }

    /// Returns the record only if it exists AND belongs to the owner.
    /// A miss is None either way; callers cannot tell "absent" from "not yours".
    pub async fn get_by_id(
        &self,
        owner_id: Uuid,
        bookmark_id: Uuid,
    ) -> Result<Option<Bookmark>, BookmarkError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            "SELECT * FROM bookmarks WHERE id = $1 AND user_id = $2",
        )
        .bind(bookmark_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bookmark)
    }

    pub async fn edit_by_id(
        &self,
        owner_id: Uuid,
        bookmark_id: Uuid,
        edit: EditBookmark,
    ) -> Result<Bookmark, BookmarkError> {
        // Ownership filter lives inside the UPDATE itself: a concurrent
        // delete or a foreign record both yield zero rows, never a partial effect
        sqlx::query_as::<_, Bookmark>(
            "UPDATE bookmarks SET \
                title = COALESCE($3, title), \
                description = COALESCE($4, description), \
                link = COALESCE($5, link), \
                updated_at = now() \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(bookmark_id)
        .bind(owner_id)
        .bind(&edit.title)
        .bind(&edit.description)
        .bind(&edit.link)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(BookmarkError::AccessDenied)
    }

    pub async fn delete_by_id(
        &self,
        owner_id: Uuid,
        bookmark_id: Uuid,
    ) -> Result<(), BookmarkError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1 AND user_id = $2")
            .bind(bookmark_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(BookmarkError::AccessDenied);
        }

        Ok(())
    }
}
