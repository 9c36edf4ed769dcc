use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use crate::database::models::Bookmark;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::bookmark_service::{CreateBookmark, EditBookmark};
use crate::state::AppState;

/// POST /bookmarks - create a bookmark owned by the caller
pub async fn create(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(input): Json<CreateBookmark>,
) -> ApiResult<Bookmark> {
    let bookmark = state.bookmarks.create(auth_user.user_id, input).await?;

    Ok(ApiResponse::created(bookmark))
}

/// GET /bookmarks - all bookmarks owned by the caller
pub async fn list(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Vec<Bookmark>> {
    let bookmarks = state.bookmarks.list_by_owner(auth_user.user_id).await?;

    Ok(ApiResponse::success(bookmarks))
}

/// GET /bookmarks/:id - a single bookmark, if the caller owns it.
/// A miss is `data: null`, never a distinguishing error.
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(bookmark_id): Path<Uuid>,
) -> ApiResult<Option<Bookmark>> {
    let bookmark = state
        .bookmarks
        .get_by_id(auth_user.user_id, bookmark_id)
        .await?;

    Ok(ApiResponse::success(bookmark))
}

/// PATCH /bookmarks/:id - partial edit, owner only
pub async fn edit_by_id(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(bookmark_id): Path<Uuid>,
    Json(edit): Json<EditBookmark>,
) -> ApiResult<Bookmark> {
    let bookmark = state
        .bookmarks
        .edit_by_id(auth_user.user_id, bookmark_id, edit)
        .await?;

    Ok(ApiResponse::success(bookmark))
}

/// DELETE /bookmarks/:id - hard delete, owner only
pub async fn delete_by_id(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(bookmark_id): Path<Uuid>,
) -> ApiResult<()> {
    state
        .bookmarks
        .delete_by_id(auth_user.user_id, bookmark_id)
        .await?;

    Ok(ApiResponse::<()>::no_content())
}
