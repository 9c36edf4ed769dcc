use axum::{extract::State, Extension, Json};

use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::user_service::EditUser;
use crate::state::AppState;

/// GET /users/me - profile of the authenticated caller
pub async fn me(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<User> {
    let user = state
        .users
        .get_by_id(auth_user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(ApiResponse::success(user))
}

/// PATCH /users - partial profile edit for the authenticated caller
pub async fn edit(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(edit): Json<EditUser>,
) -> ApiResult<User> {
    let user = state.users.edit_by_id(auth_user.user_id, edit).await?;

    Ok(ApiResponse::success(user))
}
