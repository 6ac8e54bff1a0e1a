//! Profile management for the authenticated user.

use axum::{
    extract::{Multipart, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::models::users::{AccountUpdate, CurrentUser, UserResponse},
    db::{handlers::{Repository, Users}, models::users::UserUpdateDBRequest},
    errors::Error,
    AppState,
};

/// Image extensions accepted for avatar uploads
const ALLOWED_AVATAR_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/account",
    tag = "account",
    responses(
        (status = 200, description = "Current profile", body = UserResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_account(State(state): State<AppState>, current_user: CurrentUser) -> Result<Json<UserResponse>, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut user_repo = Users::new(&mut pool_conn);

    let user = user_repo.get_by_id(current_user.id).await?.ok_or_else(|| Error::Unauthenticated {
        message: Some("User not found".to_string()),
    })?;

    Ok(Json(UserResponse::from(user)))
}

/// Update the authenticated user's username and email.
///
/// Uniqueness is only re-checked for values that actually changed from the
/// stored ones, so saving the form with the current values is always allowed.
#[utoipa::path(
    put,
    path = "/account",
    tag = "account",
    request_body = AccountUpdate,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 400, description = "Invalid input or username/email already taken"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_account(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(request): Json<AccountUpdate>,
) -> Result<Json<UserResponse>, Error> {
    request.validate().map_err(|e| Error::BadRequest { message: e.to_string() })?;

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;
    let mut user_repo = Users::new(&mut tx);

    let user = user_repo.get_by_id(current_user.id).await?.ok_or_else(|| Error::Unauthenticated {
        message: Some("User not found".to_string()),
    })?;

    if request.username != user.username && user_repo.get_user_by_username(&request.username).await?.is_some() {
        return Err(Error::BadRequest {
            message: "This username is already taken".to_string(),
        });
    }
    if request.email != user.email && user_repo.get_user_by_email(&request.email).await?.is_some() {
        return Err(Error::BadRequest {
            message: "An account with this email address already exists".to_string(),
        });
    }

    let update = UserUpdateDBRequest {
        username: Some(request.username),
        email: Some(request.email),
        avatar_path: None,
    };
    let updated = user_repo.update(current_user.id, &update).await?;

    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok(Json(UserResponse::from(updated)))
}

/// Upload a profile picture.
///
/// Accepts a multipart form with an `avatar` file part (jpg or png). The file
/// is stored under a randomized name and the previous avatar, if any, is left
/// in place on disk.
#[utoipa::path(
    post,
    path = "/account/avatar",
    tag = "account",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Avatar updated", body = UserResponse),
        (status = 400, description = "Missing or unsupported image file"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn upload_avatar(
    State(state): State<AppState>,
    current_user: CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<UserResponse>, Error> {
    let mut stored_filename = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| Error::BadRequest {
        message: format!("Invalid multipart payload: {e}"),
    })? {
        if field.name() != Some("avatar") {
            continue;
        }

        let extension = field
            .file_name()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or_else(|| Error::BadRequest {
                message: "Avatar file must have an extension".to_string(),
            })?;

        if !ALLOWED_AVATAR_EXTENSIONS.contains(&extension.as_str()) {
            return Err(Error::BadRequest {
                message: format!("Unsupported avatar file type .{extension}, expected jpg or png"),
            });
        }

        let data = field.bytes().await.map_err(|e| Error::BadRequest {
            message: format!("Failed to read avatar upload: {e}"),
        })?;

        let filename = format!("{}.{extension}", Uuid::new_v4().simple());
        let dir = &state.config.uploads.avatar_dir;
        tokio::fs::create_dir_all(dir).await.map_err(|e| Error::Internal {
            operation: format!("create avatar directory: {e}"),
        })?;
        tokio::fs::write(dir.join(&filename), &data).await.map_err(|e| Error::Internal {
            operation: format!("store avatar file: {e}"),
        })?;

        stored_filename = Some(filename);
        break;
    }

    let filename = stored_filename.ok_or_else(|| Error::BadRequest {
        message: "Multipart payload did not contain an avatar file".to_string(),
    })?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut user_repo = Users::new(&mut pool_conn);

    let update = UserUpdateDBRequest {
        avatar_path: Some(filename),
        ..Default::default()
    };
    let updated = user_repo.update(current_user.id, &update).await?;

    Ok(Json(UserResponse::from(updated)))
}
