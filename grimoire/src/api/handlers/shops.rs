//! CRUD handlers for shops.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    api::handlers::{delete_owned, update_owned},
    api::models::{
        shops::{ShopCreate, ShopResponse, ShopUpdate},
        users::CurrentUser,
    },
    db::{
        handlers::{Repository, Shops},
        models::shops::{ShopCreateDBRequest, ShopUpdateDBRequest},
    },
    errors::Error,
    types::ShopId,
    AppState,
};

/// Create a shop owned by the acting user
#[utoipa::path(
    post,
    path = "/shops",
    tag = "shops",
    request_body = ShopCreate,
    responses(
        (status = 201, description = "Shop created", body = ShopResponse),
        (status = 400, description = "Invalid shop data"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn create_shop(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(request): Json<ShopCreate>,
) -> Result<(StatusCode, Json<ShopResponse>), Error> {
    request.validate().map_err(|e| Error::BadRequest { message: e.to_string() })?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Shops::new(&mut pool_conn);

    let created = repo.create(&ShopCreateDBRequest::new(current_user.id, request)).await?;

    Ok((StatusCode::CREATED, Json(ShopResponse::from(created))))
}

/// List every shop, regardless of owner
#[utoipa::path(
    get,
    path = "/shops",
    tag = "shops",
    responses(
        (status = 200, description = "All shops", body = [ShopResponse]),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn list_shops(State(state): State<AppState>, _current_user: CurrentUser) -> Result<Json<Vec<ShopResponse>>, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Shops::new(&mut pool_conn);

    let shops = repo.list().await?;
    Ok(Json(shops.into_iter().map(ShopResponse::from).collect()))
}

/// Get a shop by id
#[utoipa::path(
    get,
    path = "/shops/{id}",
    tag = "shops",
    params(("id" = uuid::Uuid, Path, description = "Shop ID")),
    responses(
        (status = 200, description = "The shop", body = ShopResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Shop not found"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_shop(State(state): State<AppState>, Path(id): Path<ShopId>, _current_user: CurrentUser) -> Result<Json<ShopResponse>, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Shops::new(&mut pool_conn);

    let shop = repo.get_by_id(id).await?.ok_or_else(|| Error::NotFound {
        resource: "Shop".to_string(),
        id: id.to_string(),
    })?;

    Ok(Json(ShopResponse::from(shop)))
}

/// Overwrite a shop's mutable fields (owner only)
#[utoipa::path(
    put,
    path = "/shops/{id}",
    tag = "shops",
    params(("id" = uuid::Uuid, Path, description = "Shop ID")),
    request_body = ShopUpdate,
    responses(
        (status = 200, description = "Updated shop", body = ShopResponse),
        (status = 400, description = "Invalid shop data"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the owner"),
        (status = 404, description = "Shop not found"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_shop(
    State(state): State<AppState>,
    Path(id): Path<ShopId>,
    current_user: CurrentUser,
    Json(request): Json<ShopUpdate>,
) -> Result<Json<ShopResponse>, Error> {
    request.validate().map_err(|e| Error::BadRequest { message: e.to_string() })?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Shops::new(&mut pool_conn);

    let updated = update_owned(&mut repo, id, &ShopUpdateDBRequest::from(request), &current_user, "Shop").await?;

    Ok(Json(ShopResponse::from(updated)))
}

/// Permanently delete a shop (owner only)
#[utoipa::path(
    delete,
    path = "/shops/{id}",
    tag = "shops",
    params(("id" = uuid::Uuid, Path, description = "Shop ID")),
    responses(
        (status = 204, description = "Shop deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the owner"),
        (status = 404, description = "Shop not found"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_shop(State(state): State<AppState>, Path(id): Path<ShopId>, current_user: CurrentUser) -> Result<StatusCode, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Shops::new(&mut pool_conn);

    delete_owned(&mut repo, id, &current_user, "Shop").await?;

    Ok(StatusCode::NO_CONTENT)
}
