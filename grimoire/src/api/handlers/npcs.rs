//! CRUD handlers for non-player characters.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    api::handlers::{delete_owned, update_owned},
    api::models::{
        npcs::{NpcCreate, NpcResponse, NpcUpdate},
        users::CurrentUser,
    },
    db::{
        handlers::{Npcs, Repository},
        models::npcs::{NpcCreateDBRequest, NpcUpdateDBRequest},
    },
    errors::Error,
    types::NpcId,
    AppState,
};

/// Create an NPC owned by the acting user
#[utoipa::path(
    post,
    path = "/npcs",
    tag = "npcs",
    request_body = NpcCreate,
    responses(
        (status = 201, description = "NPC created", body = NpcResponse),
        (status = 400, description = "Invalid NPC data"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn create_npc(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(request): Json<NpcCreate>,
) -> Result<(StatusCode, Json<NpcResponse>), Error> {
    request.validate().map_err(|e| Error::BadRequest { message: e.to_string() })?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Npcs::new(&mut pool_conn);

    let created = repo.create(&NpcCreateDBRequest::new(current_user.id, request)).await?;

    Ok((StatusCode::CREATED, Json(NpcResponse::from(created))))
}

/// List every NPC, regardless of owner
#[utoipa::path(
    get,
    path = "/npcs",
    tag = "npcs",
    responses(
        (status = 200, description = "All NPCs", body = [NpcResponse]),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn list_npcs(State(state): State<AppState>, _current_user: CurrentUser) -> Result<Json<Vec<NpcResponse>>, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Npcs::new(&mut pool_conn);

    let npcs = repo.list().await?;
    Ok(Json(npcs.into_iter().map(NpcResponse::from).collect()))
}

/// Get an NPC by id
#[utoipa::path(
    get,
    path = "/npcs/{id}",
    tag = "npcs",
    params(("id" = uuid::Uuid, Path, description = "NPC ID")),
    responses(
        (status = 200, description = "The NPC", body = NpcResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "NPC not found"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_npc(State(state): State<AppState>, Path(id): Path<NpcId>, _current_user: CurrentUser) -> Result<Json<NpcResponse>, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Npcs::new(&mut pool_conn);

    let npc = repo.get_by_id(id).await?.ok_or_else(|| Error::NotFound {
        resource: "NPC".to_string(),
        id: id.to_string(),
    })?;

    Ok(Json(NpcResponse::from(npc)))
}

/// Overwrite an NPC's mutable fields (owner only)
#[utoipa::path(
    put,
    path = "/npcs/{id}",
    tag = "npcs",
    params(("id" = uuid::Uuid, Path, description = "NPC ID")),
    request_body = NpcUpdate,
    responses(
        (status = 200, description = "Updated NPC", body = NpcResponse),
        (status = 400, description = "Invalid NPC data"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the owner"),
        (status = 404, description = "NPC not found"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_npc(
    State(state): State<AppState>,
    Path(id): Path<NpcId>,
    current_user: CurrentUser,
    Json(request): Json<NpcUpdate>,
) -> Result<Json<NpcResponse>, Error> {
    request.validate().map_err(|e| Error::BadRequest { message: e.to_string() })?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Npcs::new(&mut pool_conn);

    let updated = update_owned(&mut repo, id, &NpcUpdateDBRequest::from(request), &current_user, "NPC").await?;

    Ok(Json(NpcResponse::from(updated)))
}

/// Permanently delete an NPC (owner only)
#[utoipa::path(
    delete,
    path = "/npcs/{id}",
    tag = "npcs",
    params(("id" = uuid::Uuid, Path, description = "NPC ID")),
    responses(
        (status = 204, description = "NPC deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the owner"),
        (status = 404, description = "NPC not found"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_npc(State(state): State<AppState>, Path(id): Path<NpcId>, current_user: CurrentUser) -> Result<StatusCode, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Npcs::new(&mut pool_conn);

    delete_owned(&mut repo, id, &current_user, "NPC").await?;

    Ok(StatusCode::NO_CONTENT)
}
