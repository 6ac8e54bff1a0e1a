//! CRUD handlers for monsters.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    api::handlers::{delete_owned, update_owned},
    api::models::{
        monsters::{MonsterCreate, MonsterResponse, MonsterUpdate},
        users::CurrentUser,
    },
    db::{
        handlers::{Monsters, Repository},
        models::monsters::{MonsterCreateDBRequest, MonsterUpdateDBRequest},
    },
    errors::Error,
    types::MonsterId,
    AppState,
};

/// Create a monster owned by the acting user
#[utoipa::path(
    post,
    path = "/monsters",
    tag = "monsters",
    request_body = MonsterCreate,
    responses(
        (status = 201, description = "Monster created", body = MonsterResponse),
        (status = 400, description = "Invalid monster data"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn create_monster(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(request): Json<MonsterCreate>,
) -> Result<(StatusCode, Json<MonsterResponse>), Error> {
    request.validate().map_err(|e| Error::BadRequest { message: e.to_string() })?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Monsters::new(&mut pool_conn);

    let created = repo.create(&MonsterCreateDBRequest::new(current_user.id, request)).await?;

    Ok((StatusCode::CREATED, Json(MonsterResponse::from(created))))
}

/// List every monster, regardless of owner
#[utoipa::path(
    get,
    path = "/monsters",
    tag = "monsters",
    responses(
        (status = 200, description = "All monsters", body = [MonsterResponse]),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn list_monsters(State(state): State<AppState>, _current_user: CurrentUser) -> Result<Json<Vec<MonsterResponse>>, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Monsters::new(&mut pool_conn);

    let monsters = repo.list().await?;
    Ok(Json(monsters.into_iter().map(MonsterResponse::from).collect()))
}

/// Get a monster by id
#[utoipa::path(
    get,
    path = "/monsters/{id}",
    tag = "monsters",
    params(("id" = uuid::Uuid, Path, description = "Monster ID")),
    responses(
        (status = 200, description = "The monster", body = MonsterResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Monster not found"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_monster(
    State(state): State<AppState>,
    Path(id): Path<MonsterId>,
    _current_user: CurrentUser,
) -> Result<Json<MonsterResponse>, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Monsters::new(&mut pool_conn);

    let monster = repo.get_by_id(id).await?.ok_or_else(|| Error::NotFound {
        resource: "Monster".to_string(),
        id: id.to_string(),
    })?;

    Ok(Json(MonsterResponse::from(monster)))
}

/// Overwrite a monster's mutable fields (owner only)
#[utoipa::path(
    put,
    path = "/monsters/{id}",
    tag = "monsters",
    params(("id" = uuid::Uuid, Path, description = "Monster ID")),
    request_body = MonsterUpdate,
    responses(
        (status = 200, description = "Updated monster", body = MonsterResponse),
        (status = 400, description = "Invalid monster data"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the owner"),
        (status = 404, description = "Monster not found"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_monster(
    State(state): State<AppState>,
    Path(id): Path<MonsterId>,
    current_user: CurrentUser,
    Json(request): Json<MonsterUpdate>,
) -> Result<Json<MonsterResponse>, Error> {
    request.validate().map_err(|e| Error::BadRequest { message: e.to_string() })?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Monsters::new(&mut pool_conn);

    let updated = update_owned(&mut repo, id, &MonsterUpdateDBRequest::from(request), &current_user, "Monster").await?;

    Ok(Json(MonsterResponse::from(updated)))
}

/// Permanently delete a monster (owner only)
#[utoipa::path(
    delete,
    path = "/monsters/{id}",
    tag = "monsters",
    params(("id" = uuid::Uuid, Path, description = "Monster ID")),
    responses(
        (status = 204, description = "Monster deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the owner"),
        (status = 404, description = "Monster not found"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_monster(
    State(state): State<AppState>,
    Path(id): Path<MonsterId>,
    current_user: CurrentUser,
) -> Result<StatusCode, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Monsters::new(&mut pool_conn);

    delete_owned(&mut repo, id, &current_user, "Monster").await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_user, session_cookie, test_server};
    use sqlx::PgPool;

    fn sample_payload() -> MonsterCreate {
        MonsterCreate {
            name: "Owlbear".to_string(),
            total_hp: 59,
            current_hp: 59,
            armor_class: 13,
            description: "A cross between a giant owl and a bear.".to_string(),
        }
    }

    #[sqlx::test]
    async fn test_monster_crud_round_trip(pool: PgPool) {
        let (server, state) = test_server(pool.clone()).await;
        let user = create_test_user(&pool, "monster_crud").await;
        let cookie = session_cookie(&user, &state.config);

        let created = server
            .post("/api/v1/monsters")
            .add_header(axum::http::header::COOKIE, cookie.clone())
            .json(&sample_payload())
            .await;
        created.assert_status(axum::http::StatusCode::CREATED);
        let created: MonsterResponse = created.json();

        let update = MonsterUpdate {
            name: "Owlbear Matriarch".to_string(),
            total_hp: 72,
            current_hp: 60,
            armor_class: 14,
            description: "Bigger, angrier.".to_string(),
        };
        let updated = server
            .put(&format!("/api/v1/monsters/{}", created.id))
            .add_header(axum::http::header::COOKIE, cookie.clone())
            .json(&update)
            .await;
        updated.assert_status_ok();

        let fetched = server
            .get(&format!("/api/v1/monsters/{}", created.id))
            .add_header(axum::http::header::COOKIE, cookie.clone())
            .await;
        let fetched: MonsterResponse = fetched.json();
        assert_eq!(fetched.name, "Owlbear Matriarch");
        assert_eq!(fetched.current_hp, 60);

        let deleted = server
            .delete(&format!("/api/v1/monsters/{}", created.id))
            .add_header(axum::http::header::COOKIE, cookie.clone())
            .await;
        deleted.assert_status(axum::http::StatusCode::NO_CONTENT);

        let missing = server
            .get(&format!("/api/v1/monsters/{}", created.id))
            .add_header(axum::http::header::COOKIE, cookie)
            .await;
        missing.assert_status(axum::http::StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    async fn test_non_owner_mutation_is_forbidden(pool: PgPool) {
        let (server, state) = test_server(pool.clone()).await;
        let owner = create_test_user(&pool, "monster_owner").await;
        let intruder = create_test_user(&pool, "monster_intruder").await;

        let created = server
            .post("/api/v1/monsters")
            .add_header(axum::http::header::COOKIE, session_cookie(&owner, &state.config))
            .json(&sample_payload())
            .await;
        let created: MonsterResponse = created.json();

        let intruder_cookie = session_cookie(&intruder, &state.config);
        let update = server
            .put(&format!("/api/v1/monsters/{}", created.id))
            .add_header(axum::http::header::COOKIE, intruder_cookie.clone())
            .json(&MonsterUpdate {
                name: "Stolen".to_string(),
                total_hp: 1,
                current_hp: 1,
                armor_class: 1,
                description: "nope".to_string(),
            })
            .await;
        update.assert_status(axum::http::StatusCode::FORBIDDEN);

        let delete = server
            .delete(&format!("/api/v1/monsters/{}", created.id))
            .add_header(axum::http::header::COOKIE, intruder_cookie)
            .await;
        delete.assert_status(axum::http::StatusCode::FORBIDDEN);
    }
}
