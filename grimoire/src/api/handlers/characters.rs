//! CRUD handlers for player characters.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    api::handlers::{delete_owned, update_owned},
    api::models::{
        characters::{CharacterCreate, CharacterResponse, CharacterUpdate},
        users::CurrentUser,
    },
    db::{
        handlers::{Characters, Repository},
        models::characters::{CharacterCreateDBRequest, CharacterUpdateDBRequest},
    },
    errors::Error,
    types::CharacterId,
    AppState,
};

/// Create a character owned by the acting user
#[utoipa::path(
    post,
    path = "/characters",
    tag = "characters",
    request_body = CharacterCreate,
    responses(
        (status = 201, description = "Character created", body = CharacterResponse),
        (status = 400, description = "Invalid character data"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn create_character(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(request): Json<CharacterCreate>,
) -> Result<(StatusCode, Json<CharacterResponse>), Error> {
    request.validate().map_err(|e| Error::BadRequest { message: e.to_string() })?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Characters::new(&mut pool_conn);

    let created = repo.create(&CharacterCreateDBRequest::new(current_user.id, request)).await?;

    Ok((StatusCode::CREATED, Json(CharacterResponse::from(created))))
}

/// List every character, regardless of owner
#[utoipa::path(
    get,
    path = "/characters",
    tag = "characters",
    responses(
        (status = 200, description = "All characters", body = [CharacterResponse]),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn list_characters(State(state): State<AppState>, _current_user: CurrentUser) -> Result<Json<Vec<CharacterResponse>>, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Characters::new(&mut pool_conn);

    let characters = repo.list().await?;
    Ok(Json(characters.into_iter().map(CharacterResponse::from).collect()))
}

/// Get a character by id
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = "characters",
    params(("id" = uuid::Uuid, Path, description = "Character ID")),
    responses(
        (status = 200, description = "The character", body = CharacterResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Character not found"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<CharacterId>,
    _current_user: CurrentUser,
) -> Result<Json<CharacterResponse>, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Characters::new(&mut pool_conn);

    let character = repo.get_by_id(id).await?.ok_or_else(|| Error::NotFound {
        resource: "Character".to_string(),
        id: id.to_string(),
    })?;

    Ok(Json(CharacterResponse::from(character)))
}

/// Overwrite a character's mutable fields (owner only)
#[utoipa::path(
    put,
    path = "/characters/{id}",
    tag = "characters",
    params(("id" = uuid::Uuid, Path, description = "Character ID")),
    request_body = CharacterUpdate,
    responses(
        (status = 200, description = "Updated character", body = CharacterResponse),
        (status = 400, description = "Invalid character data"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the owner"),
        (status = 404, description = "Character not found"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn update_character(
    State(state): State<AppState>,
    Path(id): Path<CharacterId>,
    current_user: CurrentUser,
    Json(request): Json<CharacterUpdate>,
) -> Result<Json<CharacterResponse>, Error> {
    request.validate().map_err(|e| Error::BadRequest { message: e.to_string() })?;

    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Characters::new(&mut pool_conn);

    let updated = update_owned(&mut repo, id, &CharacterUpdateDBRequest::from(request), &current_user, "Character").await?;

    Ok(Json(CharacterResponse::from(updated)))
}

/// Permanently delete a character (owner only)
#[utoipa::path(
    delete,
    path = "/characters/{id}",
    tag = "characters",
    params(("id" = uuid::Uuid, Path, description = "Character ID")),
    responses(
        (status = 204, description = "Character deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the owner"),
        (status = 404, description = "Character not found"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_character(
    State(state): State<AppState>,
    Path(id): Path<CharacterId>,
    current_user: CurrentUser,
) -> Result<StatusCode, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Characters::new(&mut pool_conn);

    delete_owned(&mut repo, id, &current_user, "Character").await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_user, session_cookie, test_server};
    use sqlx::PgPool;

    fn sample_payload() -> CharacterCreate {
        CharacterCreate {
            name: "Mialee".to_string(),
            total_hp: 18,
            current_hp: 18,
            armor_class: 12,
            strength: 8,
            dexterity: 14,
            constitution: 12,
            intelligence: 17,
            wisdom: 12,
            charisma: 10,
            biography: "An elven wizard chasing lost lore.".to_string(),
        }
    }

    #[sqlx::test]
    async fn test_create_then_read_returns_submitted_fields(pool: PgPool) {
        let (server, state) = test_server(pool.clone()).await;
        let user = create_test_user(&pool, "char_create").await;
        let cookie = session_cookie(&user, &state.config);

        let created = server
            .post("/api/v1/characters")
            .add_header(axum::http::header::COOKIE, cookie.clone())
            .json(&sample_payload())
            .await;
        created.assert_status(axum::http::StatusCode::CREATED);
        let created: CharacterResponse = created.json();
        assert_eq!(created.created_by, user.id);

        let fetched = server
            .get(&format!("/api/v1/characters/{}", created.id))
            .add_header(axum::http::header::COOKIE, cookie)
            .await;
        fetched.assert_status_ok();
        let fetched: CharacterResponse = fetched.json();

        assert_eq!(fetched.name, "Mialee");
        assert_eq!(fetched.total_hp, 18);
        assert_eq!(fetched.intelligence, 17);
        assert_eq!(fetched.biography, "An elven wizard chasing lost lore.");
    }

    #[sqlx::test]
    async fn test_non_owner_update_is_forbidden(pool: PgPool) {
        let (server, state) = test_server(pool.clone()).await;
        let owner = create_test_user(&pool, "char_owner").await;
        let intruder = create_test_user(&pool, "char_intruder").await;

        let created = server
            .post("/api/v1/characters")
            .add_header(axum::http::header::COOKIE, session_cookie(&owner, &state.config))
            .json(&sample_payload())
            .await;
        let created: CharacterResponse = created.json();

        let update = CharacterUpdate {
            name: "Hijacked".to_string(),
            total_hp: 1,
            current_hp: 1,
            armor_class: 1,
            strength: 1,
            dexterity: 1,
            constitution: 1,
            intelligence: 1,
            wisdom: 1,
            charisma: 1,
            biography: "gotcha".to_string(),
        };
        let response = server
            .put(&format!("/api/v1/characters/{}", created.id))
            .add_header(axum::http::header::COOKIE, session_cookie(&intruder, &state.config))
            .json(&update)
            .await;

        response.assert_status(axum::http::StatusCode::FORBIDDEN);

        // Record is untouched
        let fetched = server
            .get(&format!("/api/v1/characters/{}", created.id))
            .add_header(axum::http::header::COOKIE, session_cookie(&owner, &state.config))
            .await;
        let fetched: CharacterResponse = fetched.json();
        assert_eq!(fetched.name, "Mialee");
    }

    #[sqlx::test]
    async fn test_non_owner_delete_is_forbidden(pool: PgPool) {
        let (server, state) = test_server(pool.clone()).await;
        let owner = create_test_user(&pool, "char_del_owner").await;
        let intruder = create_test_user(&pool, "char_del_intruder").await;

        let created = server
            .post("/api/v1/characters")
            .add_header(axum::http::header::COOKIE, session_cookie(&owner, &state.config))
            .json(&sample_payload())
            .await;
        let created: CharacterResponse = created.json();

        let response = server
            .delete(&format!("/api/v1/characters/{}", created.id))
            .add_header(axum::http::header::COOKIE, session_cookie(&intruder, &state.config))
            .await;

        response.assert_status(axum::http::StatusCode::FORBIDDEN);
    }

    #[sqlx::test]
    async fn test_owner_update_overwrites_and_read_reflects_it(pool: PgPool) {
        let (server, state) = test_server(pool.clone()).await;
        let owner = create_test_user(&pool, "char_update").await;
        let cookie = session_cookie(&owner, &state.config);

        let created = server
            .post("/api/v1/characters")
            .add_header(axum::http::header::COOKIE, cookie.clone())
            .json(&sample_payload())
            .await;
        let created: CharacterResponse = created.json();

        let mut update_payload = sample_payload();
        update_payload.current_hp = 4;
        update_payload.biography = "Badly wounded by a gnoll pack.".to_string();
        let update = CharacterUpdate {
            name: update_payload.name,
            total_hp: update_payload.total_hp,
            current_hp: update_payload.current_hp,
            armor_class: update_payload.armor_class,
            strength: update_payload.strength,
            dexterity: update_payload.dexterity,
            constitution: update_payload.constitution,
            intelligence: update_payload.intelligence,
            wisdom: update_payload.wisdom,
            charisma: update_payload.charisma,
            biography: update_payload.biography,
        };

        let response = server
            .put(&format!("/api/v1/characters/{}", created.id))
            .add_header(axum::http::header::COOKIE, cookie.clone())
            .json(&update)
            .await;
        response.assert_status_ok();

        let fetched = server
            .get(&format!("/api/v1/characters/{}", created.id))
            .add_header(axum::http::header::COOKIE, cookie)
            .await;
        let fetched: CharacterResponse = fetched.json();
        assert_eq!(fetched.current_hp, 4);
        assert_eq!(fetched.biography, "Badly wounded by a gnoll pack.");
        // Unchanged fields from the payload are still intact
        assert_eq!(fetched.name, "Mialee");
    }

    #[sqlx::test]
    async fn test_delete_then_read_is_not_found(pool: PgPool) {
        let (server, state) = test_server(pool.clone()).await;
        let owner = create_test_user(&pool, "char_delete").await;
        let cookie = session_cookie(&owner, &state.config);

        let created = server
            .post("/api/v1/characters")
            .add_header(axum::http::header::COOKIE, cookie.clone())
            .json(&sample_payload())
            .await;
        let created: CharacterResponse = created.json();

        let deleted = server
            .delete(&format!("/api/v1/characters/{}", created.id))
            .add_header(axum::http::header::COOKIE, cookie.clone())
            .await;
        deleted.assert_status(axum::http::StatusCode::NO_CONTENT);

        let fetched = server
            .get(&format!("/api/v1/characters/{}", created.id))
            .add_header(axum::http::header::COOKIE, cookie)
            .await;
        fetched.assert_status(axum::http::StatusCode::NOT_FOUND);
    }

    #[sqlx::test]
    async fn test_create_rejects_empty_name(pool: PgPool) {
        let (server, state) = test_server(pool.clone()).await;
        let user = create_test_user(&pool, "char_invalid").await;

        let mut payload = sample_payload();
        payload.name = String::new();
        let response = server
            .post("/api/v1/characters")
            .add_header(axum::http::header::COOKIE, session_cookie(&user, &state.config))
            .json(&payload)
            .await;

        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }
}
