//! The shared battle view.

use axum::{extract::State, Json};

use crate::{
    api::models::{
        battle::BattleResponse,
        characters::CharacterResponse,
        monsters::MonsterResponse,
        users::CurrentUser,
    },
    db::handlers::{Characters, Monsters, Repository},
    errors::Error,
    AppState,
};

/// Every character and monster in one response, regardless of owner, so a
/// whole table can run an encounter from one screen.
#[utoipa::path(
    get,
    path = "/battle",
    tag = "battle",
    responses(
        (status = 200, description = "All characters and monsters", body = BattleResponse),
        (status = 401, description = "Unauthorized"),
    ),
    security(("session_token" = []))
)]
#[tracing::instrument(skip_all)]
pub async fn get_battle_view(State(state): State<AppState>, _current_user: CurrentUser) -> Result<Json<BattleResponse>, Error> {
    let mut pool_conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;

    let characters = Characters::new(&mut pool_conn).list().await?;
    let monsters = Monsters::new(&mut pool_conn).list().await?;

    Ok(Json(BattleResponse {
        characters: characters.into_iter().map(CharacterResponse::from).collect(),
        monsters: monsters.into_iter().map(MonsterResponse::from).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{characters::CharacterCreate, monsters::MonsterCreate};
    use crate::test_utils::{create_test_user, session_cookie, test_server};
    use sqlx::PgPool;

    #[sqlx::test]
    async fn test_battle_view_combines_records_across_owners(pool: PgPool) {
        let (server, state) = test_server(pool.clone()).await;
        let gm = create_test_user(&pool, "battle_gm").await;
        let player = create_test_user(&pool, "battle_player").await;

        server
            .post("/api/v1/characters")
            .add_header(axum::http::header::COOKIE, session_cookie(&player, &state.config))
            .json(&CharacterCreate {
                name: "Regdar".to_string(),
                total_hp: 30,
                current_hp: 30,
                armor_class: 17,
                strength: 16,
                dexterity: 11,
                constitution: 14,
                intelligence: 10,
                wisdom: 12,
                charisma: 13,
                biography: "Human fighter.".to_string(),
            })
            .await;

        server
            .post("/api/v1/monsters")
            .add_header(axum::http::header::COOKIE, session_cookie(&gm, &state.config))
            .json(&MonsterCreate {
                name: "Bugbear".to_string(),
                total_hp: 27,
                current_hp: 27,
                armor_class: 16,
                description: "Hairy goblinoid brute.".to_string(),
            })
            .await;

        // Either participant sees the full battle
        let response = server
            .get("/api/v1/battle")
            .add_header(axum::http::header::COOKIE, session_cookie(&player, &state.config))
            .await;
        response.assert_status_ok();

        let battle: BattleResponse = response.json();
        assert_eq!(battle.characters.len(), 1);
        assert_eq!(battle.monsters.len(), 1);
        assert_eq!(battle.characters[0].created_by, player.id);
        assert_eq!(battle.monsters[0].created_by, gm.id);
    }
}
