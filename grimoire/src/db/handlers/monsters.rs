//! Database repository for monsters.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::monsters::{MonsterCreateDBRequest, MonsterDBResponse, MonsterUpdateDBRequest},
};
use crate::types::{abbrev_uuid, MonsterId, UserId};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub total_hp: i32,
    pub current_hp: i32,
    pub armor_class: i32,
    pub description: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Monster> for MonsterDBResponse {
    fn from(m: Monster) -> Self {
        Self {
            id: m.id,
            name: m.name,
            total_hp: m.total_hp,
            current_hp: m.current_hp,
            armor_class: m.armor_class,
            description: m.description,
            created_by: m.created_by,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub struct Monsters<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Monsters<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Monsters<'c> {
    type CreateRequest = MonsterCreateDBRequest;
    type UpdateRequest = MonsterUpdateDBRequest;
    type Response = MonsterDBResponse;
    type Id = MonsterId;

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let monster = sqlx::query_as::<_, Monster>(
            r#"
            INSERT INTO monsters (id, name, total_hp, current_hp, armor_class, description, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(request.total_hp)
        .bind(request.current_hp)
        .bind(request.armor_class)
        .bind(&request.description)
        .bind(request.created_by)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(MonsterDBResponse::from(monster))
    }

    #[instrument(skip(self), fields(monster_id = %abbrev_uuid(&id)), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let monster = sqlx::query_as::<_, Monster>("SELECT * FROM monsters WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(monster.map(MonsterDBResponse::from))
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let monsters = sqlx::query_as::<_, Monster>("SELECT * FROM monsters ORDER BY created_at")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(monsters.into_iter().map(MonsterDBResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(monster_id = %abbrev_uuid(&id)), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let monster = sqlx::query_as::<_, Monster>(
            r#"
            UPDATE monsters SET
                name = $2,
                total_hp = $3,
                current_hp = $4,
                armor_class = $5,
                description = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(request.total_hp)
        .bind(request.current_hp)
        .bind(request.armor_class)
        .bind(&request.description)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(MonsterDBResponse::from(monster))
    }

    #[instrument(skip(self), fields(monster_id = %abbrev_uuid(&id)), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM monsters WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::handlers::Users;
    use crate::db::models::users::UserCreateDBRequest;
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_monster_crud(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let owner = Users::new(&mut conn)
            .create(&UserCreateDBRequest {
                username: "monster_owner".to_string(),
                email: "monster_owner@example.com".to_string(),
                password_hash: "$argon2id$fake$hash".to_string(),
                avatar_path: None,
            })
            .await
            .unwrap()
            .id;

        let mut repo = Monsters::new(&mut conn);

        let created = repo
            .create(&MonsterCreateDBRequest {
                name: "Gnoll".to_string(),
                total_hp: 22,
                current_hp: 22,
                armor_class: 15,
                description: "A hyena-headed raider.".to_string(),
                created_by: owner,
            })
            .await
            .unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Gnoll");
        assert_eq!(fetched.armor_class, 15);

        let updated = repo
            .update(
                created.id,
                &MonsterUpdateDBRequest {
                    name: "Gnoll Pack Lord".to_string(),
                    total_hp: 49,
                    current_hp: 40,
                    armor_class: 15,
                    description: "Leads the warband.".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Gnoll Pack Lord");
        assert_eq!(updated.current_hp, 40);

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }
}
