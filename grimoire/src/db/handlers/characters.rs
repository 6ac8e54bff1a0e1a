//! Database repository for player characters.

use crate::types::{abbrev_uuid, CharacterId, UserId};
use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::characters::{CharacterCreateDBRequest, CharacterDBResponse, CharacterUpdateDBRequest},
};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
struct Character {
    pub id: CharacterId,
    pub name: String,
    pub total_hp: i32,
    pub current_hp: i32,
    pub armor_class: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
    pub biography: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Character> for CharacterDBResponse {
    fn from(c: Character) -> Self {
        Self {
            id: c.id,
            name: c.name,
            total_hp: c.total_hp,
            current_hp: c.current_hp,
            armor_class: c.armor_class,
            strength: c.strength,
            dexterity: c.dexterity,
            constitution: c.constitution,
            intelligence: c.intelligence,
            wisdom: c.wisdom,
            charisma: c.charisma,
            biography: c.biography,
            created_by: c.created_by,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

pub struct Characters<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Characters<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Characters<'c> {
    type CreateRequest = CharacterCreateDBRequest;
    type UpdateRequest = CharacterUpdateDBRequest;
    type Response = CharacterDBResponse;
    type Id = CharacterId;

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let character = sqlx::query_as::<_, Character>(
            r#"
            INSERT INTO characters
                (id, name, total_hp, current_hp, armor_class,
                 strength, dexterity, constitution, intelligence, wisdom, charisma,
                 biography, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(request.total_hp)
        .bind(request.current_hp)
        .bind(request.armor_class)
        .bind(request.strength)
        .bind(request.dexterity)
        .bind(request.constitution)
        .bind(request.intelligence)
        .bind(request.wisdom)
        .bind(request.charisma)
        .bind(&request.biography)
        .bind(request.created_by)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(CharacterDBResponse::from(character))
    }

    #[instrument(skip(self), fields(character_id = %abbrev_uuid(&id)), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let character = sqlx::query_as::<_, Character>("SELECT * FROM characters WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(character.map(CharacterDBResponse::from))
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let characters = sqlx::query_as::<_, Character>("SELECT * FROM characters ORDER BY created_at")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(characters.into_iter().map(CharacterDBResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(character_id = %abbrev_uuid(&id)), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        // Full overwrite: the last writer wins on concurrent updates
        let character = sqlx::query_as::<_, Character>(
            r#"
            UPDATE characters SET
                name = $2,
                total_hp = $3,
                current_hp = $4,
                armor_class = $5,
                strength = $6,
                dexterity = $7,
                constitution = $8,
                intelligence = $9,
                wisdom = $10,
                charisma = $11,
                biography = $12,
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
        .bind(request.strength)
        .bind(request.dexterity)
        .bind(request.constitution)
        .bind(request.intelligence)
        .bind(request.wisdom)
        .bind(request.charisma)
        .bind(&request.biography)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(CharacterDBResponse::from(character))
    }

    #[instrument(skip(self), fields(character_id = %abbrev_uuid(&id)), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
