//! Database repository for non-player characters.

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::npcs::{NpcCreateDBRequest, NpcDBResponse, NpcUpdateDBRequest},
};
use crate::types::{abbrev_uuid, NpcId, UserId};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
struct Npc {
    pub id: NpcId,
    pub name: String,
    pub job: String,
    pub description: String,
    pub total_hp: i32,
    pub current_hp: i32,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Npc> for NpcDBResponse {
    fn from(n: Npc) -> Self {
        Self {
            id: n.id,
            name: n.name,
            job: n.job,
            description: n.description,
            total_hp: n.total_hp,
            current_hp: n.current_hp,
            created_by: n.created_by,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}

pub struct Npcs<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Npcs<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Npcs<'c> {
    type CreateRequest = NpcCreateDBRequest;
    type UpdateRequest = NpcUpdateDBRequest;
    type Response = NpcDBResponse;
    type Id = NpcId;

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let npc = sqlx::query_as::<_, Npc>(
            r#"
            INSERT INTO npcs (id, name, job, description, total_hp, current_hp, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.job)
        .bind(&request.description)
        .bind(request.total_hp)
        .bind(request.current_hp)
        .bind(request.created_by)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(NpcDBResponse::from(npc))
    }

    #[instrument(skip(self), fields(npc_id = %abbrev_uuid(&id)), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let npc = sqlx::query_as::<_, Npc>("SELECT * FROM npcs WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(npc.map(NpcDBResponse::from))
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let npcs = sqlx::query_as::<_, Npc>("SELECT * FROM npcs ORDER BY created_at")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(npcs.into_iter().map(NpcDBResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(npc_id = %abbrev_uuid(&id)), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let npc = sqlx::query_as::<_, Npc>(
            r#"
            UPDATE npcs SET
                name = $2,
                job = $3,
                description = $4,
                total_hp = $5,
                current_hp = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.job)
        .bind(&request.description)
        .bind(request.total_hp)
        .bind(request.current_hp)
        .fetch_optional(&mut *self.db)
        .await?
        .ok_or(DbError::NotFound)?;

        Ok(NpcDBResponse::from(npc))
    }

    #[instrument(skip(self), fields(npc_id = %abbrev_uuid(&id)), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM npcs WHERE id = $1").bind(id).execute(&mut *self.db).await?;

        Ok(result.rows_affected() > 0)
    }
}
