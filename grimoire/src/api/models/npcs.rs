//! API request/response models for non-player characters.

use crate::db::models::npcs::NpcDBResponse;
use crate::types::{NpcId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct NpcCreate {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub job: String,
    pub description: String,
    pub total_hp: i32,
    pub current_hp: i32,
}

/// Full-overwrite update payload; every mutable field is required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct NpcUpdate {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub job: String,
    pub description: String,
    pub total_hp: i32,
    pub current_hp: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NpcResponse {
    #[schema(value_type = uuid::Uuid)]
    pub id: NpcId,
    pub name: String,
    pub job: String,
    pub description: String,
    pub total_hp: i32,
    pub current_hp: i32,
    #[schema(value_type = uuid::Uuid)]
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NpcDBResponse> for NpcResponse {
    fn from(db: NpcDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            job: db.job,
            description: db.description,
            total_hp: db.total_hp,
            current_hp: db.current_hp,
            created_by: db.created_by,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
