//! API request/response models for monsters.

use crate::db::models::monsters::MonsterDBResponse;
use crate::types::{MonsterId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct MonsterCreate {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    pub total_hp: i32,
    pub current_hp: i32,
    pub armor_class: i32,
    pub description: String,
}

/// Full-overwrite update payload; every mutable field is required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct MonsterUpdate {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    pub total_hp: i32,
    pub current_hp: i32,
    pub armor_class: i32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonsterResponse {
    #[schema(value_type = uuid::Uuid)]
    pub id: MonsterId,
    pub name: String,
    pub total_hp: i32,
    pub current_hp: i32,
    pub armor_class: i32,
    pub description: String,
    #[schema(value_type = uuid::Uuid)]
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MonsterDBResponse> for MonsterResponse {
    fn from(db: MonsterDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            total_hp: db.total_hp,
            current_hp: db.current_hp,
            armor_class: db.armor_class,
            description: db.description,
            created_by: db.created_by,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
