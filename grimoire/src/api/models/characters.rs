//! API request/response models for player characters.

use crate::db::models::characters::CharacterDBResponse;
use crate::types::{CharacterId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CharacterCreate {
    #[validate(length(min = 1, max = 40))]
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
}

/// Full-overwrite update payload; every mutable field is required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CharacterUpdate {
    #[validate(length(min = 1, max = 40))]
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
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CharacterResponse {
    #[schema(value_type = uuid::Uuid)]
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
    #[schema(value_type = uuid::Uuid)]
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CharacterDBResponse> for CharacterResponse {
    fn from(db: CharacterDBResponse) -> Self {
        Self {
            id: db.id,
            name: db.name,
            total_hp: db.total_hp,
            current_hp: db.current_hp,
            armor_class: db.armor_class,
            strength: db.strength,
            dexterity: db.dexterity,
            constitution: db.constitution,
            intelligence: db.intelligence,
            wisdom: db.wisdom,
            charisma: db.charisma,
            biography: db.biography,
            created_by: db.created_by,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
