//! Database models for player characters.

use crate::api::models::characters::{CharacterCreate, CharacterUpdate};
use crate::db::handlers::repository::OwnedRecord;
use crate::types::{CharacterId, UserId};
use chrono::{DateTime, Utc};

/// Database request for creating a character
#[derive(Debug, Clone)]
pub struct CharacterCreateDBRequest {
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
}

impl CharacterCreateDBRequest {
    pub fn new(created_by: UserId, api: CharacterCreate) -> Self {
        Self {
            name: api.name,
            total_hp: api.total_hp,
            current_hp: api.current_hp,
            armor_class: api.armor_class,
            strength: api.strength,
            dexterity: api.dexterity,
            constitution: api.constitution,
            intelligence: api.intelligence,
            wisdom: api.wisdom,
            charisma: api.charisma,
            biography: api.biography,
            created_by,
        }
    }
}

/// Database request for updating a character; all mutable fields are overwritten
#[derive(Debug, Clone)]
pub struct CharacterUpdateDBRequest {
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

impl From<CharacterUpdate> for CharacterUpdateDBRequest {
    fn from(api: CharacterUpdate) -> Self {
        Self {
            name: api.name,
            total_hp: api.total_hp,
            current_hp: api.current_hp,
            armor_class: api.armor_class,
            strength: api.strength,
            dexterity: api.dexterity,
            constitution: api.constitution,
            intelligence: api.intelligence,
            wisdom: api.wisdom,
            charisma: api.charisma,
            biography: api.biography,
        }
    }
}

/// Database response for a character
#[derive(Debug, Clone)]
pub struct CharacterDBResponse {
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

impl OwnedRecord for CharacterDBResponse {
    fn owner(&self) -> UserId {
        self.created_by
    }
}
